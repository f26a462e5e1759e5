//! Exercises graded against a user-built graph.
//!
//! A [`Task`] is plain data so hosts can keep task lists in JSON. [`Task::check`] returns the
//! share of satisfied conditions, `1.0` meaning the task is solved.

use serde::{Deserialize, Serialize};
use vertexlab_graph::alg::{
    check_graph_for_connectivity, count_bridges, tree_depth, tree_leaf_count,
};
use vertexlab_graph::{AdjacencyMatrix, UndirectedGraph, VertexId};

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error(transparent)]
    Graph(#[from] vertexlab_graph::Error),
    #[error(transparent)]
    Layout(#[from] vertexlab_layout::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Task {
    #[serde(rename_all = "camelCase")]
    Connected { should_be_connected: bool },
    #[serde(rename_all = "camelCase")]
    Nodes { node_count: usize },
    #[serde(rename_all = "camelCase")]
    NodesAndEdges { node_count: usize, edge_count: usize },
    #[serde(rename_all = "camelCase")]
    NodeEdgesAndConnected {
        node_count: usize,
        edge_count: usize,
        should_be_connected: bool,
    },
    /// The graph must be connected and have exactly `bridge_count` bridges.
    #[serde(rename_all = "camelCase")]
    Bridges { bridge_count: usize },
    #[serde(rename_all = "camelCase")]
    SimpleCycles { simple_cycle_count: u64 },
    /// The graph, rooted at `root`, must be `depth` edges deep.
    #[serde(rename_all = "camelCase")]
    TreeDepth { root: VertexId, depth: usize },
    #[serde(rename_all = "camelCase")]
    TreeLeaves { root: VertexId, leaf_count: usize },
}

fn mark(checks: &[bool]) -> f32 {
    if checks.is_empty() {
        return 1.0;
    }
    checks.iter().filter(|&&ok| ok).count() as f32 / checks.len() as f32
}

impl Task {
    pub fn check(&self, graph: &UndirectedGraph) -> Result<f32> {
        let connected = || check_graph_for_connectivity(graph);
        let score = match *self {
            Task::Connected {
                should_be_connected,
            } => mark(&[connected() == should_be_connected]),
            Task::Nodes { node_count } => mark(&[graph.vertex_count() == node_count]),
            Task::NodesAndEdges {
                node_count,
                edge_count,
            } => mark(&[
                graph.vertex_count() == node_count,
                graph.edge_count() == edge_count,
            ]),
            Task::NodeEdgesAndConnected {
                node_count,
                edge_count,
                should_be_connected,
            } => mark(&[
                graph.vertex_count() == node_count,
                graph.edge_count() == edge_count,
                connected() == should_be_connected,
            ]),
            Task::Bridges { bridge_count } => {
                let solved = connected() && count_bridges(&mut graph.clone()) == bridge_count;
                mark(&[solved])
            }
            Task::SimpleCycles { simple_cycle_count } => {
                let found = AdjacencyMatrix::from_graph(graph).count_simple_cycles()?;
                mark(&[found == simple_cycle_count])
            }
            Task::TreeDepth { root, depth } => mark(&[tree_depth(graph, root) == Some(depth)]),
            Task::TreeLeaves { root, leaf_count } => mark(&[
                graph.contains_vertex(root) && tree_leaf_count(graph, root) == leaf_count,
            ]),
        };
        tracing::debug!(task = ?self, score, "task checked");
        Ok(score)
    }

    /// Labelled parameters shown to the user.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match *self {
            Task::Connected {
                should_be_connected,
            } => vec![("Should be connected", yes_no(should_be_connected))],
            Task::Nodes { node_count } => vec![("Node count", node_count.to_string())],
            Task::NodesAndEdges {
                node_count,
                edge_count,
            } => vec![
                ("Node count", node_count.to_string()),
                ("Edge count", edge_count.to_string()),
            ],
            Task::NodeEdgesAndConnected {
                node_count,
                edge_count,
                should_be_connected,
            } => vec![
                ("Node count", node_count.to_string()),
                ("Edge count", edge_count.to_string()),
                ("Should be connected", yes_no(should_be_connected)),
            ],
            Task::Bridges { bridge_count } => vec![("Bridge count", bridge_count.to_string())],
            Task::SimpleCycles { simple_cycle_count } => {
                vec![("Simple cycle count", simple_cycle_count.to_string())]
            }
            Task::TreeDepth { root, depth } => vec![
                ("Root", root.to_string()),
                ("Depth", depth.to_string()),
            ],
            Task::TreeLeaves { root, leaf_count } => vec![
                ("Root", root.to_string()),
                ("Leaf count", leaf_count.to_string()),
            ],
        }
    }

    /// One `label - value` line per field.
    pub fn description(&self) -> String {
        self.fields()
            .into_iter()
            .map(|(label, value)| format!("{label} - {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn yes_no(v: bool) -> String {
    String::from(if v { "yes" } else { "no" })
}
