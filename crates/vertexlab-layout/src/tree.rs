//! Random rooted trees and their incremental layered layout.
//!
//! [`Tree`] is an arena of nodes addressed by [`TreeNodeId`], the root being `0`.
//! [`TreeBuilder`] walks a tree in BFS or DFS order and materializes one node per
//! [`TreeBuilder::step`], re-centring every subtree under its parent after each step.

use crate::config::TreeLayoutConfig;
use crate::drawing::{Drawing, Headless, ObjectFactory};
use crate::error::{Error, Result};
use crate::geom::point;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use vertexlab_graph::{UndirectedGraph, VertexId};

pub type TreeNodeId = usize;

/// Half-open range `[min, max)` of children per node; `min == max` means exactly `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildrenRange {
    pub min: usize,
    pub max: usize,
}

impl ChildrenRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        if self.min >= self.max {
            self.min
        } else {
            rng.gen_range(self.min..self.max)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    children: Vec<Vec<TreeNodeId>>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// A tree holding only its root.
    pub fn new() -> Self {
        Self {
            children: vec![Vec::new()],
        }
    }

    pub fn root(&self) -> TreeNodeId {
        0
    }

    /// Builds a tree layer by layer: every node above the last layer draws its child count
    /// from `range`.
    pub fn random<R: Rng + ?Sized>(
        layer_count: usize,
        range: ChildrenRange,
        rng: &mut R,
    ) -> Result<Self> {
        if layer_count < 1 {
            return Err(Error::InvalidArgument {
                message: "a tree needs at least one layer".to_string(),
            });
        }
        if range.min > range.max {
            return Err(Error::InvalidArgument {
                message: format!(
                    "children range min {} is greater than max {}",
                    range.min, range.max
                ),
            });
        }

        let mut tree = Self::new();
        let mut queue = VecDeque::from([(0usize, tree.root())]);
        while let Some((layer, node)) = queue.pop_front() {
            if layer + 1 == layer_count {
                continue;
            }
            for _ in 0..range.sample(rng) {
                let child = tree.add_child(node)?;
                queue.push_back((layer + 1, child));
            }
        }
        tracing::debug!(
            layer_count,
            nodes = tree.node_count(),
            "generated random tree"
        );
        Ok(tree)
    }

    pub fn add_child(&mut self, parent: TreeNodeId) -> Result<TreeNodeId> {
        if parent >= self.children.len() {
            return Err(Error::UnknownNode { id: parent });
        }
        let id = self.children.len();
        self.children.push(Vec::new());
        self.children[parent].push(id);
        Ok(id)
    }

    pub fn children(&self, node: TreeNodeId) -> &[TreeNodeId] {
        self.children.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.children.len()
    }

    /// Layer index of the deepest node; `0` for a lone root.
    pub fn depth(&self) -> usize {
        self.bfs().map(|v| v.layer).max().unwrap_or(0)
    }

    /// Nodes without children, not counting the root.
    pub fn leaf_count(&self) -> usize {
        self.children
            .iter()
            .enumerate()
            .filter(|(id, kids)| *id != self.root() && kids.is_empty())
            .count()
    }

    /// The tree as an undirected graph over the same node ids.
    pub fn to_graph(&self) -> Result<UndirectedGraph> {
        let edges = self
            .children
            .iter()
            .enumerate()
            .flat_map(|(parent, kids)| kids.iter().map(move |&kid| (parent, kid)));
        Ok(UndirectedGraph::from_edges(self.node_count(), edges)?)
    }

    pub fn bfs(&self) -> TreeWalk<'_> {
        TreeWalk::new(self, TraversalOrder::Bfs)
    }

    pub fn dfs(&self) -> TreeWalk<'_> {
        TreeWalk::new(self, TraversalOrder::Dfs)
    }

    pub fn walk(&self, order: TraversalOrder) -> TreeWalk<'_> {
        TreeWalk::new(self, order)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    #[default]
    Bfs,
    Dfs,
}

/// One node as yielded by a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeVisit {
    pub layer: usize,
    pub node: TreeNodeId,
    /// Position of this node in the traversal, starting at 0 for the root.
    pub visit: usize,
    pub parent: Option<TreeNodeId>,
    /// Index of this node among its parent's children.
    pub child_index: usize,
}

/// BFS (FIFO) or DFS (LIFO, last child first) walk over a [`Tree`].
pub struct TreeWalk<'a> {
    tree: &'a Tree,
    order: TraversalOrder,
    pending: VecDeque<(usize, TreeNodeId, Option<TreeNodeId>, usize)>,
    visited: usize,
}

impl<'a> TreeWalk<'a> {
    fn new(tree: &'a Tree, order: TraversalOrder) -> Self {
        Self {
            tree,
            order,
            pending: VecDeque::from([(0, tree.root(), None, 0)]),
            visited: 0,
        }
    }
}

impl Iterator for TreeWalk<'_> {
    type Item = TreeVisit;

    fn next(&mut self) -> Option<TreeVisit> {
        let (layer, node, parent, child_index) = match self.order {
            TraversalOrder::Bfs => self.pending.pop_front()?,
            TraversalOrder::Dfs => self.pending.pop_back()?,
        };
        for (i, &kid) in self.tree.children(node).iter().enumerate() {
            self.pending.push_back((layer + 1, kid, Some(node), i));
        }
        let visit = self.visited;
        self.visited += 1;
        Some(TreeVisit {
            layer,
            node,
            visit,
            parent,
            child_index,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Planned {
    layer: usize,
    parent: Option<VertexId>,
    child_index: usize,
}

/// Grows a drawing of a tree one node at a time.
///
/// Drawn vertex ids are traversal positions, so the root is vertex `0` and the `n`-th step
/// creates vertex `n - 1`.
pub struct TreeBuilder<F: ObjectFactory = Headless> {
    plan: Vec<Planned>,
    cursor: usize,
    /// Materialized children of each drawn vertex, ordered by child index.
    children: Vec<Vec<(usize, VertexId)>>,
    config: TreeLayoutConfig,
    drawing: Drawing<F>,
    root: Option<VertexId>,
}

impl<F: ObjectFactory> TreeBuilder<F> {
    pub fn new(
        tree: &Tree,
        order: TraversalOrder,
        config: TreeLayoutConfig,
        factory: F,
    ) -> Result<Self> {
        config.validate()?;

        let mut vertex_of = vec![0; tree.node_count()];
        let mut plan = Vec::with_capacity(tree.node_count());
        for v in tree.walk(order) {
            vertex_of[v.node] = v.visit;
            plan.push(Planned {
                layer: v.layer,
                parent: v.parent.map(|p| vertex_of[p]),
                child_index: v.child_index,
            });
        }

        Ok(Self {
            plan,
            cursor: 0,
            children: Vec::new(),
            config,
            drawing: Drawing::new(factory),
            root: None,
        })
    }

    /// Materializes the next node. Returns `false` once every node is drawn.
    pub fn step(&mut self) -> Result<bool> {
        let Some(next) = self.plan.get(self.cursor).copied() else {
            return Ok(false);
        };
        let id = self.cursor;
        self.cursor += 1;
        self.children.push(Vec::new());

        let y = self.config.root_y - next.layer as f64 * self.config.layer_spacing;
        match next.parent {
            None => {
                self.drawing
                    .add_node(id, point(self.config.root_x, self.config.root_y))?;
                self.root = Some(id);
            }
            Some(parent) => {
                let x = self
                    .drawing
                    .position(parent)
                    .ok_or(Error::UnknownNode { id: parent })?
                    .x;
                self.drawing.add_node(id, point(x, y))?;
                self.drawing.connect(parent, id)?;

                let siblings = &mut self.children[parent];
                let at = siblings.partition_point(|&(i, _)| i < next.child_index);
                siblings.insert(at, (next.child_index, id));

                if let Some(root) = self.root {
                    self.arrange(root)?;
                }
            }
        }
        Ok(true)
    }

    pub fn finish(&mut self) -> Result<()> {
        while self.step()? {}
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.plan.len()
    }

    pub fn root(&self) -> Option<VertexId> {
        self.root
    }

    pub fn drawing(&self) -> &Drawing<F> {
        &self.drawing
    }

    pub fn into_drawing(self) -> Drawing<F> {
        self.drawing
    }

    fn x_of(&self, id: VertexId) -> Result<f64> {
        self.drawing
            .position(id)
            .map(|p| p.x)
            .ok_or(Error::UnknownNode { id })
    }

    /// Lays out the subtree of `node` under its current x and returns the width it takes.
    fn arrange(&mut self, node: VertexId) -> Result<f64> {
        let kids: Vec<VertexId> = self.children[node].iter().map(|&(_, v)| v).collect();
        let mut widths = Vec::with_capacity(kids.len());
        for &kid in &kids {
            widths.push(self.arrange(kid)?);
        }

        let total = widths
            .iter()
            .sum::<f64>()
            .max(self.config.min_distance_between_nodes);
        let mut cursor = self.x_of(node)? - total / 2.0;
        for (&kid, width) in kids.iter().zip(widths) {
            cursor += width / 2.0;
            let offset = cursor - self.x_of(kid)?;
            self.shift(kid, offset)?;
            cursor += width / 2.0;
        }
        Ok(total)
    }

    fn shift(&mut self, node: VertexId, dx: f64) -> Result<()> {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let p = self.drawing.position(id).ok_or(Error::UnknownNode { id })?;
            self.drawing.set_position(id, point(p.x + dx, p.y))?;
            stack.extend(self.children[id].iter().map(|&(_, v)| v));
        }
        Ok(())
    }
}
