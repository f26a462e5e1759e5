//! Removal of crossing edges from a laid out drawing.
//!
//! Both passes tentatively disconnect an edge in the underlying graph and roll the change back
//! with [`UndirectedGraph::undo`](vertexlab_graph::UndirectedGraph::undo) when the graph stops
//! being connected, so a connected drawing stays connected.

use crate::drawing::{Drawing, EdgeId, ObjectFactory};
use crate::error::Result;
use crate::geom::segments_intersect;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeintersectStrategy {
    ByLength,
    #[default]
    ByIntersectionsCount,
}

impl DeintersectStrategy {
    /// Runs the pass and returns the number of removed edges.
    pub fn run<F: ObjectFactory>(self, drawing: &mut Drawing<F>) -> Result<usize> {
        match self {
            DeintersectStrategy::ByLength => delete_intersecting_edges_by_length(drawing),
            DeintersectStrategy::ByIntersectionsCount => {
                delete_intersecting_edges_by_intersections_count(drawing)
            }
        }
    }
}

fn crossing<F: ObjectFactory>(drawing: &Drawing<F>, e1: EdgeId, e2: EdgeId) -> bool {
    let (Some(a), Some(b)) = (drawing.edge(e1), drawing.edge(e2)) else {
        return false;
    };
    if a.shares_endpoint_with(b) {
        return false;
    }
    match (drawing.edge_segment(e1), drawing.edge_segment(e2)) {
        (Some((a1, a2)), Some((b1, b2))) => segments_intersect(a1, a2, b1, b2),
        _ => false,
    }
}

/// Disconnects `edge` and keeps the removal only if the graph stays connected. Endpoints left
/// without neighbors are removed too.
fn try_remove<F: ObjectFactory>(drawing: &mut Drawing<F>, edge: EdgeId) -> Result<bool> {
    let Some(e) = drawing.edge(edge) else {
        return Ok(false);
    };
    let (v, w) = (e.first(), e.second());

    drawing.graph_mut().disconnect(v, w)?;
    if !drawing.graph().is_connected_graph() {
        drawing.graph_mut().undo();
        tracing::trace!(edge, v, w, "removal would disconnect the graph");
        return Ok(false);
    }

    drawing.remove_edge(edge)?;
    for end in [v, w] {
        if drawing.graph().contains_vertex(end) && drawing.graph().degree(end) == 0 {
            drawing.remove_node(end)?;
        }
    }
    Ok(true)
}

/// For every crossing pair, removes the longer edge, preferring edges that touch a leaf so they
/// are kept. Falls back to the other edge of the pair, and skips the pair when neither removal
/// keeps the graph connected.
pub fn delete_intersecting_edges_by_length<F: ObjectFactory>(
    drawing: &mut Drawing<F>,
) -> Result<usize> {
    let ids = drawing.edge_ids();
    let mut removed = 0;

    for &e1 in &ids {
        for &e2 in &ids {
            if !crossing(drawing, e1, e2) {
                continue;
            }

            let key = |id: EdgeId| {
                let leaf = if drawing.edge_touches_leaf(id) { 0u8 } else { 1 };
                (leaf, drawing.edge_length(id).unwrap_or(0.0))
            };
            let mut ordered = [(e1, key(e1)), (e2, key(e2))];
            ordered.sort_by(|(_, a), (_, b)| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

            if try_remove(drawing, ordered[1].0)? || try_remove(drawing, ordered[0].0)? {
                removed += 1;
            } else {
                tracing::trace!(e1, e2, "crossing kept");
            }
        }
    }

    tracing::debug!(
        removed,
        remaining = drawing.intersection_count(),
        "deleted intersecting edges by length"
    );
    Ok(removed)
}

/// Greedily removes the edge with the most crossings (earliest id on ties). A removal is kept
/// when the graph stays connected and neither endpoint becomes a leaf; removed edges stop
/// counting as crossings for the others.
pub fn delete_intersecting_edges_by_intersections_count<F: ObjectFactory>(
    drawing: &mut Drawing<F>,
) -> Result<usize> {
    let mut crossings: BTreeMap<EdgeId, BTreeSet<EdgeId>> = BTreeMap::new();
    for (e1, e2) in drawing.intersecting_edge_pairs() {
        crossings.entry(e1).or_default().insert(e2);
    }

    let mut accepted = Vec::new();
    loop {
        crossings.retain(|_, others| !others.is_empty());
        let Some(edge) = crossings
            .iter()
            .max_by_key(|(id, others)| (others.len(), Reverse(**id)))
            .map(|(id, _)| *id)
        else {
            break;
        };
        let others = crossings.remove(&edge).unwrap_or_default();

        let Some(e) = drawing.edge(edge) else {
            continue;
        };
        let (v, w) = (e.first(), e.second());

        drawing.graph_mut().disconnect(v, w)?;
        let graph = drawing.graph();
        if graph.is_connected_graph() && graph.degree(v) != 1 && graph.degree(w) != 1 {
            accepted.push(edge);
            for other in others {
                if let Some(list) = crossings.get_mut(&other) {
                    list.remove(&edge);
                }
            }
        } else {
            drawing.graph_mut().undo();
            tracing::trace!(edge, crossings = others.len(), "edge kept");
        }
    }

    let removed = accepted.len();
    for edge in accepted {
        drawing.remove_edge(edge)?;
    }

    tracing::debug!(
        removed,
        remaining = drawing.intersection_count(),
        "deleted intersecting edges by intersections count"
    );
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::Headless;
    use crate::geom::point;
    use vertexlab_graph::UndirectedGraph;

    /// Unit square with both diagonals; the diagonals cross in the middle.
    fn square_with_diagonals() -> Drawing {
        let g = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)])
            .unwrap();
        Drawing::from_graph(g, Headless, |id| match id {
            0 => point(1.0, 1.0),
            1 => point(3.0, 1.0),
            2 => point(3.0, 3.0),
            _ => point(1.0, 3.0),
        })
    }

    #[test]
    fn crossing_detection_ignores_shared_endpoints() {
        let d = square_with_diagonals();
        let diag_a = d.find_edge(0, 2).unwrap();
        let diag_b = d.find_edge(1, 3).unwrap();
        let side = d.find_edge(0, 1).unwrap();
        assert!(crossing(&d, diag_a, diag_b));
        assert!(!crossing(&d, diag_a, side));
        assert_eq!(d.intersection_count(), 1);
    }

    #[test]
    fn both_strategies_remove_one_diagonal() {
        for strategy in [
            DeintersectStrategy::ByLength,
            DeintersectStrategy::ByIntersectionsCount,
        ] {
            let mut d = square_with_diagonals();
            assert_eq!(strategy.run(&mut d).unwrap(), 1, "{strategy:?}");
            assert_eq!(d.intersection_count(), 0);
            assert_eq!(d.edge_count(), 5);
            assert_eq!(d.graph().edge_count(), 5);
            assert!(d.graph().is_connected_graph());
        }
    }
}
