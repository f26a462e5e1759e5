//! Random connected graph generation with per-vertex degree bounds.
//!
//! A single pass walks the vertices in id order and tops each one up with random neighbors.
//! The pass never exceeds `max` (candidates already at `max` are not eligible) but it can fall
//! short of `min` or produce a disconnected graph, so callers use the retrying
//! [`generate_connected_graph`].

use crate::error::{Error, Result};
use crate::graph::{UndirectedGraph, VertexId};
use rand::Rng;
use rand::seq::SliceRandom;

/// Attempts made by [`generate_connected_graph`] before giving up.
pub const GENERATION_ATTEMPTS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeRange {
    pub min: usize,
    pub max: usize,
}

impl DegreeRange {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(Error::invalid(format!(
                "degree range min ({}) is greater than max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn contains(&self, degree: usize) -> bool {
        (self.min..=self.max).contains(&degree)
    }
}

/// One generation pass. The result respects `range.max` for every vertex but may be
/// disconnected or leave vertices below `range.min`.
pub fn generate_random_graph<R: Rng + ?Sized>(
    node_count: usize,
    range: DegreeRange,
    rng: &mut R,
) -> Result<UndirectedGraph> {
    if node_count < 1 {
        return Err(Error::invalid("node count must be at least 1"));
    }
    range.validate()?;

    let mut g = UndirectedGraph::new();
    for id in 0..node_count {
        g.add_vertex(id)?;
    }

    for id in 0..node_count {
        let degree = g.degree(id);
        let lo = range.min.saturating_sub(degree);
        let hi = range.max.saturating_sub(degree);
        let wanted = if lo >= hi { lo } else { rng.gen_range(lo..=hi) };

        let candidates: Vec<VertexId> = g
            .vertex_ids()
            .filter(|&other| {
                other != id && !g.is_connected(id, other) && g.degree(other) < range.max
            })
            .collect();
        let picked: Vec<VertexId> = candidates
            .choose_multiple(rng, wanted.min(candidates.len()))
            .copied()
            .collect();

        for other in picked {
            g.connect(id, other)?;
        }
    }

    Ok(g)
}

/// Retries [`generate_random_graph`] up to [`GENERATION_ATTEMPTS`] times and returns the first
/// connected graph whose degrees all lie in `range`.
pub fn generate_connected_graph<R: Rng + ?Sized>(
    node_count: usize,
    range: DegreeRange,
    rng: &mut R,
) -> Result<UndirectedGraph> {
    generate_connected_graph_with_attempts(node_count, range, GENERATION_ATTEMPTS, rng)
}

pub fn generate_connected_graph_with_attempts<R: Rng + ?Sized>(
    node_count: usize,
    range: DegreeRange,
    attempts: usize,
    rng: &mut R,
) -> Result<UndirectedGraph> {
    for attempt in 0..attempts {
        let g = generate_random_graph(node_count, range, rng)?;
        if g.is_connected_graph() && g.vertices().all(|v| range.contains(v.degree())) {
            tracing::debug!(
                attempt = attempt + 1,
                node_count,
                edges = g.edge_count(),
                "generated connected graph"
            );
            return Ok(g);
        }
    }

    tracing::debug!(node_count, ?range, attempts, "connected graph generation failed");
    Err(Error::GenerationFailed { attempts })
}
