//! Force-directed layout.
//!
//! One iteration snapshots node positions, lets every selected [`Force`] emit per-node vectors,
//! sums them, moves the nodes and clamps them back into the padded area. There is no
//! convergence test; callers decide how many iterations to run.
//!
//! Repulsion terms divide by a power of a distance and blow up when two points coincide or a
//! node touches a wall. Every emitted vector and every summed force is passed through
//! [`sanitize`], which zeroes non-finite components. [`Force::HardEdgeRepulsion`] additionally
//! stops emitting for the rest of the iteration as soon as it meets a zero-length or non-finite
//! displacement.

use crate::config::ForceConfig;
use crate::drawing::{Drawing, ObjectFactory};
use crate::error::Result;
use crate::geom::{Point, Vector, min_vector_from_segment_to_point, sanitize, vector};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use vertexlab_graph::VertexId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Force {
    /// `±m / d^p` away from each of the four borders.
    Walls,
    /// `m / |Δ|^p` between every pair of distinct nodes.
    NodeRepulsion,
    /// `mc * |Δ|^pc` pulling the endpoints of each edge together.
    EdgeSprings,
    /// Repulsion between a node and the midpoint of every edge not incident to it.
    EdgeRepulsion,
    /// Repulsion between a node and the closest point of every edge not incident to it.
    HardEdgeRepulsion,
}

pub const DEFAULT_FORCES: [Force; 3] = [Force::Walls, Force::NodeRepulsion, Force::EdgeSprings];

struct Snapshot {
    nodes: Vec<(VertexId, Point)>,
    positions: FxHashMap<VertexId, Point>,
    edges: Vec<(VertexId, VertexId)>,
}

impl Snapshot {
    fn of<F: ObjectFactory>(drawing: &Drawing<F>) -> Self {
        let nodes: Vec<(VertexId, Point)> =
            drawing.nodes().map(|n| (n.id(), n.position())).collect();
        let positions = nodes.iter().copied().collect();
        let edges = drawing.edges().map(|e| (e.first(), e.second())).collect();
        Self {
            nodes,
            positions,
            edges,
        }
    }

    fn segment(&self, (v, w): (VertexId, VertexId)) -> Option<(Point, Point)> {
        Some((*self.positions.get(&v)?, *self.positions.get(&w)?))
    }
}

fn repulsion(config: &ForceConfig, delta: Vector) -> Vector {
    delta.normalize()
        * (config.multiplier_of_repulsion / delta.length().powf(config.power_of_repulsion))
}

fn connection(config: &ForceConfig, delta: Vector) -> Vector {
    delta.normalize()
        * (config.multiplier_of_connection * delta.length().powf(config.power_of_connection))
}

fn is_degenerate(v: Vector) -> bool {
    let len = v.length();
    len == 0.0 || !len.is_finite()
}

impl Force {
    fn emit(&self, config: &ForceConfig, s: &Snapshot, out: &mut Vec<(VertexId, Vector)>) {
        let m = config.multiplier_of_repulsion;
        let p = config.power_of_repulsion;
        match self {
            Force::Walls => {
                for &(id, pos) in &s.nodes {
                    let mut f = vector(m / pos.x.powf(p), 0.0);
                    f += vector(-m / (config.area_width - pos.x).powf(p), 0.0);
                    f += vector(0.0, m / pos.y.powf(p));
                    f += vector(0.0, -m / (config.area_height - pos.y).powf(p));
                    out.push((id, f));
                }
            }
            Force::NodeRepulsion => {
                for &(id, pos) in &s.nodes {
                    let mut f = vector(0.0, 0.0);
                    for &(other, other_pos) in &s.nodes {
                        if other == id {
                            continue;
                        }
                        f += sanitize(repulsion(config, pos - other_pos));
                    }
                    out.push((id, f));
                }
            }
            Force::EdgeSprings => {
                for &edge in &s.edges {
                    let Some((a, b)) = s.segment(edge) else {
                        continue;
                    };
                    let f = connection(config, b - a);
                    out.push((edge.0, f));
                    out.push((edge.1, -f));
                }
            }
            Force::EdgeRepulsion => {
                for &(id, pos) in &s.nodes {
                    for &edge in &s.edges {
                        if edge.0 == id || edge.1 == id {
                            continue;
                        }
                        let Some((a, b)) = s.segment(edge) else {
                            continue;
                        };
                        let center = a.lerp(b, 0.5);
                        let f = repulsion(config, pos - center);
                        out.push((id, f));
                        out.push((edge.0, -f / 2.0));
                        out.push((edge.1, -f / 2.0));
                    }
                }
            }
            Force::HardEdgeRepulsion => {
                for &(id, pos) in &s.nodes {
                    for &edge in &s.edges {
                        if edge.0 == id || edge.1 == id {
                            continue;
                        }
                        let Some((a, b)) = s.segment(edge) else {
                            continue;
                        };
                        let away = min_vector_from_segment_to_point(a, b, pos);
                        if is_degenerate(away) {
                            return;
                        }
                        let f = repulsion(config, away);
                        out.push((id, f));
                        out.push((edge.0, -f / 2.0));
                        out.push((edge.1, -f / 2.0));
                    }
                }
            }
        }
    }

    /// Raw `(node, vector)` contributions of this force for the current positions.
    pub fn contributions<F: ObjectFactory>(
        &self,
        drawing: &Drawing<F>,
        config: &ForceConfig,
    ) -> Vec<(VertexId, Vector)> {
        let mut out = Vec::new();
        self.emit(config, &Snapshot::of(drawing), &mut out);
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceLayout {
    config: ForceConfig,
}

impl ForceLayout {
    pub fn new(config: ForceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ForceConfig {
        &self.config
    }

    /// One step with [`DEFAULT_FORCES`].
    pub fn iterate<F: ObjectFactory>(&self, drawing: &mut Drawing<F>) {
        self.iterate_with(drawing, &DEFAULT_FORCES);
    }

    /// One step with an arbitrary composition of forces.
    pub fn iterate_with<F: ObjectFactory>(&self, drawing: &mut Drawing<F>, forces: &[Force]) {
        let snapshot = Snapshot::of(drawing);
        let mut emitted: Vec<(VertexId, Vector)> = Vec::new();
        for force in forces {
            force.emit(&self.config, &snapshot, &mut emitted);
        }

        let mut total: FxHashMap<VertexId, Vector> = snapshot
            .nodes
            .iter()
            .map(|&(id, _)| (id, vector(0.0, 0.0)))
            .collect();
        for (id, f) in emitted {
            if let Some(acc) = total.get_mut(&id) {
                *acc += sanitize(f);
            }
        }

        for (id, pos) in drawing.positions_mut() {
            let f = total.get(&id).copied().map_or_else(|| vector(0.0, 0.0), sanitize);
            let moved = *pos + f;
            *pos = self.config.clamp(moved.x, moved.y);
        }
    }

    pub fn run<F: ObjectFactory>(&self, drawing: &mut Drawing<F>, iterations: usize) {
        tracing::trace!(iterations, nodes = drawing.node_count(), "force layout run");
        for _ in 0..iterations {
            self.iterate(drawing);
        }
    }
}
