//! Undirected simple graph over integer vertex ids.
//!
//! Adjacency is stored as an ordered neighbor set per vertex so iteration order (and therefore
//! seeded generation and traversal) is deterministic. The graph keeps a single pending-undo slot
//! for the most recent `connect` / `disconnect`.

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::Bound;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

pub type VertexId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    neighbors: BTreeSet<VertexId>,
}

impl Vertex {
    fn new(id: VertexId) -> Self {
        Self {
            id,
            neighbors: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn neighbors(&self) -> &BTreeSet<VertexId> {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Connected(VertexId, VertexId),
    Disconnected(VertexId, VertexId),
}

#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    vertices: BTreeMap<VertexId, Vertex>,
    pending_undo: Option<Mutation>,
}

impl PartialEq for UndirectedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Eq for UndirectedGraph {}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph with vertices `0..vertex_count` and the given edges.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self> {
        let mut g = Self::new();
        for id in 0..vertex_count {
            g.add_vertex(id)?;
        }
        for (v, w) in edges {
            g.connect(v, w)?;
        }
        g.pending_undo = None;
        Ok(g)
    }

    pub fn add_vertex(&mut self, id: VertexId) -> Result<()> {
        if self.vertices.contains_key(&id) {
            return Err(Error::DuplicateVertex { id });
        }
        self.vertices.insert(id, Vertex::new(id));
        Ok(())
    }

    /// Removes `id` and every edge incident to it.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<()> {
        let vertex = self
            .vertices
            .remove(&id)
            .ok_or(Error::UnknownVertex { id })?;
        for n in vertex.neighbors {
            if let Some(other) = self.vertices.get_mut(&n) {
                other.neighbors.remove(&id);
            }
        }
        self.pending_undo = None;
        Ok(())
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::degree).sum::<usize>() / 2
    }

    /// Neighbors of `id` in ascending order. Unknown ids have no neighbors.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .get(&id)
            .into_iter()
            .flat_map(|v| v.neighbors.iter().copied())
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.vertices.get(&id).map(Vertex::degree).unwrap_or(0)
    }

    pub fn is_connected(&self, v: VertexId, w: VertexId) -> bool {
        let forward = self
            .vertices
            .get(&v)
            .is_some_and(|x| x.neighbors.contains(&w));
        let backward = self
            .vertices
            .get(&w)
            .is_some_and(|x| x.neighbors.contains(&v));
        forward && backward
    }

    fn ensure_pair(&self, v: VertexId, w: VertexId) -> Result<()> {
        for id in [v, w] {
            if !self.vertices.contains_key(&id) {
                return Err(Error::UnknownVertex { id });
            }
        }
        Ok(())
    }

    fn link(&mut self, v: VertexId, w: VertexId) {
        if let Some(x) = self.vertices.get_mut(&v) {
            x.neighbors.insert(w);
        }
        if let Some(x) = self.vertices.get_mut(&w) {
            x.neighbors.insert(v);
        }
    }

    fn unlink(&mut self, v: VertexId, w: VertexId) {
        if let Some(x) = self.vertices.get_mut(&v) {
            x.neighbors.remove(&w);
        }
        if let Some(x) = self.vertices.get_mut(&w) {
            x.neighbors.remove(&v);
        }
    }

    /// Connects `v` and `w`. Connecting an already adjacent pair changes nothing and leaves
    /// nothing to undo.
    pub fn connect(&mut self, v: VertexId, w: VertexId) -> Result<()> {
        self.ensure_pair(v, w)?;
        if v == w {
            return Err(Error::invalid(format!("cannot connect vertex {v} to itself")));
        }
        if self.is_connected(v, w) {
            self.pending_undo = None;
            return Ok(());
        }
        self.link(v, w);
        self.pending_undo = Some(Mutation::Connected(v, w));
        Ok(())
    }

    /// Disconnects `v` and `w`. Disconnecting a non-adjacent pair changes nothing and leaves
    /// nothing to undo.
    pub fn disconnect(&mut self, v: VertexId, w: VertexId) -> Result<()> {
        self.ensure_pair(v, w)?;
        if !self.is_connected(v, w) {
            self.pending_undo = None;
            return Ok(());
        }
        self.unlink(v, w);
        self.pending_undo = Some(Mutation::Disconnected(v, w));
        Ok(())
    }

    /// Reverts the most recent `connect` / `disconnect`. Only one level is kept: returns `false`
    /// when there is nothing to revert.
    pub fn undo(&mut self) -> bool {
        match self.pending_undo.take() {
            Some(Mutation::Connected(v, w)) => {
                self.unlink(v, w);
                true
            }
            Some(Mutation::Disconnected(v, w)) => {
                self.link(v, w);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.pending_undo.is_some()
    }

    /// Every undirected edge exactly once, as `(smaller id, larger id)`.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for v in self.vertices.values() {
            // Each pair is seen from both ends; keep the visit from the smaller id.
            for &w in v.neighbors.range((Bound::Excluded(v.id), Bound::Unbounded)) {
                out.push((v.id, w));
            }
        }
        out
    }

    fn reachable_from(&self, start: VertexId) -> HashSet<VertexId> {
        let mut visited: HashSet<VertexId> = HashSet::default();
        let mut stack = vec![start];
        visited.insert(start);
        while let Some(v) = stack.pop() {
            for w in self.neighbors(v) {
                if visited.insert(w) {
                    stack.push(w);
                }
            }
        }
        visited
    }

    /// `true` iff every vertex is reachable from every other one. Graphs with fewer than two
    /// vertices are connected.
    pub fn is_connected_graph(&self) -> bool {
        let Some(&start) = self.vertices.keys().next() else {
            return true;
        };
        if self.vertices.len() < 2 {
            return true;
        }
        self.reachable_from(start).len() == self.vertices.len()
    }

    pub fn component_count(&self) -> usize {
        let mut seen: HashSet<VertexId> = HashSet::default();
        let mut count = 0;
        for &id in self.vertices.keys() {
            if seen.contains(&id) {
                continue;
            }
            count += 1;
            seen.extend(self.reachable_from(id));
        }
        count
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:", v.id)?;
            for (j, n) in v.neighbors.iter().enumerate() {
                if j == 0 {
                    write!(f, " {n}")?;
                } else {
                    write!(f, ", {n}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::UndirectedGraph;

    #[test]
    fn noop_mutation_clears_pending_undo() {
        let mut g = UndirectedGraph::from_edges(3, [(0, 1)]).unwrap();
        g.connect(1, 2).unwrap();
        g.connect(0, 1).unwrap();
        assert!(!g.undo());
        assert!(g.is_connected(1, 2));
    }

    #[test]
    fn display_lists_neighbors_per_vertex() {
        let g = UndirectedGraph::from_edges(3, [(0, 1), (0, 2)]).unwrap();
        assert_eq!(g.to_string(), "0: 1, 2\n1: 0\n2: 0");
    }

    #[test]
    fn edge_count_matches_edges() {
        let g = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.edges(), vec![(0, 1), (0, 3), (1, 2), (2, 3)]);
    }
}
