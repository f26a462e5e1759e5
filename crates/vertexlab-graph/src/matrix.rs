//! Dense adjacency matrix and simple cycle counting.

use crate::error::{Error, Result};
use crate::graph::{UndirectedGraph, VertexId};

/// Largest graph accepted by [`AdjacencyMatrix::count_simple_cycles`]; the DP table has
/// `2^n * n` entries.
pub const MAX_CYCLE_VERTICES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self> {
        let size = rows.len();
        if let Some(bad) = rows.iter().position(|r| r.len() != size) {
            return Err(Error::invalid(format!(
                "adjacency matrix must be square: row {bad} has {} columns, expected {size}",
                rows[bad].len()
            )));
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Maps vertex ids to matrix indices in ascending id order.
    pub fn from_graph(g: &UndirectedGraph) -> Self {
        let ids: Vec<VertexId> = g.vertex_ids().collect();
        let mut m = Self::with_size(ids.len());
        for (v, w) in g.edges() {
            let (Ok(i), Ok(j)) = (ids.binary_search(&v), ids.binary_search(&w)) else {
                continue;
            };
            m.set_adjacency(i, j, true);
        }
        m
    }

    pub fn node_count(&self) -> usize {
        self.size
    }

    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        i < self.size && j < self.size && self.cells[i * self.size + j]
    }

    /// Sets both `(i, j)` and `(j, i)`.
    pub fn set_adjacency(&mut self, i: usize, j: usize, value: bool) {
        if i >= self.size || j >= self.size {
            return;
        }
        self.cells[i * self.size + j] = value;
        self.cells[j * self.size + i] = value;
    }

    pub fn row(&self, i: usize) -> &[bool] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Number of simple cycles (length >= 3).
    ///
    /// `dp[mask][j]` counts simple paths that start at the lowest vertex of `mask`, visit exactly
    /// the vertices of `mask` and end at `j`. A path closes into a cycle when `j` is adjacent to
    /// the start and the mask has more than two vertices; every cycle is found once per
    /// direction.
    pub fn count_simple_cycles(&self) -> Result<u64> {
        let n = self.size;
        if n > MAX_CYCLE_VERTICES {
            return Err(Error::invalid(format!(
                "cycle counting supports at most {MAX_CYCLE_VERTICES} vertices, got {n}"
            )));
        }
        if n < 3 {
            return Ok(0);
        }

        let states = 1usize << n;
        let mut dp = vec![0u64; states * n];
        for i in 0..n {
            dp[(1 << i) * n + i] = 1;
        }

        let mut closed: u64 = 0;
        for mask in 1..states {
            let start = mask.trailing_zeros() as usize;
            let len = mask.count_ones();
            for j in 0..n {
                let paths = dp[mask * n + j];
                if paths == 0 {
                    continue;
                }
                if len > 2 && self.is_adjacent(j, start) {
                    closed += paths;
                }
                for k in (start + 1)..n {
                    if mask & (1 << k) != 0 || !self.is_adjacent(j, k) {
                        continue;
                    }
                    dp[(mask | (1 << k)) * n + k] += paths;
                }
            }
        }

        Ok(closed / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_square_matrix_is_rejected() {
        let err = AdjacencyMatrix::new(vec![vec![false, true], vec![true]]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn complete_graph_on_four_vertices_has_seven_cycles() {
        // Four triangles plus three 4-cycles.
        let g = UndirectedGraph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
            .unwrap();
        assert_eq!(AdjacencyMatrix::from_graph(&g).count_simple_cycles(), Ok(7));
    }

    #[test]
    fn rows_are_symmetric() {
        let mut m = AdjacencyMatrix::with_size(3);
        m.set_adjacency(0, 2, true);
        assert_eq!(m.row(0), &[false, false, true]);
        assert_eq!(m.row(2), &[true, false, false]);
    }
}
