#![forbid(unsafe_code)]

//! Undirected graph model used by `vertexlab`.
//!
//! - [`UndirectedGraph`]: adjacency-set graph over integer ids with a one-level undo slot.
//! - [`generate`]: random connected graphs with degree bounds.
//! - [`alg`]: connectivity, shortest paths, distances, diameter endpoints and bridges.
//! - [`matrix`]: dense adjacency matrix and simple cycle counting.

pub mod alg;
pub mod error;
pub mod generate;
pub mod graph;
pub mod matrix;

pub use error::{Error, Result};
pub use generate::{
    DegreeRange, GENERATION_ATTEMPTS, generate_connected_graph,
    generate_connected_graph_with_attempts, generate_random_graph,
};
pub use graph::{UndirectedGraph, Vertex, VertexId};
pub use matrix::{AdjacencyMatrix, MAX_CYCLE_VERTICES};
