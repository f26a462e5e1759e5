#![forbid(unsafe_code)]

//! `vertexlab` generates, lays out and grades undirected graphs for graph theory exercises.
//!
//! - [`graph`]: the graph model, random connected graphs and structural analysis.
//! - [`layout`]: headless drawings, force-directed layout, edge de-intersection and trees.
//! - [`tasks`]: exercise definitions graded against a graph.

pub use vertexlab_graph as graph;
pub use vertexlab_layout as layout;

pub mod tasks;

pub use graph::{UndirectedGraph, VertexId};
pub use layout::{Drawing, ForceConfig, ForceLayout, LayoutSession, ObjectFactory};
pub use tasks::{Task, TaskError};
