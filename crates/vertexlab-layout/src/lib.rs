#![forbid(unsafe_code)]

//! Headless drawing of `vertexlab` graphs.
//!
//! - [`Drawing`]: node positions and drawn edges kept in step with an
//!   [`UndirectedGraph`](vertexlab_graph::UndirectedGraph), with host objects created through an
//!   [`ObjectFactory`].
//! - [`ForceLayout`]: one iteration of a force-directed layout per call.
//! - [`planarize`]: removal of crossing edges without disconnecting the graph.
//! - [`tree`]: random rooted trees and their incremental layered layout.
//! - [`LayoutSession`]: the full random-graph pipeline, driven one step at a time.

pub mod config;
pub mod drawing;
pub mod error;
pub mod force;
pub mod geom;
pub mod planarize;
pub mod session;
pub mod tree;

pub use config::{ForceConfig, TreeLayoutConfig};
pub use drawing::{Drawing, DrawnEdge, EdgeId, Headless, ObjectFactory, PositionedNode};
pub use error::{Error, Result};
pub use force::{DEFAULT_FORCES, Force, ForceLayout};
pub use geom::{Point, Rect, Size, Vector, segments_intersect};
pub use planarize::{
    DeintersectStrategy, delete_intersecting_edges_by_intersections_count,
    delete_intersecting_edges_by_length,
};
pub use session::{LayoutSession, SessionPhase, SessionSettings, generate_random_drawing};
pub use tree::{
    ChildrenRange, TraversalOrder, Tree, TreeBuilder, TreeNodeId, TreeVisit, TreeWalk,
};
