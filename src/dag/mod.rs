// src/dag/mod.rs

//! Graph container and topological ordering.
//!
//! - [`graph`] holds the vertex map and every mutation / query operation.
//! - [`adjacency`] is the per-vertex successor / predecessor record.
//! - [`topo`] runs Kahn's algorithm for validation and iteration.
//! - [`iter`] exposes ordered enumeration on top of the sort.

mod adjacency;
pub mod graph;
pub mod iter;
mod topo;

pub use graph::{Graph, VertexKey};
pub use iter::TopoIter;
