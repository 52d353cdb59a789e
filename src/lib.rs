// src/lib.rs

//! A directed graph container that keeps vertices in insertion order and
//! yields them in topological order (Kahn's algorithm).
//!
//! ```
//! use topodag::Graph;
//!
//! let mut dag = Graph::new();
//! dag.add_all(1..10).unwrap();
//! dag.add_edges([(1, 3), (5, 9), (8, 7), (8, 6), (6, 4), (4, 3), (4, 7)]);
//!
//! assert_eq!(dag.successors(&4).unwrap(), &[3, 7]);
//! assert_eq!(
//!     dag.sorted().unwrap(),
//!     vec![&1, &2, &5, &9, &8, &6, &4, &3, &7]
//! );
//! ```
//!
//! The graph does no locking of its own; wrap it in a `Mutex` to share it
//! between threads.

pub mod dag;
pub mod errors;
pub mod logging;

pub use dag::{Graph, TopoIter, VertexKey};
pub use errors::{GraphError, Result};
