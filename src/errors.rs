// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

/// Errors returned by [`Graph`](crate::dag::Graph) operations.
///
/// Every variant carries the key(s) it concerns so callers can repair the
/// graph (e.g. delete the offending edge) and retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    #[error("vertex already exists: {0:?}")]
    VertexAlreadyExists(V),

    #[error("vertex not found: {0:?}")]
    VertexNotFound(V),

    /// The topological sort could not place these vertices. They lie on, or
    /// downstream of, at least one cycle.
    #[error("cycle detected in graph; unsorted vertices: {0:?}")]
    CycleDetected(Vec<V>),
}

pub type Result<T, V> = std::result::Result<T, GraphError<V>>;
