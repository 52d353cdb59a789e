// src/dag/topo.rs

//! Kahn's topological sort over a [`Graph`].
//!
//! Vertices with no predecessors seed the sort in insertion order. When a
//! vertex is emitted, its successors are walked in stored order and each one
//! whose in-degree drops to zero is emitted right away, cascading depth-first
//! before the walk moves on. For vertices 1..=9 with edges
//! `(1,3) (5,9) (8,7) (8,6) (6,4) (4,3) (4,7)` this yields
//! `1 2 5 9 8 6 4 3 7`.
//!
//! Whatever is left with a non-zero in-degree could not be placed; it lies on
//! or behind a cycle.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::dag::graph::{Graph, VertexKey};
use crate::errors::{GraphError, Result};

/// Outcome of one sort: the placed vertices plus anything left over.
#[derive(Debug)]
pub(crate) struct TopoSort<'a, V> {
    pub(crate) order: Vec<&'a V>,
    /// Vertices that could not be placed, in insertion order.
    pub(crate) unsorted: Vec<&'a V>,
}

impl<'a, V: VertexKey> TopoSort<'a, V> {
    pub(crate) fn is_complete(&self) -> bool {
        self.unsorted.is_empty()
    }

    /// The full order, or `CycleDetected` carrying the unsorted vertices.
    pub(crate) fn into_result(self) -> Result<Vec<&'a V>, V> {
        if self.is_complete() {
            return Ok(self.order);
        }
        debug!(
            sorted = self.order.len(),
            unsorted = ?self.unsorted,
            "topological sort incomplete; cycle detected"
        );
        Err(GraphError::CycleDetected(
            self.unsorted.into_iter().cloned().collect(),
        ))
    }
}

/// Run Kahn's algorithm. Never mutates the graph; every call starts over.
pub(crate) fn kahn_sort<V: VertexKey>(graph: &Graph<V>) -> TopoSort<'_, V> {
    let mut in_degree: HashMap<&V, usize> = graph
        .vertices
        .iter()
        .map(|(v, adj)| (v, adj.in_degree()))
        .collect();

    let seeds: Vec<&V> = graph
        .vertices
        .iter()
        .filter(|(_, adj)| adj.in_degree() == 0)
        .map(|(v, _)| v)
        .collect();
    trace!(seeds = ?seeds, "seeding topological sort");

    let mut order: Vec<&V> = Vec::with_capacity(graph.len());

    for seed in seeds {
        order.push(seed);

        // Each frame is a vertex's successor list plus the next index to visit.
        let mut stack: Vec<(&[V], usize)> = vec![(graph.successors_of(seed), 0)];

        while let Some(frame) = stack.last_mut() {
            let (successors, idx) = *frame;
            let Some(next) = successors.get(idx) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let Some(degree) = in_degree.get_mut(next) else {
                continue;
            };
            *degree = degree.saturating_sub(1);
            if *degree == 0 {
                trace!(vertex = ?next, "released");
                order.push(next);
                stack.push((graph.successors_of(next), 0));
            }
        }
    }

    let unsorted: Vec<&V> = graph
        .vertices
        .keys()
        .filter(|v| in_degree.get(v).copied().unwrap_or(0) > 0)
        .collect();

    TopoSort { order, unsorted }
}
