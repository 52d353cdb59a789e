// src/dag/iter.rs

//! Topologically ordered enumeration of a [`Graph`].

use std::iter::FusedIterator;
use std::vec;

use crate::dag::graph::{Graph, VertexKey};
use crate::dag::topo::kahn_sort;
use crate::errors::{GraphError, Result};

/// Lazy, single-pass iterator over a graph in topological order.
///
/// Nothing is computed until the first call to `next`. If the graph has a
/// cycle, that first item is `Err(GraphError::CycleDetected(..))` and the
/// iterator is exhausted afterwards.
#[derive(Debug)]
pub struct TopoIter<'a, V> {
    graph: &'a Graph<V>,
    state: IterState<'a, V>,
}

#[derive(Debug)]
enum IterState<'a, V> {
    NotStarted,
    Sorted(vec::IntoIter<&'a V>),
    Done,
}

impl<'a, V: VertexKey> Iterator for TopoIter<'a, V> {
    type Item = Result<&'a V, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, IterState::NotStarted) {
            match kahn_sort(self.graph).into_result() {
                Ok(order) => self.state = IterState::Sorted(order.into_iter()),
                Err(err) => {
                    self.state = IterState::Done;
                    return Some(Err(err));
                }
            }
        }

        match &mut self.state {
            IterState::Sorted(order) => order.next().map(Ok),
            IterState::NotStarted | IterState::Done => None,
        }
    }
}

impl<V: VertexKey> FusedIterator for TopoIter<'_, V> {}

impl<V: VertexKey> Graph<V> {
    /// Iterate vertices in topological order.
    ///
    /// ```
    /// use topodag::Graph;
    ///
    /// let mut dag = Graph::new();
    /// dag.add_all(1..10).unwrap();
    /// dag.add_edges([(1, 3), (5, 9), (8, 7), (8, 6), (6, 4), (4, 3), (4, 7)]);
    ///
    /// let order: Vec<i32> = dag.iter().map(|v| v.map(|v| *v)).collect::<Result<_, _>>().unwrap();
    /// assert_eq!(order, vec![1, 2, 5, 9, 8, 6, 4, 3, 7]);
    /// ```
    pub fn iter(&self) -> TopoIter<'_, V> {
        TopoIter {
            graph: self,
            state: IterState::NotStarted,
        }
    }

    /// Call `f` on every vertex in topological order.
    ///
    /// On a cyclic graph this fails before `f` is called at all.
    pub fn for_each_sorted<F>(&self, f: F) -> Result<(), V>
    where
        F: FnMut(&V),
    {
        self.sorted()?.into_iter().for_each(f);
        Ok(())
    }

    /// All vertices in topological order.
    pub fn sorted(&self) -> Result<Vec<&V>, V> {
        kahn_sort(self).into_result()
    }
}

impl<'a, V: VertexKey> IntoIterator for &'a Graph<V> {
    type Item = std::result::Result<&'a V, GraphError<V>>;
    type IntoIter = TopoIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
