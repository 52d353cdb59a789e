// src/dag/graph.rs

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::debug;

use crate::dag::adjacency::Adjacency;
use crate::dag::topo::kahn_sort;
use crate::errors::{GraphError, Result};

/// Anything usable as a vertex identity.
///
/// Implemented for every `Eq + Hash + Clone + Debug` type; `Debug` is needed
/// for log fields and error messages.
pub trait VertexKey: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexKey for T {}

/// In-memory directed graph keyed by vertex.
///
/// Vertices remember the order they were added in; that order is the
/// tie-break for [`roots`](Graph::roots) and for topological iteration.
/// Cycles are allowed to exist and are reported by [`is_valid`](Graph::is_valid)
/// or when iterating.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    pub(crate) vertices: IndexMap<V, Adjacency<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }
}

impl<V: VertexKey> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(capacity),
        }
    }

    /// Add a vertex with no edges.
    ///
    /// ```
    /// use topodag::{Graph, GraphError};
    ///
    /// let mut dag = Graph::new();
    /// dag.add(1).unwrap();
    /// dag.add(2).unwrap();
    /// assert_eq!(dag.add(1), Err(GraphError::VertexAlreadyExists(1)));
    /// assert_eq!(dag.sorted().unwrap(), vec![&1, &2]);
    /// ```
    pub fn add(&mut self, vertex: V) -> Result<(), V> {
        if self.vertices.contains_key(&vertex) {
            return Err(GraphError::VertexAlreadyExists(vertex));
        }
        debug!(vertex = ?vertex, "adding vertex");
        self.vertices.insert(vertex, Adjacency::new());
        Ok(())
    }

    /// Add several vertices in order.
    ///
    /// Stops at the first duplicate; vertices added before it stay in the
    /// graph.
    pub fn add_all<I>(&mut self, vertices: I) -> Result<(), V>
    where
        I: IntoIterator<Item = V>,
    {
        for vertex in vertices {
            self.add(vertex)?;
        }
        Ok(())
    }

    /// Add an edge `from -> to`.
    ///
    /// Missing endpoints are created first (`from`, then `to`). Adding an
    /// edge that already exists does nothing.
    ///
    /// ```
    /// use topodag::Graph;
    ///
    /// let mut dag = Graph::new();
    /// dag.add_edge(1, 2);
    /// assert_eq!(dag.sorted().unwrap(), vec![&1, &2]);
    /// assert_eq!(dag.has_edge(&1, &2), Ok(true));
    /// ```
    pub fn add_edge(&mut self, from: V, to: V) {
        self.ensure_vertex(&from);
        self.ensure_vertex(&to);

        let added = self
            .vertices
            .get_mut(&from)
            .is_some_and(|adj| adj.push_successor(to.clone()));
        if !added {
            return;
        }
        if let Some(adj) = self.vertices.get_mut(&to) {
            adj.push_predecessor(from.clone());
        }
        debug!(from = ?from, to = ?to, "added edge");
    }

    pub fn add_edge_pair(&mut self, edge: (V, V)) {
        let (from, to) = edge;
        self.add_edge(from, to);
    }

    /// Add every `(from, to)` pair, as repeated [`add_edge`](Graph::add_edge).
    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }

    /// Remove a vertex and every edge touching it.
    pub fn delete(&mut self, vertex: &V) -> Result<(), V> {
        let adj = self
            .vertices
            .shift_remove(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))?;

        for succ in &adj.successors {
            if let Some(neighbour) = self.vertices.get_mut(succ) {
                neighbour.remove_predecessor(vertex);
            }
        }
        for pred in &adj.predecessors {
            if let Some(neighbour) = self.vertices.get_mut(pred) {
                neighbour.remove_successor(vertex);
            }
        }

        debug!(
            vertex = ?vertex,
            successors = adj.successors.len(),
            predecessors = adj.predecessors.len(),
            "deleted vertex"
        );
        Ok(())
    }

    /// Remove the edge `from -> to` if present.
    ///
    /// Both endpoints must exist.
    pub fn delete_edge(&mut self, from: &V, to: &V) -> Result<(), V> {
        self.adjacency(from)?;
        self.adjacency(to)?;

        let removed = self
            .vertices
            .get_mut(from)
            .is_some_and(|adj| adj.remove_successor(to));
        if let Some(adj) = self.vertices.get_mut(to) {
            adj.remove_predecessor(from);
        }
        if removed {
            debug!(from = ?from, to = ?to, "deleted edge");
        }
        Ok(())
    }

    pub fn has(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Whether the edge `from -> to` exists.
    ///
    /// Only reports `true` when both adjacency records agree.
    pub fn has_edge(&self, from: &V, to: &V) -> Result<bool, V> {
        let from_adj = self.adjacency(from)?;
        let to_adj = self.adjacency(to)?;
        Ok(from_adj.has_successor(to) && to_adj.has_predecessor(from))
    }

    /// Direct successors of `vertex`, in the order their edges were added.
    pub fn successors(&self, vertex: &V) -> Result<&[V], V> {
        Ok(self.adjacency(vertex)?.successors.as_slice())
    }

    /// Direct predecessors of `vertex`, in the order their edges were added.
    pub fn predecessors(&self, vertex: &V) -> Result<&[V], V> {
        Ok(self.adjacency(vertex)?.predecessors.as_slice())
    }

    /// Vertices without predecessors, in insertion order.
    pub fn roots(&self) -> Vec<&V> {
        self.vertices
            .iter()
            .filter(|(_, adj)| adj.in_degree() == 0)
            .map(|(v, _)| v)
            .collect()
    }

    /// Whether `other` can be reached from `vertex` by following one or more
    /// edges.
    ///
    /// A vertex is only its own descendant when it sits on a cycle.
    pub fn is_descendant(&self, vertex: &V, other: &V) -> Result<bool, V> {
        let start = self.adjacency(vertex)?;
        self.adjacency(other)?;

        let mut stack: Vec<&V> = start.successors.iter().collect();
        let mut visited: HashSet<&V> = HashSet::new();

        while let Some(current) = stack.pop() {
            if current == other {
                return Ok(true);
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(adj) = self.vertices.get(current) {
                stack.extend(adj.successors.iter());
            }
        }

        Ok(false)
    }

    /// `true` if a topological order covers every vertex (no cycles).
    pub fn is_valid(&self) -> bool {
        kahn_sort(self).is_complete()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in insertion order (not topological order).
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|adj| adj.successors.len()).sum()
    }

    /// All edges as `(from, to)`, grouped by `from` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.vertices
            .iter()
            .flat_map(|(from, adj)| adj.successors.iter().map(move |to| (from, to)))
    }

    /// Successors of a vertex, or an empty slice if it is unknown.
    pub(crate) fn successors_of(&self, vertex: &V) -> &[V] {
        self.vertices
            .get(vertex)
            .map(|adj| adj.successors.as_slice())
            .unwrap_or(&[])
    }

    fn adjacency(&self, vertex: &V) -> Result<&Adjacency<V>, V> {
        self.vertices
            .get(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))
    }

    fn ensure_vertex(&mut self, vertex: &V) {
        if !self.vertices.contains_key(vertex) {
            debug!(vertex = ?vertex, "adding vertex implicitly for edge");
            self.vertices.insert(vertex.clone(), Adjacency::new());
        }
    }
}

/// Two graphs are equal when they hold the same vertices and every vertex
/// has the same successors and predecessors. Insertion order is ignored.
impl<V: VertexKey> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.vertices.iter().all(|(v, adj)| match other.vertices.get(v) {
                Some(theirs) => {
                    same_members(&adj.successors, &theirs.successors)
                        && same_members(&adj.predecessors, &theirs.predecessors)
                }
                None => false,
            })
    }
}

impl<V: VertexKey> Eq for Graph<V> {}

// Adjacency lists are duplicate-free, so equal length plus equal sets means
// equal membership.
fn same_members<V: VertexKey>(a: &[V], b: &[V]) -> bool {
    a.len() == b.len() && a.iter().collect::<HashSet<_>>() == b.iter().collect::<HashSet<_>>()
}

impl<V: VertexKey> Extend<(V, V)> for Graph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        self.add_edges(edges);
    }
}

impl<V: VertexKey> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }
}
