// src/dag/adjacency.rs

//! Per-vertex adjacency record.

/// Immediate neighbours of a single vertex.
///
/// Both lists keep insertion order and never hold the same key twice; the
/// owning [`Graph`](crate::dag::Graph) keeps them symmetric.
#[derive(Debug, Clone)]
pub(crate) struct Adjacency<V> {
    /// Vertices this one has an edge to.
    pub(crate) successors: Vec<V>,
    /// Vertices with an edge to this one.
    pub(crate) predecessors: Vec<V>,
}

impl<V: PartialEq> Adjacency<V> {
    pub(crate) fn new() -> Self {
        Self {
            successors: Vec::new(),
            predecessors: Vec::new(),
        }
    }

    pub(crate) fn has_successor(&self, v: &V) -> bool {
        self.successors.contains(v)
    }

    pub(crate) fn has_predecessor(&self, v: &V) -> bool {
        self.predecessors.contains(v)
    }

    /// Append `v` to the successor list unless it is already there.
    ///
    /// Returns `true` if the list changed.
    pub(crate) fn push_successor(&mut self, v: V) -> bool {
        push_unique(&mut self.successors, v)
    }

    pub(crate) fn push_predecessor(&mut self, v: V) -> bool {
        push_unique(&mut self.predecessors, v)
    }

    /// Remove `v` from the successor list, keeping the order of the rest.
    pub(crate) fn remove_successor(&mut self, v: &V) -> bool {
        remove_ordered(&mut self.successors, v)
    }

    pub(crate) fn remove_predecessor(&mut self, v: &V) -> bool {
        remove_ordered(&mut self.predecessors, v)
    }

    pub(crate) fn in_degree(&self) -> usize {
        self.predecessors.len()
    }
}

fn push_unique<V: PartialEq>(list: &mut Vec<V>, v: V) -> bool {
    if list.contains(&v) {
        return false;
    }
    list.push(v);
    true
}

fn remove_ordered<V: PartialEq>(list: &mut Vec<V>, v: &V) -> bool {
    match list.iter().position(|x| x == v) {
        Some(idx) => {
            list.remove(idx);
            true
        }
        None => false,
    }
}
