#![allow(dead_code)]

use topodag::{Graph, VertexKey};

/// Builder for `Graph` to simplify test setup.
///
/// Vertices are added first, in the order given, then edges. Edges may
/// mention vertices that were never listed; they are created on the fly.
pub struct GraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: VertexKey> GraphBuilder<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_vertex(mut self, vertex: V) -> Self {
        self.vertices.push(vertex);
        self
    }

    pub fn with_vertices(mut self, vertices: impl IntoIterator<Item = V>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    pub fn with_edge(mut self, from: V, to: V) -> Self {
        self.edges.push((from, to));
        self
    }

    pub fn with_edges(mut self, edges: impl IntoIterator<Item = (V, V)>) -> Self {
        self.edges.extend(edges);
        self
    }

    pub fn build(self) -> Graph<V> {
        let mut graph = Graph::new();
        graph
            .add_all(self.vertices)
            .expect("Duplicate vertex passed to GraphBuilder");
        graph.add_edges(self.edges);
        graph
    }
}

impl<V: VertexKey> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertices 1..=9 with edges (1,3) (5,9) (8,7) (8,6) (6,4) (4,3) (4,7).
pub fn nine_vertex_graph() -> Graph<i32> {
    GraphBuilder::new()
        .with_vertices(1..10)
        .with_edges([(1, 3), (5, 9), (8, 7), (8, 6), (6, 4), (4, 3), (4, 7)])
        .build()
}

/// 1 -> 2 -> 3 -> 1.
pub fn triangle_cycle() -> Graph<i32> {
    GraphBuilder::new()
        .with_edges([(1, 2), (2, 3), (3, 1)])
        .build()
}

/// `0 -> 1 -> ... -> len-1`.
pub fn chain(len: usize) -> Graph<usize> {
    let mut builder = GraphBuilder::new().with_vertices(0..len);
    for i in 1..len {
        builder = builder.with_edge(i - 1, i);
    }
    builder.build()
}
