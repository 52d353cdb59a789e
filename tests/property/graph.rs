use std::collections::HashMap;

use petgraph::algo::{has_path_connecting, toposort};
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;
use topodag::{Graph, GraphError};

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    AddEdge(u8, u8),
    Delete(u8),
    DeleteEdge(u8, u8),
}

// Vertex count plus a list of edges between vertices `0..n`. Cycles and
// self-loops are allowed on purpose.
fn graph_strategy(max_vertices: u8) -> impl Strategy<Value = (u8, Vec<(u8, u8)>)> {
    (1..=max_vertices).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n, 0..n), 0..(n as usize * 2));
        (Just(n), edges)
    })
}

fn ops_strategy(max_vertices: u8) -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        (0..max_vertices).prop_map(Op::Add),
        (0..max_vertices, 0..max_vertices).prop_map(|(a, b)| Op::AddEdge(a, b)),
        (0..max_vertices).prop_map(Op::Delete),
        (0..max_vertices, 0..max_vertices).prop_map(|(a, b)| Op::DeleteEdge(a, b)),
    ];
    proptest::collection::vec(op, 0..40)
}

fn build(n: u8, edges: &[(u8, u8)]) -> Graph<u8> {
    let mut graph = Graph::new();
    graph.add_all(0..n).unwrap();
    graph.add_edges(edges.iter().copied());
    graph
}

fn reference(n: u8, edges: &[(u8, u8)]) -> DiGraphMap<u8, ()> {
    let mut graph: DiGraphMap<u8, ()> = DiGraphMap::new();
    for v in 0..n {
        graph.add_node(v);
    }
    for &(from, to) in edges {
        graph.add_edge(from, to, ());
    }
    graph
}

fn apply(graph: &mut Graph<u8>, op: &Op) {
    // Errors are expected for unknown vertices; only the resulting state matters.
    let _ = match *op {
        Op::Add(v) => graph.add(v),
        Op::AddEdge(a, b) => {
            graph.add_edge(a, b);
            Ok(())
        }
        Op::Delete(v) => graph.delete(&v),
        Op::DeleteEdge(a, b) => graph.delete_edge(&a, &b),
    };
}

fn assert_consistent(graph: &Graph<u8>) -> Result<(), TestCaseError> {
    for u in graph.vertices() {
        for s in graph.successors(u).unwrap() {
            prop_assert!(graph.has(s), "successor {} of {} is missing", s, u);
            prop_assert!(graph.predecessors(s).unwrap().contains(u));
        }
        for p in graph.predecessors(u).unwrap() {
            prop_assert!(graph.has(p), "predecessor {} of {} is missing", p, u);
            prop_assert!(graph.successors(p).unwrap().contains(u));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn validity_matches_reference_cycle_check((n, edges) in graph_strategy(12)) {
        let graph = build(n, &edges);
        let acyclic = toposort(&reference(n, &edges), None).is_ok();

        prop_assert_eq!(graph.is_valid(), acyclic);
        prop_assert_eq!(graph.sorted().is_ok(), acyclic);
    }

    #[test]
    fn sorted_order_is_a_topological_permutation((n, edges) in graph_strategy(12)) {
        let graph = build(n, &edges);

        match graph.sorted() {
            Ok(order) => {
                prop_assert_eq!(order.len(), graph.len());
                let position: HashMap<&u8, usize> =
                    order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
                prop_assert_eq!(position.len(), graph.len());
                for (from, to) in graph.edges() {
                    prop_assert!(position[from] < position[to]);
                }
            }
            Err(GraphError::CycleDetected(witness)) => {
                prop_assert!(!witness.is_empty());
                for v in &witness {
                    prop_assert!(!graph.predecessors(v).unwrap().is_empty());
                }
                for root in graph.roots() {
                    prop_assert!(!witness.contains(root));
                }
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn lazy_and_eager_enumeration_agree((n, edges) in graph_strategy(10)) {
        let graph = build(n, &edges);

        let lazy: Result<Vec<u8>, _> = graph.iter().map(|v| v.copied()).collect();
        let mut eager = Vec::new();
        let eager_result = graph.for_each_sorted(|v| eager.push(*v));

        match (lazy, eager_result) {
            (Ok(lazy), Ok(())) => prop_assert_eq!(lazy, eager),
            (Err(a), Err(b)) => {
                prop_assert_eq!(a, b);
                prop_assert!(eager.is_empty());
            }
            (a, b) => prop_assert!(false, "enumerations disagree: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn descendant_matches_reference_reachability((n, edges) in graph_strategy(10)) {
        let graph = build(n, &edges);
        let reference = reference(n, &edges);

        for a in 0..n {
            for b in 0..n {
                if a == b {
                    continue;
                }
                prop_assert_eq!(
                    graph.is_descendant(&a, &b).unwrap(),
                    has_path_connecting(&reference, a, b, None),
                    "reachability {} -> {}", a, b
                );
            }
        }
    }

    #[test]
    fn adding_an_edge_twice_equals_adding_it_once(
        (n, edges) in graph_strategy(10),
        from in 0u8..10,
        to in 0u8..10
    ) {
        let mut once = build(n, &edges);
        once.add_edge(from, to);

        let mut twice = build(n, &edges);
        twice.add_edge(from, to);
        twice.add_edge(from, to);

        prop_assert_eq!(
            once.edges().collect::<Vec<_>>(),
            twice.edges().collect::<Vec<_>>()
        );
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn adjacency_stays_symmetric_under_mutation(ops in ops_strategy(8)) {
        let mut graph = Graph::new();
        for op in &ops {
            apply(&mut graph, op);
            assert_consistent(&graph)?;
        }
    }

    #[test]
    fn delete_removes_every_reference((n, edges) in graph_strategy(10), victim in 0u8..10) {
        let mut graph = build(n, &edges);
        let existed = graph.has(&victim);

        let result = graph.delete(&victim);

        prop_assert_eq!(result.is_ok(), existed);
        prop_assert!(!graph.has(&victim));
        for (from, to) in graph.edges() {
            prop_assert!(*from != victim && *to != victim);
        }
        assert_consistent(&graph)?;
    }

    #[test]
    fn equality_ignores_edge_insertion_order((n, edges) in graph_strategy(10)) {
        let forward = build(n, &edges);

        let mut reversed_edges = edges.clone();
        reversed_edges.reverse();
        let backward = build(n, &reversed_edges);

        prop_assert_eq!(&forward, &forward);
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(&backward, &forward);
    }
}
