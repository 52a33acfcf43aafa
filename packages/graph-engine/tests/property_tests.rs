//! Property-based tests
//!
//! Invariants that should hold for ALL generated graphs:
//! - Reported paths are real edge walks whose weights sum to the distance
//! - Reported distances never beat the true optimum (petgraph Dijkstra)
//! - A direct edge bounds the distance from above
//! - Depth-first order visits exactly the vertices reachable from 1, once each

mod common;

use common::*;
use graph_engine::{Distance, WeightedGraph};
use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::collections::HashSet;

// ============================================================================
// Strategies
// ============================================================================

fn weighted_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (1usize..=8).prop_flat_map(|size| {
        let edge = (1..=size, 1..=size, 0i64..50)
            .prop_map(|(from, to, w)| if from == to { (from, to, 0) } else { (from, to, w) });
        (Just(size), prop::collection::vec(edge, 0..24))
    })
}

fn adjacency_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..=10).prop_flat_map(|size| {
        (Just(size), prop::collection::vec((1..=size, 1..=size), 0..30))
    })
}

/// Oracle copy of the cost matrix
fn to_petgraph(graph: &WeightedGraph) -> (DiGraph<(), u64>, Vec<NodeIndex>) {
    let mut g = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..graph.size()).map(|_| g.add_node(())).collect();
    for i in 1..=graph.size() {
        for j in 1..=graph.size() {
            if let Some(cost) = graph.cost(i, j) {
                g.add_edge(nodes[i - 1], nodes[j - 1], cost);
            }
        }
    }
    (g, nodes)
}

// ============================================================================
// Proptest
// ============================================================================

proptest! {
    #[test]
    fn prop_paths_are_real_walks((size, edges) in weighted_edges()) {
        let mut graph = weighted(size, &edges);
        graph.compute_all_shortest_paths();

        for s in 1..=size {
            for d in 1..=size {
                let path = indices(&graph.path(s, d));
                match graph.distance(s, d) {
                    Distance::NoPath => prop_assert!(path.is_empty()),
                    Distance::Reachable(dist) => {
                        prop_assert_eq!(path.first().copied(), Some(s));
                        prop_assert_eq!(path.last().copied(), Some(d));
                        let mut total = 0u64;
                        for hop in path.windows(2) {
                            let cost = graph.cost(hop[0], hop[1]);
                            prop_assert!(cost.is_some(), "missing edge {}->{}", hop[0], hop[1]);
                            total += cost.unwrap_or_default();
                        }
                        prop_assert_eq!(total, dist);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_never_shorter_than_optimum((size, edges) in weighted_edges()) {
        let mut graph = weighted(size, &edges);
        graph.compute_all_shortest_paths();
        let (oracle, nodes) = to_petgraph(&graph);

        for s in 1..=size {
            let optimum = dijkstra(&oracle, nodes[s - 1], None, |e| *e.weight());
            for d in 1..=size {
                if let Distance::Reachable(dist) = graph.distance(s, d) {
                    let best = optimum.get(&nodes[d - 1]).copied();
                    prop_assert!(best.is_some(), "{}->{} reported reachable", s, d);
                    prop_assert!(dist >= best.unwrap_or_default());
                }
            }
        }
    }

    #[test]
    fn prop_direct_edge_bounds_distance(
        (size, edges) in weighted_edges(),
        w in 0i64..100,
    ) {
        prop_assume!(size >= 2);
        let mut graph = weighted(size, &edges);
        prop_assert!(graph.insert_edge(1, size, w));
        graph.compute_all_shortest_paths();

        let dist = graph.distance(1, size).cost();
        prop_assert!(dist.is_some());
        prop_assert!(dist.unwrap_or(u64::MAX) <= w as u64);
    }

    #[test]
    fn prop_recompute_is_deterministic((size, edges) in weighted_edges()) {
        let mut graph = weighted(size, &edges);
        graph.compute_all_shortest_paths();
        let first = graph.path_table().cloned();
        graph.compute_all_shortest_paths();
        prop_assert_eq!(graph.path_table().cloned(), first);
    }

    #[test]
    fn prop_dfs_visits_reachable_once((size, edges) in adjacency_edges()) {
        let mut graph = adjacency(size, &edges);
        let order = indices(&graph.depth_first_order());

        let unique: HashSet<usize> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
        prop_assert_eq!(order.first().copied(), Some(1));

        let mut oracle = DiGraph::<(), ()>::new();
        let nodes: Vec<NodeIndex> = (0..size).map(|_| oracle.add_node(())).collect();
        for &(from, to) in &edges {
            oracle.add_edge(nodes[from - 1], nodes[to - 1], ());
        }
        let mut reachable = HashSet::new();
        let mut dfs = Dfs::new(&oracle, nodes[0]);
        while let Some(n) = dfs.next(&oracle) {
            reachable.insert(n.index() + 1);
        }
        prop_assert_eq!(unique, reachable);
    }

    #[test]
    fn prop_dfs_repeatable((size, edges) in adjacency_edges()) {
        let mut graph = adjacency(size, &edges);
        let first = graph.depth_first_order();
        prop_assert_eq!(graph.depth_first_order(), first);
    }
}

// ============================================================================
// QuickCheck
// ============================================================================

#[quickcheck]
fn qc_insert_edge_acceptance(size: u8, u: usize, v: usize, w: i64) -> TestResult {
    let size = (size % 20) as usize;
    let (u, v) = (u % 25, v % 25);

    let mut graph = weighted(size, &[]);
    let expected = (1..=size).contains(&u) && (1..=size).contains(&v) && w >= 0 && !(u == v && w != 0);
    let accepted = graph.insert_edge(u, v, w);

    if accepted != expected {
        return TestResult::failed();
    }
    let stored = graph.cost(u, v);
    TestResult::from_bool(if accepted { stored == Some(w as u64) } else { stored.is_none() })
}

#[quickcheck]
fn qc_remove_edge_acceptance(size: u8, u: usize, v: usize) -> bool {
    let size = (size % 20) as usize;
    let (u, v) = (u % 25, v % 25);

    let mut graph = weighted(size, &[]);
    let expected = (1..=size).contains(&u) && (1..=size).contains(&v) && u != v;
    graph.remove_edge(u, v) == expected
}
