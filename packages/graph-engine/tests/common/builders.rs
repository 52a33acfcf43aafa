//! Graph builders

use graph_engine::{AdjacencyGraph, Label, VertexId, WeightedGraph};

/// Weighted graph with labels `v1..vN` and the given edges
pub fn weighted(size: usize, edges: &[(usize, usize, i64)]) -> WeightedGraph {
    let labels = (1..=size).map(|i| Label::from(format!("v{}", i))).collect();
    let mut graph = WeightedGraph::new(labels).expect("size within capacity");
    for &(from, to, weight) in edges {
        assert!(graph.insert_edge(from, to, weight), "rejected edge {}->{}", from, to);
    }
    graph
}

/// Adjacency graph with labels `v1..vN`, edges inserted in the given order
pub fn adjacency(size: usize, edges: &[(usize, usize)]) -> AdjacencyGraph {
    let mut text = format!("{}\n", size);
    for i in 1..=size {
        text.push_str(&format!("v{}\n", i));
    }
    for &(from, to) in edges {
        text.push_str(&format!("{} {}\n", from, to));
    }
    text.push_str("0 0\n");
    AdjacencyGraph::from_reader(text.as_bytes()).expect("valid adjacency fixture")
}

/// 1-based indices of a vertex sequence
pub fn indices(vertices: &[VertexId]) -> Vec<usize> {
    vertices.iter().map(|v| v.index()).collect()
}
