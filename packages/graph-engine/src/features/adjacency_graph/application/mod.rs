//! Adjacency graph application layer (primary interface)

mod adjacency_graph;

pub use adjacency_graph::AdjacencyGraph;
