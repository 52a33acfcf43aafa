//! Weighted graph application layer (primary interface)

mod weighted_graph;

pub use weighted_graph::WeightedGraph;
