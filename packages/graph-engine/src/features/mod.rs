//! Feature slices
//!
//! - `input`: token/line stream shared by both builders
//! - `weighted_graph`: cost matrix + all-pairs shortest paths
//! - `adjacency_graph`: edge lists + depth-first ordering
//! - `report`: row models and sinks

pub mod adjacency_graph;
pub mod input;
pub mod report;
pub mod weighted_graph;
