/*
 * Graph Engine - Bounded In-Memory Directed Graphs
 *
 * Feature-First Layout:
 * - shared/      : Vertex handle, labels, constants
 * - config/      : Report configuration (YAML)
 * - features/    : Vertical slices (input → weighted_graph / adjacency_graph → report)
 *
 * Two independent representations over at most 99 vertices (1-based):
 * - WeightedGraph  : dense cost matrix, all-pairs shortest paths, path reconstruction
 * - AdjacencyGraph : head-inserted edge lists, depth-first pre-order
 */

//! # Example
//!
//! ```
//! use graph_engine::{Distance, WeightedGraph};
//!
//! let text = "3\nA\nB\nC\n1 2 1\n2 3 1\n0 0 0\n";
//! let mut graph = WeightedGraph::from_reader(text.as_bytes()).unwrap();
//! graph.compute_all_shortest_paths();
//!
//! assert_eq!(graph.distance(1, 3), Distance::Reachable(2));
//! let path: Vec<usize> = graph.path(1, 3).into_iter().map(|v| v.index()).collect();
//! assert_eq!(path, vec![1, 2, 3]);
//! ```

#![allow(clippy::should_implement_trait)] // from_str naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and constants
pub mod shared;

/// Report configuration
pub mod config;

/// Error types
pub mod errors;

/// Feature slices
pub mod features;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, ReportConfig};
pub use errors::{GraphError, Result};
pub use features::adjacency_graph::AdjacencyGraph;
pub use features::input::InputStream;
pub use features::report::{
    JsonReporter, ListingEntry, PathReport, ReportSink, SourceReport, TextReporter,
    TraversalReport,
};
pub use features::weighted_graph::{Cost, Distance, WeightedGraph};
pub use shared::constants::vertices::MAX_VERTICES;
pub use shared::models::{Label, VertexId};
