//! WeightedGraph - Dense Directed Graph with All-Pairs Shortest Paths
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  WeightedGraph Feature                  │
//! ├─────────────────────────────────────────────────────────┤
//! │  Domain:                                                │
//! │    - CostMatrix (directed weights, Option = no edge)    │
//! │    - PathTable (visited / distance / predecessor)       │
//! │    - Distance (Reachable(cost) | NoPath)                │
//! ├─────────────────────────────────────────────────────────┤
//! │  Infrastructure:                                        │
//! │    - ShortestPathEngine (direct-cost selection)         │
//! ├─────────────────────────────────────────────────────────┤
//! │  Application:                                           │
//! │    - WeightedGraph (build, mutate, recompute, query)    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! `build` → **Built** → `compute_all_shortest_paths` → **PathsComputed**.
//! Edge mutation is legal in both states but leaves the previous table in
//! place; call `compute_all_shortest_paths` again before trusting distances.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::WeightedGraph;
pub use domain::{Cost, CostMatrix, Distance, PathEntry, PathTable};
pub use infrastructure::ShortestPathEngine;
