//! Weighted graph infrastructure

pub mod shortest_path;

pub use shortest_path::ShortestPathEngine;
