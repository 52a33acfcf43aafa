//! Adjacency graph infrastructure

pub mod dfs;

pub use dfs::DepthFirstTraversal;
