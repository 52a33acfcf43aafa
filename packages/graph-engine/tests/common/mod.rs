//! Common test utilities for graph-engine
//!
//! Shared input fixtures and graph builders for the integration tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
