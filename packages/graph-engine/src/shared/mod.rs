//! Shared module - Common types used by both graph representations
//!
//! This module has no dependency on the feature slices.

pub mod constants;
pub mod models;

// Re-exports for convenience
pub use models::*;
