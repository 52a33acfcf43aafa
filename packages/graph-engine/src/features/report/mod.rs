//! Report generation
//!
//! The graphs hand plain row models to a [`ReportSink`]. What a row contains
//! (which distance, which path, or no path at all) is fixed by the graphs;
//! how it looks is up to the sink.
//!
//! - [`TextReporter`]: column layout driven by [`ReportConfig`](crate::config::ReportConfig)
//! - [`JsonReporter`]: one JSON document per call

pub mod json;
mod models;
pub mod text;

pub use json::JsonReporter;
pub use models::{ListingEntry, PathReport, SourceReport, TraversalReport};
pub use text::TextReporter;

use crate::errors::Result;

/// Consumer of computed results
pub trait ReportSink {
    /// All-pairs shortest paths, grouped by source
    fn shortest_paths(&mut self, reports: &[SourceReport]) -> Result<()>;

    /// A single pair
    fn path(&mut self, report: &PathReport) -> Result<()>;

    /// Depth-first visit order
    fn traversal(&mut self, report: &TraversalReport) -> Result<()>;

    /// Adjacency listing
    fn listing(&mut self, entries: &[ListingEntry]) -> Result<()>;
}
