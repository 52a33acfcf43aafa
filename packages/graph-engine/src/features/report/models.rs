//! Report row models
//!
//! Plain data handed from the graphs to a [`ReportSink`](super::ReportSink).

use serde::Serialize;

use crate::features::weighted_graph::Distance;
use crate::shared::models::{Label, VertexId};

/// Distance and route for one ordered pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// Raw indices as requested; may be out of range
    pub source: usize,
    pub destination: usize,
    pub distance: Distance,
    /// Empty when `distance` is `NoPath`
    pub path: Vec<VertexId>,
    pub labels: Vec<Label>,
}

impl PathReport {
    pub(crate) fn no_path(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination,
            distance: Distance::NoPath,
            path: Vec::new(),
            labels: Vec::new(),
        }
    }
}

/// All rows sharing one source, in destination order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub source: VertexId,
    pub label: Label,
    pub rows: Vec<PathReport>,
}

/// Depth-first visit order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    pub order: Vec<VertexId>,
    pub labels: Vec<Label>,
}

/// One vertex of an adjacency listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub vertex: VertexId,
    pub label: Label,
    /// Outgoing edges in list (traversal) order
    pub edges: Vec<VertexId>,
}
