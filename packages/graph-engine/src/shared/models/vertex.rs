//! Vertex handle and label models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated 1-based vertex handle.
///
/// A `VertexId` can only be obtained through [`VertexId::new`], which checks
/// the raw index against the live vertex count of a graph. Index 0 is reserved
/// and never valid. Handles serialize as their index but are never
/// deserialized; read a raw index and validate it through a graph instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    /// Validate `raw` against `[1, size]`
    pub fn new(raw: usize, size: usize) -> Option<Self> {
        if raw >= 1 && raw <= size {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// 1-based index as presented to callers
    pub fn index(self) -> usize {
        self.0
    }

    /// 0-based storage slot
    pub(crate) fn slot(self) -> usize {
        self.0 - 1
    }

    /// Every handle of a graph with `size` vertices, in index order
    pub fn all(size: usize) -> impl Iterator<Item = VertexId> {
        (1..=size).map(VertexId)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Opaque vertex label.
///
/// Labels are compared and displayed but never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
