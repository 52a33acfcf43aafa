//! Per-source shortest-path table

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cost_matrix::Cost;
use crate::shared::models::VertexId;

/// Distance from a source to a destination.
///
/// `NoPath` is a normal terminal value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Reachable(Cost),
    NoPath,
}

impl Distance {
    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Reachable(_))
    }

    pub fn cost(self) -> Option<Cost> {
        match self {
            Distance::Reachable(c) => Some(c),
            Distance::NoPath => None,
        }
    }

    /// Render with `marker` standing in for `NoPath`
    pub fn render(self, marker: &str) -> String {
        match self {
            Distance::Reachable(c) => c.to_string(),
            Distance::NoPath => marker.to_string(),
        }
    }
}

impl From<Option<Cost>> for Distance {
    fn from(cost: Option<Cost>) -> Self {
        cost.map_or(Distance::NoPath, Distance::Reachable)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reachable(c) => write!(f, "{}", c),
            Distance::NoPath => f.write_str("no path"),
        }
    }
}

/// One cell of the table: state of `destination` as seen from a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEntry {
    pub visited: bool,
    pub distance: Distance,
    pub predecessor: Option<VertexId>,
}

impl Default for PathEntry {
    fn default() -> Self {
        Self {
            visited: false,
            distance: Distance::NoPath,
            predecessor: None,
        }
    }
}

/// Full `size × size` table, row per source.
///
/// Only ever produced whole by a recompute; there is no way to patch a row
/// from outside this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTable {
    size: usize,
    rows: Vec<Vec<PathEntry>>,
}

impl PathTable {
    pub(crate) fn from_rows(rows: Vec<Vec<PathEntry>>) -> Self {
        Self {
            size: rows.len(),
            rows,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell for the pair, `None` when either handle is beyond this table
    pub fn entry(&self, source: VertexId, destination: VertexId) -> Option<&PathEntry> {
        self.rows.get(source.slot())?.get(destination.slot())
    }

    pub fn distance(&self, source: VertexId, destination: VertexId) -> Distance {
        match self.entry(source, destination) {
            None => Distance::NoPath,
            Some(_) if source == destination => Distance::Reachable(0),
            Some(entry) => entry.distance,
        }
    }

    /// Vertices from `source` to `destination` by walking predecessors back.
    ///
    /// Empty when `destination` is unreachable or either handle is beyond
    /// this table.
    pub fn path(&self, source: VertexId, destination: VertexId) -> Vec<VertexId> {
        if self.entry(source, destination).is_none() {
            return Vec::new();
        }
        if source == destination {
            return vec![source];
        }
        if !self.distance(source, destination).is_reachable() {
            return Vec::new();
        }

        let mut path = vec![destination];
        let mut current = destination;
        // A predecessor chain never revisits a vertex, so `size` steps suffice.
        for _ in 0..self.size {
            match self.entry(source, current).and_then(|e| e.predecessor) {
                Some(prev) if prev == source => {
                    path.push(source);
                    path.reverse();
                    return path;
                }
                Some(prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: usize) -> VertexId {
        VertexId::new(raw, 3).unwrap()
    }

    fn table_with_chain() -> PathTable {
        // source 1: 1 -> 2 (1), 2 -> 3 (1)
        let mut rows = vec![vec![PathEntry::default(); 3]; 3];
        rows[0][1] = PathEntry {
            visited: true,
            distance: Distance::Reachable(1),
            predecessor: Some(v(1)),
        };
        rows[0][2] = PathEntry {
            visited: false,
            distance: Distance::Reachable(2),
            predecessor: Some(v(2)),
        };
        PathTable::from_rows(rows)
    }

    #[test]
    fn test_distance_render() {
        assert_eq!(Distance::Reachable(12).render("----"), "12");
        assert_eq!(Distance::NoPath.render("----"), "----");
        assert_eq!(Distance::from(None), Distance::NoPath);
        assert_eq!(Distance::from(Some(4)).cost(), Some(4));
    }

    #[test]
    fn test_path_walks_predecessors() {
        let table = table_with_chain();
        let path: Vec<usize> = table.path(v(1), v(3)).into_iter().map(VertexId::index).collect();
        assert_eq!(path, vec![1, 2, 3]);
        assert_eq!(table.distance(v(1), v(3)), Distance::Reachable(2));
    }

    #[test]
    fn test_self_path_is_singleton() {
        let table = table_with_chain();
        for s in VertexId::all(3) {
            assert_eq!(table.path(s, s), vec![s]);
            assert_eq!(table.distance(s, s), Distance::Reachable(0));
        }
    }

    #[test]
    fn test_foreign_handles() {
        let table = table_with_chain();
        let outside = VertexId::new(4, 10).unwrap();
        assert!(table.entry(v(1), outside).is_none());
        assert!(table.entry(outside, v(1)).is_none());
        assert_eq!(table.distance(outside, outside), Distance::NoPath);
        assert!(table.path(outside, outside).is_empty());
        assert!(table.path(v(1), outside).is_empty());
    }

    #[test]
    fn test_unreachable_has_empty_path() {
        let table = table_with_chain();
        assert_eq!(table.distance(v(3), v(1)), Distance::NoPath);
        assert!(table.path(v(3), v(1)).is_empty());
    }
}
