//! All-pairs shortest paths with direct-cost selection
//!
//! Every source is solved independently over the cost matrix. The loop is
//! Dijkstra-shaped, with one deliberate difference in how the next vertex is
//! picked:
//!
//! ```text
//! init:    dist[i] = C[s][i], pred[i] = s   (where the edge exists)
//!          visited[s] = true, dist[s] = 0, pred[s] = s
//! select:  unvisited v with the smallest DIRECT cost C[s][v]
//!          (ties -> lowest index; none left -> stop)
//! relax:   for unvisited w with an edge v -> w:
//!              dist[w] = min(dist[w], dist[v] + C[v][w]), pred[w] = v on improvement
//! ```
//!
//! Selection looks at `C[s][v]`, not at the tentative `dist[v]`. Only vertices
//! with a direct edge from the source are ever expanded, so distances can be
//! larger than the true optimum, and a vertex two hops past an indirectly
//! reached vertex is never reached at all. Reported outputs depend on this
//! rule.

use tracing::debug;

use crate::features::weighted_graph::domain::{CostMatrix, Distance, PathEntry, PathTable};
use crate::shared::models::VertexId;

/// Stateless solver over a [`CostMatrix`]
pub struct ShortestPathEngine;

impl ShortestPathEngine {
    /// Solve every source and return a fresh table
    pub fn compute(matrix: &CostMatrix) -> PathTable {
        let size = matrix.size();
        let rows = VertexId::all(size)
            .map(|source| Self::compute_from(matrix, source))
            .collect();
        PathTable::from_rows(rows)
    }

    /// Solve a single source, returning its row indexed by destination slot
    pub fn compute_from(matrix: &CostMatrix, source: VertexId) -> Vec<PathEntry> {
        let mut row = vec![PathEntry::default(); matrix.size()];

        for (to, cost) in matrix.outgoing(source) {
            row[to.slot()] = PathEntry {
                visited: false,
                distance: Distance::Reachable(cost),
                predecessor: Some(source),
            };
        }

        let origin = &mut row[source.slot()];
        origin.visited = true;
        origin.distance = Distance::Reachable(0);
        origin.predecessor = Some(source);

        let mut expanded = 0usize;
        while let Some(v) = Self::select_next(matrix, source, &row) {
            row[v.slot()].visited = true;
            expanded += 1;

            let Distance::Reachable(base) = row[v.slot()].distance else {
                continue;
            };

            for (w, cost) in matrix.outgoing(v) {
                let entry = &mut row[w.slot()];
                if entry.visited {
                    continue;
                }
                let candidate = base.saturating_add(cost);
                let improves = match entry.distance {
                    Distance::Reachable(current) => candidate < current,
                    Distance::NoPath => true,
                };
                if improves {
                    entry.distance = Distance::Reachable(candidate);
                    entry.predecessor = Some(v);
                }
            }
        }

        debug!(
            "Source {}: expanded {} vertices, {} reachable",
            source,
            expanded,
            row.iter().filter(|e| e.distance.is_reachable()).count()
        );
        row
    }

    /// Unvisited vertex with the smallest direct cost from `source`
    fn select_next(matrix: &CostMatrix, source: VertexId, row: &[PathEntry]) -> Option<VertexId> {
        let mut best: Option<(VertexId, u64)> = None;
        for (to, cost) in matrix.outgoing(source) {
            if row[to.slot()].visited {
                continue;
            }
            match best {
                Some((_, min)) if cost >= min => {}
                _ => best = Some((to, cost)),
            }
        }
        best.map(|(v, _)| v)
    }
}
