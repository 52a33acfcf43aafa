use std::io::BufRead;

use tracing::{debug, info, warn};

use crate::errors::{GraphError, Result};
use crate::features::input::InputStream;
use crate::features::report::{PathReport, SourceReport};
use crate::features::weighted_graph::domain::{Cost, CostMatrix, Distance, PathTable};
use crate::features::weighted_graph::infrastructure::ShortestPathEngine;
use crate::shared::constants::input::TERMINATOR;
use crate::shared::constants::vertices::MAX_VERTICES;
use crate::shared::models::{Label, VertexId};

/// Directed weighted graph over a fixed vertex universe.
///
/// Owns the cost matrix and, once computed, the all-pairs [`PathTable`].
///
/// # Staleness
///
/// [`insert_edge`](Self::insert_edge) and [`remove_edge`](Self::remove_edge)
/// do not touch the computed table. Distances and paths keep describing the
/// graph as it was at the last [`compute_all_shortest_paths`](Self::compute_all_shortest_paths)
/// until the caller recomputes.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    labels: Vec<Label>,
    costs: CostMatrix,
    paths: Option<PathTable>,
}

impl WeightedGraph {
    /// Edgeless graph with one vertex per label
    pub fn new(labels: Vec<Label>) -> Result<Self> {
        if labels.len() > MAX_VERTICES {
            return Err(GraphError::CapacityExceeded {
                requested: labels.len(),
                max: MAX_VERTICES,
            });
        }
        Ok(Self {
            costs: CostMatrix::new(labels.len()),
            labels,
            paths: None,
        })
    }

    /// Build the next graph from `input`.
    ///
    /// Reads the vertex count, the labels, then `source destination weight`
    /// triples until a `0 0` terminator (the rest of its line is skipped).
    /// Input ending early or a malformed token ends the edge section quietly.
    pub fn build<R: BufRead>(input: &mut InputStream<R>) -> Result<Self> {
        let labels = input.read_header(MAX_VERTICES)?;
        let mut graph = Self::new(labels.into_iter().map(Label::from).collect())?;
        let size = graph.size();

        loop {
            let Some(source) = input.next_value::<i64>()? else { break };
            let Some(destination) = input.next_value::<i64>()? else { break };
            if source == TERMINATOR && destination == TERMINATOR {
                input.skip_line();
                break;
            }
            let Some(weight) = input.next_value::<Cost>()? else { break };

            let from = graph.checked_vertex(source)?;
            let to = graph.checked_vertex(destination)?;
            graph.costs.set(from, to, weight);
        }

        debug!(
            "Built weighted graph: {} vertices, {} edges",
            size,
            graph.costs.edge_count()
        );
        Ok(graph)
    }

    /// Build a single graph from a reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::build(&mut InputStream::new(reader))
    }

    /// Build every graph in the stream, in order
    pub fn read_all<R: BufRead>(reader: R) -> Result<Vec<Self>> {
        let mut input = InputStream::new(reader);
        let mut graphs = Vec::new();
        while input.has_more()? {
            if !graphs.is_empty() && !input.count_follows()? {
                debug!(
                    "Ignoring trailing input from line {} after {} graphs",
                    input.line_no(),
                    graphs.len()
                );
                break;
            }
            graphs.push(Self::build(&mut input)?);
        }
        Ok(graphs)
    }

    fn checked_vertex(&self, raw: i64) -> Result<VertexId> {
        usize::try_from(raw)
            .ok()
            .and_then(|r| self.vertex(r))
            .ok_or_else(|| GraphError::out_of_range(raw, self.size()))
    }

    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Validated handle for a 1-based index
    pub fn vertex(&self, raw: usize) -> Option<VertexId> {
        VertexId::new(raw, self.size())
    }

    /// Label of `vertex`, `None` for a handle beyond this graph's size
    pub fn label(&self, vertex: VertexId) -> Option<&Label> {
        self.labels.get(vertex.slot())
    }

    /// Label of a handle this graph produced itself
    fn label_of(&self, vertex: VertexId) -> &Label {
        &self.labels[vertex.slot()]
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Direct edge weight, `None` for no edge or out-of-range indices
    pub fn cost(&self, source: usize, destination: usize) -> Option<Cost> {
        let (from, to) = self.pair(source, destination)?;
        self.costs.get(from, to)
    }

    pub fn cost_matrix(&self) -> &CostMatrix {
        &self.costs
    }

    fn pair(&self, source: usize, destination: usize) -> Option<(VertexId, VertexId)> {
        Some((self.vertex(source)?, self.vertex(destination)?))
    }

    /// Insert or overwrite `source -> destination`.
    ///
    /// Fails without mutation when either index is out of range, the weight
    /// is negative, or the edge is a self-loop with a nonzero weight.
    /// The computed table is left stale on success.
    pub fn insert_edge(&mut self, source: usize, destination: usize, weight: i64) -> bool {
        let Some((from, to)) = self.pair(source, destination) else {
            return false;
        };
        let Ok(cost) = Cost::try_from(weight) else {
            return false;
        };
        if from == to && cost != 0 {
            return false;
        }
        self.costs.set(from, to, cost);
        true
    }

    /// Remove `source -> destination`.
    ///
    /// Fails without mutation when either index is out of range or the two
    /// are equal. The computed table is left stale on success.
    pub fn remove_edge(&mut self, source: usize, destination: usize) -> bool {
        match self.pair(source, destination) {
            Some((from, to)) if from != to => {
                self.costs.clear(from, to);
                true
            }
            _ => false,
        }
    }

    /// Recompute the whole path table from the current cost matrix.
    ///
    /// The new table replaces the old one in a single assignment.
    pub fn compute_all_shortest_paths(&mut self) {
        let table = ShortestPathEngine::compute(&self.costs);
        self.paths = Some(table);
        info!("Shortest paths computed for {} vertices", self.size());
    }

    pub fn is_computed(&self) -> bool {
        self.paths.is_some()
    }

    pub fn path_table(&self) -> Option<&PathTable> {
        self.paths.as_ref()
    }

    fn table(&self) -> Option<&PathTable> {
        if self.paths.is_none() {
            warn!("Shortest-path query before compute_all_shortest_paths");
        }
        self.paths.as_ref()
    }

    /// Distance from the last computation.
    ///
    /// `distance(s, s)` is always 0 for a valid `s`. Out-of-range indices and
    /// queries before any computation report `NoPath`.
    pub fn distance(&self, source: usize, destination: usize) -> Distance {
        let Some((from, to)) = self.pair(source, destination) else {
            return Distance::NoPath;
        };
        if from == to {
            return Distance::Reachable(0);
        }
        self.table()
            .map_or(Distance::NoPath, |table| table.distance(from, to))
    }

    /// Route from `source` to `destination`, both ends included.
    ///
    /// Empty when either index is out of range or no path exists.
    pub fn path(&self, source: usize, destination: usize) -> Vec<VertexId> {
        let Some((from, to)) = self.pair(source, destination) else {
            return Vec::new();
        };
        if from == to {
            return vec![from];
        }
        self.table()
            .map_or_else(Vec::new, |table| table.path(from, to))
    }

    /// Labels of the vertices on [`path`](Self::path)
    pub fn labels_on_path(&self, source: usize, destination: usize) -> Vec<&Label> {
        self.path(source, destination)
            .into_iter()
            .map(|v| self.label_of(v))
            .collect()
    }

    /// Report for one pair
    pub fn report(&self, source: usize, destination: usize) -> PathReport {
        let distance = self.distance(source, destination);
        if !distance.is_reachable() {
            return PathReport::no_path(source, destination);
        }
        let path = self.path(source, destination);
        let labels = path.iter().map(|&v| self.label_of(v).clone()).collect();
        PathReport {
            source,
            destination,
            distance,
            path,
            labels,
        }
    }

    /// Reports for every ordered pair, grouped by source
    pub fn report_all(&self, include_self_pairs: bool) -> Vec<SourceReport> {
        VertexId::all(self.size())
            .map(|source| SourceReport {
                source,
                label: self.label_of(source).clone(),
                rows: VertexId::all(self.size())
                    .filter(|&destination| include_self_pairs || destination != source)
                    .map(|destination| self.report(source.index(), destination.index()))
                    .collect(),
            })
            .collect()
    }
}
