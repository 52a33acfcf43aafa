use std::io::BufRead;

use tracing::debug;

use crate::errors::{GraphError, Result};
use crate::features::adjacency_graph::domain::AdjacencyVertex;
use crate::features::adjacency_graph::infrastructure::DepthFirstTraversal;
use crate::features::input::InputStream;
use crate::features::report::{ListingEntry, TraversalReport};
use crate::shared::constants::input::TERMINATOR;
use crate::shared::constants::vertices::{MAX_VERTICES, TRAVERSAL_ROOT};
use crate::shared::models::{Label, VertexId};

/// Directed graph stored as per-vertex edge lists
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    vertices: Vec<AdjacencyVertex>,
}

impl AdjacencyGraph {
    /// Build the next graph from `input`.
    ///
    /// Reads the vertex count, the labels, then `source destination` pairs
    /// until a `0 0` terminator. Each edge goes to the head of its source's
    /// list. Input ending early or a malformed token ends the edge section
    /// quietly.
    pub fn build<R: BufRead>(input: &mut InputStream<R>) -> Result<Self> {
        let labels = input.read_header(MAX_VERTICES)?;
        let size = labels.len();
        let mut vertices: Vec<AdjacencyVertex> = labels
            .into_iter()
            .map(|l| AdjacencyVertex::new(Label::from(l)))
            .collect();

        let mut edges = 0usize;
        loop {
            let Some(source) = input.next_value::<i64>()? else { break };
            let Some(destination) = input.next_value::<i64>()? else { break };
            if source == TERMINATOR && destination == TERMINATOR {
                input.skip_line();
                break;
            }

            let from = checked_vertex(source, size)?;
            let to = checked_vertex(destination, size)?;
            vertices[from.slot()].push_edge(to);
            edges += 1;
        }

        debug!("Built adjacency graph: {} vertices, {} edges", size, edges);
        Ok(Self { vertices })
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

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex(&self, raw: usize) -> Option<VertexId> {
        VertexId::new(raw, self.size())
    }

    /// Label of `vertex`, `None` for a handle beyond this graph's size
    pub fn label(&self, vertex: VertexId) -> Option<&Label> {
        self.node(vertex).map(|v| &v.label)
    }

    /// Outgoing edges of `vertex` in traversal order
    pub fn edges(&self, vertex: VertexId) -> Option<impl Iterator<Item = VertexId> + '_> {
        self.node(vertex).map(AdjacencyVertex::edges)
    }

    pub fn is_visited(&self, vertex: VertexId) -> Option<bool> {
        self.node(vertex).map(|v| v.visited)
    }

    fn node(&self, vertex: VertexId) -> Option<&AdjacencyVertex> {
        self.vertices.get(vertex.slot())
    }

    pub fn reset_visited(&mut self) {
        DepthFirstTraversal::reset(&mut self.vertices);
    }

    /// Depth-first pre-order from vertex 1.
    ///
    /// Visited flags are reset first, so every call is an independent
    /// traversal. Vertices unreachable from vertex 1 are left out; an empty
    /// graph yields an empty order.
    pub fn depth_first_order(&mut self) -> Vec<VertexId> {
        self.reset_visited();
        let Some(root) = self.vertex(TRAVERSAL_ROOT) else {
            return Vec::new();
        };
        let order = DepthFirstTraversal::run(&mut self.vertices, root);
        debug!("Depth-first order visited {} of {} vertices", order.len(), self.size());
        order
    }

    /// Depth-first order with labels resolved
    pub fn traversal_report(&mut self) -> TraversalReport {
        let order = self.depth_first_order();
        let labels = order
            .iter()
            .map(|&v| self.vertices[v.slot()].label.clone())
            .collect();
        TraversalReport { order, labels }
    }

    /// Every vertex with its label and edge list
    pub fn listing(&self) -> Vec<ListingEntry> {
        VertexId::all(self.size())
            .zip(&self.vertices)
            .map(|(vertex, node)| ListingEntry {
                vertex,
                label: node.label.clone(),
                edges: node.edges().collect(),
            })
            .collect()
    }
}

fn checked_vertex(raw: i64, size: usize) -> Result<VertexId> {
    usize::try_from(raw)
        .ok()
        .and_then(|r| VertexId::new(r, size))
        .ok_or_else(|| GraphError::out_of_range(raw, size))
}
