use std::collections::VecDeque;

use crate::shared::models::{Label, VertexId};

/// Vertex of an [`AdjacencyGraph`](crate::features::adjacency_graph::AdjacencyGraph)
///
/// Outgoing edges are kept most-recent-first: every new edge goes to the
/// head of the list, and traversal walks the list front to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyVertex {
    pub label: Label,
    /// Scratch state owned by traversals
    pub visited: bool,
    edges: VecDeque<VertexId>,
}

impl AdjacencyVertex {
    pub fn new(label: Label) -> Self {
        Self {
            label,
            visited: false,
            edges: VecDeque::new(),
        }
    }

    /// Add an edge at the head of the list
    pub fn push_edge(&mut self, to: VertexId) {
        self.edges.push_front(to);
    }

    /// Outgoing edges in list order
    pub fn edges(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.iter().copied()
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}
