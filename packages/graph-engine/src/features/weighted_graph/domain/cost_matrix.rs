//! Dense directed cost matrix

use crate::shared::models::VertexId;

/// Edge weight
pub type Cost = u64;

/// `size × size` matrix of directed edge weights.
///
/// `None` means "no edge". Self-cells start out as `None` like every other
/// cell; a self-loop only exists once explicitly inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    size: usize,
    cells: Vec<Option<Cost>>,
}

impl CostMatrix {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn offset(&self, from: VertexId, to: VertexId) -> usize {
        from.slot() * self.size + to.slot()
    }

    /// Weight of `from -> to`
    pub fn get(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        self.cells[self.offset(from, to)]
    }

    /// Set (or overwrite) the weight of `from -> to`
    pub fn set(&mut self, from: VertexId, to: VertexId, cost: Cost) {
        let offset = self.offset(from, to);
        self.cells[offset] = Some(cost);
    }

    /// Reset `from -> to` to "no edge"
    pub fn clear(&mut self, from: VertexId, to: VertexId) {
        let offset = self.offset(from, to);
        self.cells[offset] = None;
    }

    /// Outgoing edges of `from` in destination index order
    pub fn outgoing(&self, from: VertexId) -> impl Iterator<Item = (VertexId, Cost)> + '_ {
        let row = &self.cells[from.slot() * self.size..(from.slot() + 1) * self.size];
        VertexId::all(self.size)
            .zip(row.iter())
            .filter_map(|(to, cost)| cost.map(|c| (to, c)))
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
