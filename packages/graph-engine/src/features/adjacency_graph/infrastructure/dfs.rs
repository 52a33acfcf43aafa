//! Depth-first pre-order traversal

use crate::features::adjacency_graph::domain::AdjacencyVertex;
use crate::shared::models::VertexId;

/// Recursive pre-order walk over [`AdjacencyVertex`] slices.
///
/// Recursion depth is bounded by the vertex ceiling.
pub struct DepthFirstTraversal;

impl DepthFirstTraversal {
    /// Clear every `visited` flag
    pub fn reset(vertices: &mut [AdjacencyVertex]) {
        for vertex in vertices.iter_mut() {
            vertex.visited = false;
        }
    }

    /// Visit order starting at `root`.
    ///
    /// Vertices already marked visited are skipped, so callers wanting an
    /// independent traversal reset first. Handles outside `vertices` are
    /// never followed.
    pub fn run(vertices: &mut [AdjacencyVertex], root: VertexId) -> Vec<VertexId> {
        let mut order = Vec::with_capacity(vertices.len());
        if Self::unvisited(vertices, root) {
            Self::visit(vertices, root, &mut order);
        }
        order
    }

    fn unvisited(vertices: &[AdjacencyVertex], vertex: VertexId) -> bool {
        vertices.get(vertex.slot()).map_or(false, |v| !v.visited)
    }

    fn visit(vertices: &mut [AdjacencyVertex], current: VertexId, order: &mut Vec<VertexId>) {
        vertices[current.slot()].visited = true;
        order.push(current);

        let neighbors: Vec<VertexId> = vertices[current.slot()].edges().collect();
        for next in neighbors {
            if Self::unvisited(vertices, next) {
                Self::visit(vertices, next, order);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::Label;

    fn vertices(size: usize, edges: &[(usize, usize)]) -> Vec<AdjacencyVertex> {
        let mut vs: Vec<_> = (1..=size)
            .map(|i| AdjacencyVertex::new(Label::from(format!("v{}", i))))
            .collect();
        for &(from, to) in edges {
            vs[from - 1].push_edge(VertexId::new(to, size).unwrap());
        }
        vs
    }

    fn order(vs: &mut [AdjacencyVertex]) -> Vec<usize> {
        let root = VertexId::new(1, vs.len()).unwrap();
        DepthFirstTraversal::run(vs, root)
            .into_iter()
            .map(VertexId::index)
            .collect()
    }

    #[test]
    fn test_most_recent_edge_first() {
        let mut vs = vertices(4, &[(1, 2), (1, 3), (1, 4)]);
        assert_eq!(order(&mut vs), vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_descends_before_siblings() {
        // 1 -> [3, 2], 3 -> [4]
        let mut vs = vertices(4, &[(1, 2), (1, 3), (3, 4)]);
        assert_eq!(order(&mut vs), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_cycles_and_self_loops() {
        let mut vs = vertices(3, &[(1, 1), (1, 2), (2, 1), (2, 3), (3, 2)]);
        assert_eq!(order(&mut vs), vec![1, 2, 3]);
    }

    #[test]
    fn test_unreachable_absent() {
        let mut vs = vertices(4, &[(2, 1), (1, 3)]);
        assert_eq!(order(&mut vs), vec![1, 3]);
        assert!(!vs[1].visited);
        assert!(!vs[3].visited);
    }

    #[test]
    fn test_root_outside_slice() {
        let mut vs = vertices(2, &[(1, 2)]);
        let root = VertexId::new(3, 3).unwrap();
        assert!(DepthFirstTraversal::run(&mut vs, root).is_empty());
    }

    #[test]
    fn test_edge_outside_slice_not_followed() {
        let mut vs = vertices(2, &[(1, 2)]);
        vs[1].push_edge(VertexId::new(9, 9).unwrap());
        assert_eq!(order(&mut vs), vec![1, 2]);
    }

    #[test]
    fn test_already_visited_root() {
        let mut vs = vertices(2, &[(1, 2)]);
        let _ = order(&mut vs);
        assert!(order(&mut vs).is_empty());
        DepthFirstTraversal::reset(&mut vs);
        assert_eq!(order(&mut vs), vec![1, 2]);
    }
}
