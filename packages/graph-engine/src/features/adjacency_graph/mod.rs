//! AdjacencyGraph - Sparse Directed Graph with Depth-First Ordering
//!
//! Built once from a stream and immutable afterwards, apart from the
//! per-vertex `visited` scratch flag that traversals reset and set.
//!
//! ```text
//! vertex 1 ──► [4, 3, 2]      edges (1,2) (1,3) (1,4) inserted in that order
//! vertex 2 ──► []
//! ...
//! depth_first_order() = [1, 4, 3, 2]
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::AdjacencyGraph;
pub use domain::AdjacencyVertex;
pub use infrastructure::DepthFirstTraversal;
