//! Centralized constants for graph construction and reporting

/// Vertex universe configuration
pub mod vertices {
    /// Highest usable 1-based vertex index.
    ///
    /// A hard correctness boundary: building a graph with more vertices
    /// fails with `GraphError::CapacityExceeded`.
    pub const MAX_VERTICES: usize = 99;

    /// Start vertex for depth-first traversal
    pub const TRAVERSAL_ROOT: usize = 1;
}

/// Input stream grammar
pub mod input {
    /// Value of source and destination in the tuple that ends the edge section
    pub const TERMINATOR: i64 = 0;
}

/// Report rendering defaults
pub mod report {
    /// Marker rendered in place of a distance when no path exists
    pub const NO_PATH_MARKER: &str = "----";

    /// Default width of numeric report columns
    pub const COLUMN_WIDTH: usize = 10;

    /// Widest accepted report column
    pub const MAX_COLUMN_WIDTH: usize = 40;
}
