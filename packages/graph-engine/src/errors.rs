//! Error types for graph-engine
//!
//! Only graph construction and configuration loading can fail with an error.
//! Edge mutators report failure as `false`, and path queries report an empty
//! path / `Distance::NoPath`.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for graph-engine operations
#[derive(Debug, Error)]
pub enum GraphError {
    /// IO error while reading the input stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream did not match the expected grammar
    #[error("Parse error: {0}")]
    Parse(String),

    /// Vertex count above the fixed ceiling
    #[error("Capacity exceeded: {requested} vertices requested, at most {max} supported")]
    CapacityExceeded { requested: usize, max: usize },

    /// Vertex index outside `[1, size]`
    #[error("Vertex {vertex} out of range 1..={size}")]
    OutOfRange { vertex: i64, size: usize },

    /// Report configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GraphError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        GraphError::Parse(msg.into())
    }

    pub fn out_of_range(vertex: i64, size: usize) -> Self {
        GraphError::OutOfRange { vertex, size }
    }
}

/// Result type alias for graph-engine operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_display() {
        let err = GraphError::CapacityExceeded {
            requested: 120,
            max: 99,
        };
        let msg = err.to_string();
        assert!(msg.contains("120"));
        assert!(msg.contains("99"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = GraphError::out_of_range(0, 3);
        assert_eq!(err.to_string(), "Vertex 0 out of range 1..=3");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: GraphError = io_err.into();
        assert!(matches!(err, GraphError::Io(_)));
    }

    #[test]
    fn test_result_propagation() {
        fn inner() -> Result<()> {
            Err(GraphError::parse("missing vertex count"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        let err = outer().unwrap_err();
        assert!(matches!(err, GraphError::Parse(ref m) if m == "missing vertex count"));
    }
}
