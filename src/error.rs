//! Error types for the vertex cover solver.

use thiserror::Error;

/// Errors reported before a run starts.
///
/// A run either completes or fails fast with one of these; there is no
/// partial-result recovery.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoverError {
    /// A configuration parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The supplied edge set does not describe a simple undirected graph.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// A candidate does not have one gene per vertex.
    #[error("gene count mismatch: expected {expected}, got {actual}")]
    GraphMismatch { expected: usize, actual: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CoverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CoverError::InvalidConfiguration("vertex_count must be at least 2".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: vertex_count must be at least 2"
        );

        let err = CoverError::GraphMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "gene count mismatch: expected 4, got 3");
    }
}
