//! Error types for graph operations
//!
//! The whole API surface fails in exactly two ways: a caller supplied a
//! vertex index outside the graph, or a path query ran a full traversal
//! without reaching its end vertex.

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A supplied vertex index is outside `0..vertex_count`.
    ///
    /// Raised eagerly, before any mutation or traversal work begins;
    /// indices consulted mid-traversal come from validated adjacency
    /// data and cannot trigger this.
    #[error("vertex not found: {vertex} (graph has {vertex_count} vertices)")]
    VertexNotFound { vertex: usize, vertex_count: usize },

    /// A path query completed a full traversal without reaching `to`.
    ///
    /// Signals that the graph is disconnected between the two
    /// endpoints. Never produced when `from == to`.
    #[error("path not found: no route from {from} to {to}")]
    PathNotFound { from: usize, to: usize },
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
