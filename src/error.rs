//! Error types for graph construction and cycle search.
//!
//! "No Hamiltonian cycle exists" is not an error: the solvers report it as
//! `Ok(None)`. Everything here is either a broken input contract or a branch
//! that died while the search was running.

use core::fmt;

/// The error type for graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not a vertex of the graph.
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} out of range for a graph with {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// The error type for both search strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start vertex is outside `[0, vertex_count)`.
    InvalidStartVertex {
        /// Requested start vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The thread budget was zero.
    InvalidThreadBudget {
        /// Requested budget.
        budget: usize,
    },
    /// A spawned branch thread panicked before it could report.
    BranchPanicked {
        /// Vertex the branch was exploring from.
        vertex: usize,
        /// Panic payload, when it was a string.
        message: String,
    },
    /// A dedicated worker pool could not be created.
    PoolBuild {
        /// Reason reported by the pool builder.
        reason: String,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStartVertex {
                vertex,
                vertex_count,
            } => write!(
                f,
                "start vertex {vertex} out of range for a graph with {vertex_count} vertices"
            ),
            Self::InvalidThreadBudget { budget } => {
                write!(f, "thread budget must be at least 1, got {budget}")
            }
            Self::BranchPanicked { vertex, message } => {
                write!(f, "search branch at vertex {vertex} panicked: {message}")
            }
            Self::PoolBuild { reason } => write!(f, "failed to build worker pool: {reason}"),
        }
    }
}

impl std::error::Error for SearchError {}
