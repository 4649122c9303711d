use dimnames_core::NameError;
use thiserror::Error;

/// Error type for named linear algebra.
#[derive(Debug, Error)]
pub enum LinalgError {
    /// Axis names do not allow the operation.
    #[error(transparent)]
    Names(#[from] NameError),

    /// Inner dimensions of a product disagree.
    #[error("Shape mismatch: cannot multiply {left:?} by {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// LU found a zero pivot, or an inverse or solve produced non-finite
    /// entries.
    #[error("Matrix is singular")]
    Singular,

    /// Reduction axis is neither 0 nor 1.
    #[error("Invalid reduction axis {axis} for a matrix")]
    InvalidAxis { axis: usize },

    /// Backend computation failed.
    #[error("Computation failed: {0}")]
    ComputationError(#[from] anyhow::Error),
}

/// Result type for named linear algebra.
pub type Result<T> = std::result::Result<T, LinalgError>;
