//! Error types for vector/matrix operations

use ndtensor_core::TensorError;
use ndtensor_io::TensorIoError;
use thiserror::Error;

/// Result type for vector/matrix operations
pub type LinalgResult<T> = Result<T, LinalgError>;

#[derive(Debug, Error)]
pub enum LinalgError {
    #[error("tensor error: {0}")]
    Tensor(#[from] TensorError),

    #[error("IO error: {0}")]
    Io(#[from] TensorIoError),

    #[error("expected a rank-{expected} tensor, got rank {got}")]
    RankMismatch { expected: usize, got: usize },

    #[error("{rows}x{cols} matrix cannot multiply a vector of length {len}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
}
