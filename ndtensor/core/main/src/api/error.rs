//! Error types for tensor operations

use thiserror::Error;

/// Result type for tensor operations
pub type TensorResult<T> = Result<T, TensorError>;

/// Errors that can occur when constructing or indexing a tensor
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TensorError {
    #[error("index has {got} coordinate(s), tensor has rank {expected}")]
    RankMismatch { expected: usize, got: usize },

    #[error("index {index} out of bounds for dimension {dim} of size {size}")]
    IndexOutOfBounds {
        dim: usize,
        index: usize,
        size: usize,
    },

    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("tensor has no elements")]
    EmptyTensor,
}
