//! Error types for the tensor file codec

use ndtensor_core::TensorError;
use thiserror::Error;

pub type TensorIoResult<T> = Result<T, TensorIoError>;

#[derive(Debug, Error)]
pub enum TensorIoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated tensor data: expected {expected} {section} token(s), found {found}")]
    Truncated {
        section: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid {section} token '{token}' at position {position}")]
    InvalidToken {
        section: &'static str,
        token: String,
        position: usize,
    },

    #[error("declared shape {shape:?} overflows the addressable element count")]
    Oversized { shape: Vec<usize> },

    #[error("tensor error: {0}")]
    Tensor(#[from] TensorError),
}
