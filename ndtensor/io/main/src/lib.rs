//! # ndtensor-io
//!
//! Flat-text persistence for [`ndtensor_core::Tensor`].
//!
//! The format is whitespace-delimited: the rank, then one extent per
//! dimension, then every element in row-major order. Token order is the
//! contract; newline placement is not.
//!
//! ```text
//! 2
//! 2
//! 3
//! 1 2 3 4 5 6
//! ```
//!
//! Reading is strict: input that runs out of tokens before the declared
//! shape or element count is satisfied is a [`TensorIoError::Truncated`]
//! error, never a partially filled tensor.
//!
//! ## Example
//!
//! ```rust
//! use ndtensor_core::Tensor;
//! use ndtensor_io::{decode_tensor, encode_tensor};
//!
//! let t = Tensor::from_vec(vec![1, 2, 3, 4], [2, 2]).unwrap();
//! let text = encode_tensor(&t);
//! let back: Tensor<i32> = decode_tensor(&text).unwrap();
//! assert_eq!(back, t);
//! ```

pub mod api;
mod core;
mod saf;

pub use saf::*;
