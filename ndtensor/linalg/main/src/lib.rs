//! # ndtensor-linalg
//!
//! Rank-1 and rank-2 convenience views over [`ndtensor_core::Tensor`].
//!
//! [`Vector`] and [`Matrix`] own a tensor of the matching rank and expose
//! named accessors (`size`, `rows`, `cols`) plus single- and double-index
//! element access. They add no storage of their own; every constructor
//! edge — including from-file — validates the rank. [`matvec`] is the one
//! derived algorithm.
//!
//! ## Example
//!
//! ```rust
//! use ndtensor_linalg::{matvec, Matrix, Vector};
//!
//! let m = Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
//! let x = Vector::from_vec(vec![5, 6]);
//! let y = matvec(&m, &x).unwrap();
//! assert_eq!(y.tensor().as_slice(), &[17, 39]);
//! ```

pub mod api;
mod core;
mod saf;

pub use saf::*;
