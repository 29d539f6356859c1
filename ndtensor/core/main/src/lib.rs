//! # ndtensor-core
//!
//! Dense rank-general tensor container for the ndtensor workspace.
//!
//! This crate provides a [`Tensor`] type with a flat, row-major element
//! buffer and an explicit [`Shape`], generic over any numeric element type
//! implementing [`Scalar`]:
//!
//! - Construction by shape (`zeros`, `ones`, `full`), from raw data
//!   (`from_vec`), or with random contents (`random_uniform`)
//! - Bounds-checked multi-index element access through a single shared
//!   linear-index computation
//! - Deep-copy value semantics: `clone()` duplicates the buffer, moves
//!   transfer it
//! - Equality over shape and elements
//!
//! ## Example
//!
//! ```rust
//! use ndtensor_core::Tensor;
//!
//! let mut t = Tensor::<f64>::zeros([2, 3]);
//! assert_eq!(t.rank(), 2);
//! assert_eq!(t.numel(), 6);
//!
//! t.set(&[0, 1], 5.0).unwrap();
//! assert_eq!(*t.get(&[0, 1]).unwrap(), 5.0);
//! ```

pub mod api;
mod core;
mod saf;

pub use saf::*;
