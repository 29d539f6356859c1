//! Facade re-exports for ndtensor-linalg

pub use crate::api::error::*;
pub use crate::core::matrix::Matrix;
pub use crate::core::matvec::matvec;
pub use crate::core::vector::Vector;
