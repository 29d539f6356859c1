//! Facade re-exports for ndtensor-core

pub use crate::api::error::*;
pub use crate::api::types::*;
pub use crate::core::shape::Shape;
pub use crate::core::tensor::Tensor;
