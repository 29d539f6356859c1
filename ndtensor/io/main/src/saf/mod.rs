//! Facade re-exports for ndtensor-io

pub use crate::api::error::*;
pub use crate::core::reader::{decode_tensor, read_tensor};
pub use crate::core::writer::{encode_tensor, write_tensor};
