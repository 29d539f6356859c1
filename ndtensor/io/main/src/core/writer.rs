//! Writer for the flat-text tensor format.

use std::fs;
use std::path::Path;

use crate::api::error::TensorIoResult;
use ndtensor_core::{Scalar, Tensor};

/// Render a tensor in the flat-text layout: rank line, one extent per
/// line, then all elements space-separated on one line with a trailing
/// newline.
pub fn encode_tensor<T: Scalar>(tensor: &Tensor<T>) -> String {
    let mut out = String::new();
    out.push_str(&tensor.rank().to_string());
    out.push('\n');
    for d in tensor.shape() {
        out.push_str(&d.to_string());
        out.push('\n');
    }
    let elements: Vec<String> = tensor.iter().map(|v| v.to_string()).collect();
    out.push_str(&elements.join(" "));
    out.push('\n');
    out
}

/// Write a tensor to a file.
pub fn write_tensor<T: Scalar, P: AsRef<Path>>(tensor: &Tensor<T>, path: P) -> TensorIoResult<()> {
    let path = path.as_ref();
    fs::write(path, encode_tensor(tensor))?;
    log::debug!(
        "wrote tensor rank={} shape={:?} to {}",
        tensor.rank(),
        tensor.shape(),
        path.display()
    );
    Ok(())
}
