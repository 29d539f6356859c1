//! Matrix-vector multiplication.

use crate::api::error::{LinalgError, LinalgResult};
use crate::core::matrix::Matrix;
use crate::core::vector::Vector;
use ndtensor_core::Scalar;

/// Multiply an R-by-C matrix by a length-C vector, producing a fresh
/// length-R vector with `result[i] = sum_j mat(i, j) * vec(j)`.
///
/// The dimensions are checked before any element is read; a mismatch is a
/// [`LinalgError::DimensionMismatch`].
pub fn matvec<T: Scalar>(mat: &Matrix<T>, vec: &Vector<T>) -> LinalgResult<Vector<T>> {
    if mat.cols() != vec.size() {
        return Err(LinalgError::DimensionMismatch {
            rows: mat.rows(),
            cols: mat.cols(),
            len: vec.size(),
        });
    }

    let mut out = Vector::zeros(mat.rows());
    for i in 0..mat.rows() {
        let mut sum = T::zero();
        for j in 0..mat.cols() {
            sum = sum + mat[(i, j)] * vec[j];
        }
        out[i] = sum;
    }
    Ok(out)
}
