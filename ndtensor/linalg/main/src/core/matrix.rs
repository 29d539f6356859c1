//! Rank-2 view over a tensor.

use std::ops::{Index, IndexMut};
use std::path::Path;

use crate::api::error::{LinalgError, LinalgResult};
use ndtensor_core::{Scalar, Tensor, TensorResult};

/// A matrix: an owned rank-2 tensor with row/column element access.
///
/// Rows are the leading dimension, so each row is contiguous in the
/// backing tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Scalar> {
    tensor: Tensor<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Zero-filled matrix of the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            tensor: Tensor::zeros([rows, cols]),
        }
    }

    /// Matrix of the given dimensions with every element `value`.
    pub fn full(rows: usize, cols: usize, value: T) -> Self {
        Self {
            tensor: Tensor::full([rows, cols], value),
        }
    }

    /// Matrix from row-major data.
    ///
    /// Errors when `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> LinalgResult<Self> {
        Ok(Self {
            tensor: Tensor::from_vec(data, [rows, cols])?,
        })
    }

    /// The n-by-n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self {
            tensor: Tensor::from_vec(data, [n, n]).unwrap(),
        }
    }

    /// Wrap an existing tensor; errors unless it has rank 2.
    pub fn from_tensor(tensor: Tensor<T>) -> LinalgResult<Self> {
        if tensor.rank() != 2 {
            return Err(LinalgError::RankMismatch {
                expected: 2,
                got: tensor.rank(),
            });
        }
        Ok(Self { tensor })
    }

    /// Load a matrix from a tensor file; errors unless the file holds a
    /// rank-2 tensor.
    pub fn from_file(path: impl AsRef<Path>) -> LinalgResult<Self> {
        Self::from_tensor(ndtensor_io::read_tensor(path)?)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.tensor.shape()[0]
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.tensor.shape()[1]
    }

    pub fn get(&self, row: usize, col: usize) -> TensorResult<&T> {
        self.tensor.get(&[row, col])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> TensorResult<&mut T> {
        self.tensor.get_mut(&[row, col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> TensorResult<()> {
        self.tensor.set(&[row, col], value)
    }

    /// The backing tensor.
    pub fn tensor(&self) -> &Tensor<T> {
        &self.tensor
    }

    /// Consume the matrix and return the backing tensor.
    pub fn into_tensor(self) -> Tensor<T> {
        self.tensor
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.tensor[&[row, col][..]]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.tensor[&[row, col][..]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = Matrix::<f64>::zeros(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.tensor().numel(), 6);
    }

    #[test]
    fn test_from_vec_row_major() {
        let m = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 0)], 4);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Matrix::from_vec(vec![1, 2, 3], 2, 3).unwrap_err();
        assert!(matches!(err, LinalgError::Tensor(_)));
    }

    #[test]
    fn test_identity() {
        let m = Matrix::<i32>::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], i32::from(i == j));
            }
        }
    }

    #[test]
    fn test_set_get() {
        let mut m = Matrix::<f32>::zeros(2, 2);
        m.set(1, 0, 4.5).unwrap();
        assert_eq!(*m.get(1, 0).unwrap(), 4.5);
        m[(0, 1)] = 1.5;
        assert_eq!(m[(0, 1)], 1.5);
    }

    #[test]
    fn test_from_tensor_rank_check() {
        let t = Tensor::<i32>::zeros([4]);
        let err = Matrix::from_tensor(t).unwrap_err();
        assert!(matches!(
            err,
            LinalgError::RankMismatch {
                expected: 2,
                got: 1
            }
        ));
    }
}
