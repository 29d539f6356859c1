//! Rank-1 view over a tensor.

use std::ops::{Index, IndexMut};
use std::path::Path;

use crate::api::error::{LinalgError, LinalgResult};
use ndtensor_core::{Scalar, Tensor, TensorResult};

/// A vector: an owned rank-1 tensor with single-index element access.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: Scalar> {
    tensor: Tensor<T>,
}

impl<T: Scalar> Vector<T> {
    /// Zero-filled vector of the given length.
    pub fn zeros(size: usize) -> Self {
        Self {
            tensor: Tensor::zeros([size]),
        }
    }

    /// Vector of the given length with every element `value`.
    pub fn full(size: usize, value: T) -> Self {
        Self {
            tensor: Tensor::full([size], value),
        }
    }

    /// Vector holding `data`.
    pub fn from_vec(data: Vec<T>) -> Self {
        let size = data.len();
        Self {
            tensor: Tensor::from_vec(data, [size]).unwrap(),
        }
    }

    /// Wrap an existing tensor; errors unless it has rank 1.
    pub fn from_tensor(tensor: Tensor<T>) -> LinalgResult<Self> {
        if tensor.rank() != 1 {
            return Err(LinalgError::RankMismatch {
                expected: 1,
                got: tensor.rank(),
            });
        }
        Ok(Self { tensor })
    }

    /// Load a vector from a tensor file; errors unless the file holds a
    /// rank-1 tensor.
    pub fn from_file(path: impl AsRef<Path>) -> LinalgResult<Self> {
        Self::from_tensor(ndtensor_io::read_tensor(path)?)
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.tensor.shape()[0]
    }

    pub fn get(&self, idx: usize) -> TensorResult<&T> {
        self.tensor.get(&[idx])
    }

    pub fn get_mut(&mut self, idx: usize) -> TensorResult<&mut T> {
        self.tensor.get_mut(&[idx])
    }

    pub fn set(&mut self, idx: usize, value: T) -> TensorResult<()> {
        self.tensor.set(&[idx], value)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tensor.iter()
    }

    /// The backing tensor.
    pub fn tensor(&self) -> &Tensor<T> {
        &self.tensor
    }

    /// Consume the vector and return the backing tensor.
    pub fn into_tensor(self) -> Tensor<T> {
        self.tensor
    }
}

impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.tensor[&[idx][..]]
    }
}

impl<T: Scalar> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.tensor[&[idx][..]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_and_full() {
        let v = Vector::<f64>::zeros(4);
        assert_eq!(v.size(), 4);
        assert!(v.iter().all(|&x| x == 0.0));

        let v = Vector::full(3, 2.5f32);
        assert!(v.iter().all(|&x| x == 2.5));
    }

    #[test]
    fn test_from_vec_and_index() {
        let mut v = Vector::from_vec(vec![1, 2, 3]);
        assert_eq!(v.size(), 3);
        assert_eq!(v[1], 2);
        v[1] = 20;
        assert_eq!(*v.get(1).unwrap(), 20);
    }

    #[test]
    fn test_from_tensor_rank_check() {
        let t = Tensor::<i32>::zeros([2, 2]);
        let err = Vector::from_tensor(t).unwrap_err();
        assert!(matches!(
            err,
            LinalgError::RankMismatch {
                expected: 1,
                got: 2
            }
        ));
    }

    #[test]
    fn test_out_of_bounds() {
        let v = Vector::<i32>::zeros(2);
        assert!(v.get(2).is_err());
    }
}
