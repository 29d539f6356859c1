//! Dense tensor with flat row-major storage.

use crate::api::error::{TensorError, TensorResult};
use crate::api::types::Scalar;
use crate::core::shape::{Dims, Shape};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A dense multi-dimensional array of `T` in row-major element order.
///
/// The tensor exclusively owns its element buffer: `clone()` performs a
/// deep copy and moving transfers the buffer. After any constructor that
/// takes a shape, `data.len() == shape.numel()` holds; the rank-0 tensor
/// from [`Tensor::new`] is the one documented exception (empty buffer) and
/// reports [`TensorError::EmptyTensor`] on any element access.
#[derive(Clone)]
pub struct Tensor<T: Scalar> {
    data: Vec<T>,
    shape: Shape,
    strides: Dims,
}

impl<T: Scalar> Tensor<T> {
    // ==================== Constructors ====================

    /// The rank-0 empty tensor: no dimensions, no elements.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            shape: Shape::default(),
            strides: Dims::new(),
        }
    }

    /// Tensor of the given shape with every element `T::zero()`.
    pub fn zeros(shape: impl Into<Shape>) -> Self {
        Self::full(shape, T::zero())
    }

    /// Tensor of the given shape with every element `T::one()`.
    pub fn ones(shape: impl Into<Shape>) -> Self {
        Self::full(shape, T::one())
    }

    /// Tensor of the given shape with every element `value`.
    pub fn full(shape: impl Into<Shape>, value: T) -> Self {
        let shape = shape.into();
        let n = shape.numel();
        let strides = shape.strides();
        log::trace!("tensor constructed rank={} numel={}", shape.rank(), n);
        Self {
            data: vec![value; n],
            shape,
            strides,
        }
    }

    /// Build a tensor from a flat row-major buffer.
    ///
    /// Errors when `data.len()` does not match the shape's element count.
    pub fn from_vec(data: Vec<T>, shape: impl Into<Shape>) -> TensorResult<Self> {
        let shape = shape.into();
        if data.len() != shape.numel() {
            return Err(TensorError::ShapeMismatch {
                expected: shape.dims().to_vec(),
                got: vec![data.len()],
            });
        }
        let strides = shape.strides();
        Ok(Self {
            data,
            shape,
            strides,
        })
    }

    /// Tensor with elements drawn uniformly from `[lo, hi)`.
    pub fn random_uniform(shape: impl Into<Shape>, lo: T, hi: T) -> Self
    where
        T: SampleUniform,
    {
        let shape = shape.into();
        let n = shape.numel();
        let mut rng = rand::thread_rng();
        let data = (0..n).map(|_| rng.gen_range(lo..hi)).collect();
        let strides = shape.strides();
        Self {
            data,
            shape,
            strides,
        }
    }

    // ==================== Properties ====================

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Per-dimension extents.
    pub fn shape(&self) -> &[usize] {
        self.shape.dims()
    }

    /// Row-major strides (elements to advance per unit step in each
    /// dimension).
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total element count, recomputed from the shape.
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // ==================== Element access ====================

    /// Flat offset of a multi-dimensional index.
    ///
    /// The only place index arithmetic happens; every accessor routes
    /// through it.
    fn linear_index(&self, index: &[usize]) -> TensorResult<usize> {
        if index.len() != self.rank() {
            return Err(TensorError::RankMismatch {
                expected: self.rank(),
                got: index.len(),
            });
        }
        let mut flat = 0usize;
        for (dim, (&i, &size)) in index.iter().zip(self.shape.dims()).enumerate() {
            if i >= size {
                return Err(TensorError::IndexOutOfBounds {
                    dim,
                    index: i,
                    size,
                });
            }
            flat += i * self.strides[dim];
        }
        // Only the rank-0 empty tensor can reach here with no backing
        // element; it must fail, not hand out a placeholder.
        if flat >= self.data.len() {
            return Err(TensorError::EmptyTensor);
        }
        Ok(flat)
    }

    /// Reference to the element at a multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> TensorResult<&T> {
        let flat = self.linear_index(index)?;
        Ok(&self.data[flat])
    }

    /// Mutable reference to the element at a multi-dimensional index.
    pub fn get_mut(&mut self, index: &[usize]) -> TensorResult<&mut T> {
        let flat = self.linear_index(index)?;
        Ok(&mut self.data[flat])
    }

    /// Store `value` at a multi-dimensional index.
    pub fn set(&mut self, index: &[usize], value: T) -> TensorResult<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    // ==================== Linear-order access ====================

    /// All elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All elements in row-major order, mutable.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor and return the underlying buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Scalar> Default for Tensor<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape and elementwise equality.
impl<T: Scalar> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

impl<T: Scalar> Index<&[usize]> for Tensor<T> {
    type Output = T;

    fn index(&self, index: &[usize]) -> &T {
        match self.get(index) {
            Ok(v) => v,
            Err(e) => panic!("tensor index failed: {e}"),
        }
    }
}

impl<T: Scalar> IndexMut<&[usize]> for Tensor<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut T {
        match self.get_mut(index) {
            Ok(v) => v,
            Err(e) => panic!("tensor index failed: {e}"),
        }
    }
}

impl<T: Scalar> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor(shape={}, numel={})",
            self.shape,
            self.data.len()
        )
    }
}

impl<T: Scalar> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.len() <= 16 {
            write!(f, "Tensor({}, {:?})", self.shape, self.data)
        } else {
            write!(
                f,
                "Tensor({}, [{}, {}, ..., {}])",
                self.shape,
                self.data[0],
                self.data[1],
                self.data[self.data.len() - 1]
            )
        }
    }
}

// ==================== Tests ====================
