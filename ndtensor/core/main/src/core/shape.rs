//! Tensor shape: per-dimension extents and row-major strides.

use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Dimension storage: stack-allocated for rank <= 4.
pub(crate) type Dims = SmallVec<[usize; 4]>;

/// Ordered per-dimension extents of a tensor.
///
/// Rank 0 (no dimensions) describes a scalar; its element count is the
/// empty product, 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    dims: Dims,
}

impl Shape {
    /// Create a shape from a dimension list.
    pub fn new(dims: Vec<usize>) -> Self {
        dims.into()
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// The extents as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total element count, or `None` if the product overflows `usize`.
    pub fn checked_numel(&self) -> Option<usize> {
        self.dims.iter().try_fold(1usize, |n, &d| n.checked_mul(d))
    }

    /// Total element count, recomputed from the extents.
    ///
    /// Overflow of the product is a precondition violation and panics;
    /// use [`checked_numel`](Self::checked_numel) for untrusted input.
    pub fn numel(&self) -> usize {
        match self.checked_numel() {
            Some(n) => n,
            None => panic!(
                "element count of shape {:?} overflows usize",
                self.dims.as_slice()
            ),
        }
    }

    /// Row-major strides: the last dimension has stride 1.
    pub(crate) fn strides(&self) -> Dims {
        let rank = self.dims.len();
        if rank == 0 {
            return Dims::new();
        }
        let mut strides: Dims = smallvec![1usize; rank];
        for i in (0..rank - 1).rev() {
            strides[i] = strides[i + 1] * self.dims[i + 1];
        }
        strides
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self {
            dims: SmallVec::from_vec(dims),
        }
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self {
            dims: SmallVec::from_slice(dims),
        }
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self {
            dims: SmallVec::from_slice(&dims),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.dims.as_slice())
    }
}
