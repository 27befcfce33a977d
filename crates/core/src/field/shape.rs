//! Array shapes and the broadcasting rule
//!
//! Dimensions are right-aligned; each aligned pair must be equal or one of
//! them must be 1, and the result takes the other extent. A missing leading
//! dimension behaves like 1, so a scalar (empty shape) broadcasts against
//! everything.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Row-major array shape
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// The zero-dimensional shape of a scalar (one element)
    #[must_use]
    pub fn scalar() -> Self {
        Shape(Vec::new())
    }

    /// Create a shape from its dimension extents
    #[must_use]
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Shape(dims.into())
    }

    /// Dimension extents, outermost first
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Number of dimensions
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Number of elements (1 for a scalar)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().product()
    }

    /// True if some dimension has extent zero
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for the zero-dimensional shape
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.0.is_empty()
    }

    /// Broadcast two shapes together
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if an aligned pair of dimensions
    /// differs and neither of them is 1.
    pub fn broadcast(&self, other: &Shape) -> Result<Shape> {
        let ndim = self.ndim().max(other.ndim());
        let mut dims = vec![0; ndim];

        for axis in 0..ndim {
            let a = self.dim_from_right(ndim - 1 - axis);
            let b = other.dim_from_right(ndim - 1 - axis);
            dims[axis] = match (a, b) {
                (a, b) if a == b => a,
                (1, b) => b,
                (a, 1) => a,
                _ => {
                    debug!(left = %self, right = %other, "shape mismatch while broadcasting");
                    return Err(Error::ShapeMismatch {
                        left: self.0.clone(),
                        right: other.0.clone(),
                    });
                }
            };
        }

        Ok(Shape(dims))
    }

    /// Broadcast any number of shapes together
    ///
    /// The rule is associative, so the order of the inputs does not change
    /// the result. An empty iterator yields the scalar shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] for the first incompatible pair.
    pub fn broadcast_all<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Result<Shape> {
        shapes
            .into_iter()
            .try_fold(Shape::scalar(), |acc, shape| acc.broadcast(shape))
    }

    /// Element strides of `self` when read as if it had shape `target`
    ///
    /// Broadcast axes (extent 1 stretched, or missing leading axes) get a
    /// stride of zero so the same element is revisited.
    pub(crate) fn strides_for(&self, target: &Shape) -> Vec<usize> {
        let ndim = target.ndim();
        let offset = ndim - self.ndim();
        let mut strides = vec![0; ndim];
        let mut stride = 1;

        for axis in (0..self.ndim()).rev() {
            let extent = self.0[axis];
            if extent != 1 || target.0[axis + offset] == 1 {
                strides[axis + offset] = stride;
            }
            stride *= extent;
        }

        strides
    }

    /// Extent counted from the innermost axis, 1 past the leading axis
    fn dim_from_right(&self, k: usize) -> usize {
        if k < self.ndim() {
            self.0[self.ndim() - 1 - k]
        } else {
            1
        }
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape(dims.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Shape(dims.to_vec())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
