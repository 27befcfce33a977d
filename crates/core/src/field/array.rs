//! Dense f64 arrays with an explicit shape

use super::shape::Shape;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::iter::Copied;
use std::slice;

/// Row-major array of f64 values
///
/// Every input and output of the index functions is a `Field`. A scalar is a
/// field with the empty shape, which broadcasts against any other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawField")]
pub struct Field {
    shape: Shape,
    data: Vec<f64>,
}

#[derive(Deserialize)]
struct RawField {
    shape: Shape,
    data: Vec<f64>,
}

impl TryFrom<RawField> for Field {
    type Error = Error;

    fn try_from(raw: RawField) -> Result<Self> {
        Field::from_shape_vec(raw.shape, raw.data)
    }
}

impl Field {
    /// A zero-dimensional field holding one value
    #[must_use]
    pub fn scalar(value: f64) -> Self {
        Field {
            shape: Shape::scalar(),
            data: vec![value],
        }
    }

    /// A one-dimensional field taking ownership of `data`
    #[must_use]
    pub fn from_vec(data: Vec<f64>) -> Self {
        Field {
            shape: Shape::new([data.len()]),
            data,
        }
    }

    /// Create a field with an explicit shape
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if `data.len()` is not the product of
    /// the dimensions.
    pub fn from_shape_vec(shape: impl Into<Shape>, data: Vec<f64>) -> Result<Self> {
        let shape = shape.into();
        if shape.len() != data.len() {
            return Err(Error::InvalidShape {
                shape: shape.dims().to_vec(),
                len: data.len(),
            });
        }
        Ok(Field { shape, data })
    }

    /// A field of the given shape filled with `value`
    #[must_use]
    pub fn full(shape: impl Into<Shape>, value: f64) -> Self {
        let shape = shape.into();
        let data = vec![value; shape.len()];
        Field { shape, data }
    }

    pub(crate) fn from_parts(shape: Shape, data: Vec<f64>) -> Self {
        debug_assert_eq!(shape.len(), data.len());
        Field { shape, data }
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Values in row-major order
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn iter(&self) -> Copied<slice::Iter<'_, f64>> {
        self.data.iter().copied()
    }

    /// The single value of a one-element field
    #[must_use]
    pub fn to_scalar(&self) -> Option<f64> {
        match self.data.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }

    /// Value at a multi-dimensional index, `None` if out of bounds
    #[must_use]
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        let dims = self.shape.dims();
        if index.len() != dims.len() {
            return None;
        }

        let mut flat = 0;
        for (&i, &extent) in index.iter().zip(dims) {
            if i >= extent {
                return None;
            }
            flat = flat * extent + i;
        }
        self.data.get(flat).copied()
    }

    /// Apply `f` to every element, keeping the shape
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Field {
        Field {
            shape: self.shape.clone(),
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Field {
    type Item = f64;
    type IntoIter = Copied<slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::scalar(value)
    }
}

impl From<Vec<f64>> for Field {
    fn from(data: Vec<f64>) -> Self {
        Field::from_vec(data)
    }
}

impl From<&[f64]> for Field {
    fn from(data: &[f64]) -> Self {
        Field::from_vec(data.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Field {
    fn from(data: [f64; N]) -> Self {
        Field::from_vec(data.to_vec())
    }
}
