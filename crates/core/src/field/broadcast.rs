//! Element-wise evaluation over broadcast inputs

use super::array::Field;
use super::shape::Shape;
use crate::error::Result;
use tracing::debug;

/// Visit every element of the broadcast shape of `inputs` in row-major order
fn for_each_broadcast<const N: usize>(
    inputs: [&Field; N],
    mut visit: impl FnMut([f64; N]),
) -> Result<Shape> {
    let shape = Shape::broadcast_all(inputs.iter().map(|f| f.shape()))?;
    let len = shape.len();

    if inputs.iter().all(|f| f.shape() == &shape) {
        for i in 0..len {
            visit(std::array::from_fn(|k| inputs[k].as_slice()[i]));
        }
        return Ok(shape);
    }

    if !inputs.iter().any(|f| f.shape() == &shape) {
        debug!(%shape, inputs = N, "broadcast to a shape none of the inputs has");
    }

    // Odometer over the output index; each input keeps its own flat offset.
    let dims = shape.dims();
    let strides: [Vec<usize>; N] = std::array::from_fn(|k| inputs[k].shape().strides_for(&shape));
    let mut index = vec![0usize; dims.len()];
    let mut offsets = [0usize; N];

    for _ in 0..len {
        visit(std::array::from_fn(|k| inputs[k].as_slice()[offsets[k]]));

        for axis in (0..dims.len()).rev() {
            index[axis] += 1;
            for k in 0..N {
                offsets[k] += strides[k][axis];
            }
            if index[axis] < dims[axis] {
                break;
            }
            for k in 0..N {
                offsets[k] -= strides[k][axis] * dims[axis];
            }
            index[axis] = 0;
        }
    }

    Ok(shape)
}

/// Broadcast `inputs` together and apply `kernel` element-wise
///
/// The output has the broadcast shape of all inputs.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn zip_map<const N: usize>(
    inputs: [&Field; N],
    kernel: impl Fn([f64; N]) -> f64,
) -> Result<Field> {
    let mut data = Vec::new();
    let shape = for_each_broadcast(inputs, |values| data.push(kernel(values)))?;
    Ok(Field::from_parts(shape, data))
}

/// Like [`zip_map`] for kernels that produce two outputs per element
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn zip_map2<const N: usize>(
    inputs: [&Field; N],
    kernel: impl Fn([f64; N]) -> (f64, f64),
) -> Result<(Field, Field)> {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let shape = for_each_broadcast(inputs, |values| {
        let (a, b) = kernel(values);
        first.push(a);
        second.push(b);
    })?;
    Ok((
        Field::from_parts(shape.clone(), first),
        Field::from_parts(shape, second),
    ))
}
