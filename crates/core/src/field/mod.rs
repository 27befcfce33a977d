//! Broadcastable f64 arrays
//!
//! - `shape` - shapes and the broadcasting rule
//! - `array` - the [`Field`] container
//! - `broadcast` - element-wise evaluation of scalar kernels

mod array;
mod broadcast;
mod shape;

pub use array::Field;
pub use broadcast::{zip_map, zip_map2};
pub use shape::Shape;
