//! Error types for thermal comfort calculations
//!
//! Only structural problems are errors. Physically meaningless inputs (zero
//! relative humidity, temperatures below absolute zero, ...) are not rejected
//! and surface as NaN or infinity in the affected output elements.

use thiserror::Error;

/// Main error type for thermal comfort operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Shape mismatch: {left:?} cannot be broadcast with {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("Invalid shape: {shape:?} needs {} elements, got {len}", .shape.iter().product::<usize>())]
    InvalidShape { shape: Vec<usize>, len: usize },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Humidity input: {0}")]
    HumidityInput(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`]
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for thermal comfort operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = Error::ShapeMismatch {
            left: vec![2],
            right: vec![3],
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch: [2] cannot be broadcast with [3]"
        );
    }

    #[test]
    fn test_invalid_shape_message_counts_elements() {
        let err = Error::InvalidShape {
            shape: vec![2, 3],
            len: 5,
        };
        assert_eq!(err.to_string(), "Invalid shape: [2, 3] needs 6 elements, got 5");
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = Error::invalid_parameter("month", 13, "must be in 1..=12");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: month = 13 (must be in 1..=12)"
        );
    }
}
