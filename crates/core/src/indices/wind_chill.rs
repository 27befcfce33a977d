//! Wind chill

use crate::error::Result;
use crate::field::{zip_map, Field};
use crate::units::{celsius_to_kelvin, kelvin_to_celsius};

/// Wind chill index (K) from temperature and 10 m wind speed (m/s)
///
/// Environment Canada formulation; the regression takes wind in km/h.
#[must_use]
pub fn wind_chill(t_k: f64, va: f64) -> f64 {
    let t_c = kelvin_to_celsius(t_k);
    let v = (va * 3.6).powf(0.16);
    celsius_to_kelvin(13.12 + 0.6215 * t_c - 11.37 * v + 0.3965 * t_c * v)
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_wind_chill(t_k: &Field, va: &Field) -> Result<Field> {
    zip_map([t_k, va], |[t, va]| wind_chill(t, va))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_value() {
        assert_abs_diff_eq!(wind_chill(270.0, 10.0), 261.92338925380074, epsilon = 1e-6);
    }

    #[test]
    fn test_colder_with_more_wind() {
        let chill = calculate_wind_chill(&Field::scalar(263.15), &Field::from([2.0, 5.0, 15.0]))
            .unwrap();
        let v = chill.as_slice();
        assert!(v[0] > v[1] && v[1] > v[2]);
    }
}
