//! Wind profile scaling and direct-beam radiation

use crate::error::Result;
use crate::field::{zip_map, Field};

/// Height of the input wind speed (m)
pub const REFERENCE_HEIGHT: f64 = 10.0;

/// Surface roughness length of the logarithmic profile (m)
const ROUGHNESS_LENGTH: f64 = 0.01;

/// Smallest zenith cosine used as a divisor in [`approximate_dsrp`]
const MIN_COSSZA: f64 = 0.01;

/// Scale a 10 m wind speed to `height` metres using a logarithmic profile
#[inline]
#[must_use]
pub fn scale_windspeed(va: f64, height: f64) -> f64 {
    va * (height / ROUGHNESS_LENGTH).log10() / (REFERENCE_HEIGHT / ROUGHNESS_LENGTH).log10()
}

/// Direct solar radiation at normal incidence (W/m²)
///
/// Zero while the sun is at or below the horizon. Low sun angles are divided
/// by at least `0.01` so grazing incidence does not blow up.
#[must_use]
pub fn approximate_dsrp(fdir: f64, cossza: f64) -> f64 {
    if cossza <= 0.0 {
        0.0
    } else {
        fdir / cossza.max(MIN_COSSZA)
    }
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_scale_windspeed(va: &Field, height: &Field) -> Result<Field> {
    zip_map([va, height], |[va, h]| scale_windspeed(va, h))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_approximate_dsrp(fdir: &Field, cossza: &Field) -> Result<Field> {
    zip_map([fdir, cossza], |[fdir, c]| approximate_dsrp(fdir, c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_scale_windspeed_reference() {
        assert_abs_diff_eq!(scale_windspeed(7.0, 2.0), 5.369069989882623, epsilon = 1e-9);
    }

    #[test]
    fn test_scale_windspeed_identity_at_reference_height() {
        assert_abs_diff_eq!(scale_windspeed(4.2, REFERENCE_HEIGHT), 4.2, epsilon = 1e-12);
    }

    #[test]
    fn test_dsrp_below_horizon_is_zero() {
        assert_eq!(approximate_dsrp(100.0, 0.0), 0.0);
        assert_eq!(approximate_dsrp(100.0, -0.3), 0.0);
    }

    #[test]
    fn test_dsrp_divides_by_floored_cosine() {
        assert_eq!(approximate_dsrp(374150.0, 0.4), 374150.0 / 0.4);
        assert_eq!(approximate_dsrp(1.0, 0.001), 100.0);
    }

    #[test]
    fn test_dsrp_array() {
        let out = calculate_approximate_dsrp(&Field::scalar(50.0), &Field::from([-1.0, 0.5]))
            .unwrap();
        assert_eq!(out.into_vec(), vec![0.0, 100.0]);
    }
}
