//! Solar declination and equation-of-time correction
//!
//! Truncated Fourier series in the fractional year angle. The day number is
//! the (possibly fractional) day of year from
//! [`CalendarDate::day_of_year`](super::CalendarDate::day_of_year).

use crate::error::Result;
use crate::field::{zip_map2, Field};

/// Declination series: constant, then (cos, sin) pairs for g, 2g, 3g
const DECLINATION: [f64; 7] = [
    0.396372, -22.91327, 4.025430, -0.387205, 0.051967, -0.154527, 0.084798,
];

/// Time correction series: constant, then (cos, sin) pairs for g, 2g
const TIME_CORRECTION: [f64; 5] = [0.004297, 0.107029, -1.837877, -0.837378, -2.340475];

/// Fractional year angle in degrees, reduced into `[0, 360)`
///
/// Non-finite input gives NaN.
fn year_angle(julian_day: f64, hour: f64) -> f64 {
    (360.0 / 365.25 * (julian_day + hour / 24.0)).rem_euclid(360.0)
}

fn fourier(coefficients: &[f64], g: f64) -> f64 {
    let mut sum = coefficients[0];
    for (k, pair) in coefficients[1..].chunks_exact(2).enumerate() {
        let angle = (g * (k + 1) as f64).to_radians();
        sum += pair[0] * angle.cos() + pair[1] * angle.sin();
    }
    sum
}

/// Solar declination (degrees) and time correction (degrees of hour angle)
/// for a day of year and UTC hour
#[must_use]
pub fn solar_declination_angle(julian_day: f64, hour: f64) -> (f64, f64) {
    let g = year_angle(julian_day, hour);
    (fourier(&DECLINATION, g), fourier(&TIME_CORRECTION, g))
}

/// Array form of [`solar_declination_angle`], returning
/// `(declination, time_correction)` with the broadcast shape
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_solar_declination_angle(
    julian_day: &Field,
    hour: &Field,
) -> Result<(Field, Field)> {
    zip_map2([julian_day, hour], |[jd, h]| solar_declination_angle(jd, h))
}
