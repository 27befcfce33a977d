//! Heat index, apparent temperature, humidex and normal effective temperature

use crate::error::Result;
use crate::field::{zip_map, Field};
use crate::psychrometrics::{nonsaturation_vapour_pressure, relative_humidity_percent};
use crate::units::{
    celsius_to_kelvin, fahrenheit_to_kelvin, kelvin_to_celsius, kelvin_to_fahrenheit,
};
use crate::wind::scale_windspeed;

/// Blazejczyk et al. (2012) heat index polynomial in (°C, %)
const HEAT_INDEX_SIMPLIFIED: [f64; 9] = [
    -8.784695,
    1.61139411,
    2.338549,
    -0.14611605,
    -1.2308094e-2,
    -1.6424828e-2,
    2.211732e-3,
    7.2546e-4,
    -3.582e-6,
];

/// NWS Rothfusz regression in (°F, %)
const ROTHFUSZ: [f64; 9] = [
    -42.379,
    2.04901523,
    10.14333127,
    -0.22475541,
    -0.00683783,
    -0.05481717,
    0.00122874,
    0.00085282,
    -0.00000199,
];

/// Full quadratic in `t` and `rh` shared by both heat index regressions
fn heat_index_polynomial(c: &[f64; 9], t: f64, rh: f64) -> f64 {
    c[0] + c[1] * t + c[2] * rh + c[3] * t * rh + c[4] * t * t + c[5] * rh * rh
        + c[6] * t * t * rh
        + c[7] * t * rh * rh
        + c[8] * t * t * rh * rh
}

/// Heat index (K) from temperature and relative humidity
///
/// Below 20 °C the air temperature is returned unchanged.
#[must_use]
pub fn heat_index_simplified(t_k: f64, rh: f64) -> f64 {
    let t_c = kelvin_to_celsius(t_k);
    if t_c <= 20.0 {
        return t_k;
    }
    celsius_to_kelvin(heat_index_polynomial(&HEAT_INDEX_SIMPLIFIED, t_c, rh))
}

/// NWS heat index (K) from temperature and dew point
///
/// Rothfusz regression with the low and high humidity adjustments, falling
/// back to Steadman's simple formula when the result would be below 80 °F.
#[must_use]
pub fn heat_index_adjusted(t_k: f64, td_k: f64) -> f64 {
    let rh = relative_humidity_percent(t_k, td_k);
    let t_f = kelvin_to_fahrenheit(t_k);

    let simple = 0.5 * (t_f + 61.0 + (t_f - 68.0) * 1.2 + rh * 0.094);
    let mut hi = heat_index_polynomial(&ROTHFUSZ, t_f, rh);

    if t_f > 80.0 && t_f < 112.0 && rh <= 13.0 {
        hi -= (13.0 - rh) / 4.0 * ((17.0 - (t_f - 95.0).abs()) / 17.0).sqrt();
    }
    if t_f > 80.0 && t_f < 87.0 && rh > 85.0 {
        hi += (rh - 85.0) / 10.0 * (87.0 - t_f) / 5.0;
    }
    if t_f < 80.0 && (simple + t_f) / 2.0 < 80.0 {
        hi = simple;
    }

    fahrenheit_to_kelvin(hi)
}

/// Apparent temperature (K) from temperature, 10 m wind speed and relative
/// humidity
#[must_use]
pub fn apparent_temperature(t_k: f64, va: f64, rh: f64) -> f64 {
    let e = nonsaturation_vapour_pressure(t_k, rh);
    celsius_to_kelvin(kelvin_to_celsius(t_k) + 0.33 * e - 0.7 * va - 4.0)
}

/// Humidex (K) from temperature and dew point
#[must_use]
pub fn humidex(t_k: f64, td_k: f64) -> f64 {
    let e = 6.11 * (5417.7530 * (1.0 / 273.16 - 1.0 / td_k)).exp();
    t_k + 0.5555 * (e - 10.0)
}

/// Normal effective temperature (K) with wind scaled to 1.2 m
#[must_use]
pub fn normal_effective_temperature(t_k: f64, va: f64, rh: f64) -> f64 {
    let t_c = kelvin_to_celsius(t_k);
    let v = scale_windspeed(va, 1.2);
    let d = 1.0 / (1.76 + 1.4 * v.powf(0.75));
    let net = 37.0 - (37.0 - t_c / (0.68 - 0.0014 * rh + d)) - 0.29 * t_c * (1.0 - 0.01 * rh);
    celsius_to_kelvin(net)
}

// ============================================================================
// ARRAY ENTRY POINTS
// ============================================================================

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_heat_index_simplified(t_k: &Field, rh: &Field) -> Result<Field> {
    zip_map([t_k, rh], |[t, rh]| heat_index_simplified(t, rh))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_heat_index_adjusted(t_k: &Field, td_k: &Field) -> Result<Field> {
    zip_map([t_k, td_k], |[t, td]| heat_index_adjusted(t, td))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_apparent_temperature(t_k: &Field, va: &Field, rh: &Field) -> Result<Field> {
    zip_map([t_k, va, rh], |[t, va, rh]| apparent_temperature(t, va, rh))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_humidex(t_k: &Field, td_k: &Field) -> Result<Field> {
    zip_map([t_k, td_k], |[t, td]| humidex(t, td))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_normal_effective_temperature(
    t_k: &Field,
    va: &Field,
    rh: &Field,
) -> Result<Field> {
    zip_map([t_k, va, rh], |[t, va, rh]| {
        normal_effective_temperature(t, va, rh)
    })
}
