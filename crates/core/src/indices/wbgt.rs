//! Wet-bulb and wet bulb globe temperatures

use super::globe::bgt;
use crate::error::Result;
use crate::field::{zip_map, Field};
use crate::psychrometrics::{nonsaturation_vapour_pressure, relative_humidity_percent};
use crate::units::{celsius_to_kelvin, kelvin_to_celsius};

/// Wet-bulb temperature (K), Stull (2011) empirical fit
///
/// Valid for relative humidity between 5 % and 99 % and temperatures between
/// -20 °C and 50 °C. The iterative psychrometric solution is
/// [`wet_bulb_temperature_psychrometric`](crate::psychrometrics::wet_bulb_temperature_psychrometric).
#[must_use]
pub fn wbt(t_k: f64, rh: f64) -> f64 {
    let t_c = kelvin_to_celsius(t_k);
    let tw = t_c * (0.151977 * (rh + 8.313659).sqrt()).atan() + (t_c + rh).atan()
        - (rh - 1.676331).atan()
        + 0.00391838 * rh.powf(1.5) * (0.023101 * rh).atan()
        - 4.686035;
    celsius_to_kelvin(tw)
}

/// Simplified WBGT (K) from temperature and relative humidity (ACSM)
#[must_use]
pub fn wbgt_simple(t_k: f64, rh: f64) -> f64 {
    let e = nonsaturation_vapour_pressure(t_k, rh);
    celsius_to_kelvin(0.567 * kelvin_to_celsius(t_k) + 0.393 * e + 3.94)
}

/// Wet bulb globe temperature (K)
///
/// `0.7 Tw + 0.2 Tg + 0.1 T` with the wet bulb from the dew point and the
/// globe temperature from [`bgt`], so negative wind speeds count as calm.
#[must_use]
pub fn wbgt(t_k: f64, mrt_k: f64, va: f64, td_k: f64) -> f64 {
    let rh = relative_humidity_percent(t_k, td_k);
    0.7 * wbt(t_k, rh) + 0.2 * bgt(t_k, mrt_k, va) + 0.1 * t_k
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_wbt(t_k: &Field, rh: &Field) -> Result<Field> {
    zip_map([t_k, rh], |[t, rh]| wbt(t, rh))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_wbgt_simple(t_k: &Field, rh: &Field) -> Result<Field> {
    zip_map([t_k, rh], |[t, rh]| wbgt_simple(t, rh))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_wbgt(t_k: &Field, mrt_k: &Field, va: &Field, td_k: &Field) -> Result<Field> {
    zip_map([t_k, mrt_k, va, td_k], |[t, mrt, va, td]| {
        wbgt(t, mrt, va, td)
    })
}
