//! Vapour pressure, relative humidity and dew point
//!
//! Temperatures are in kelvin, vapour pressures in hPa and relative humidity
//! in percent. Inputs are not range-checked: a relative humidity of zero makes
//! the dew point inverse take `ln(0)` and yields `-inf`/NaN for that element.

use crate::error::Result;
use crate::field::{zip_map, Field};
use crate::units::{kelvin_to_celsius, KELVIN_OFFSET};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Mean sea-level pressure used when no station pressure is supplied (hPa)
pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;

/// Hardy (1998) ITS-90 coefficients for saturation over liquid water
const HARDY_G: [f64; 8] = [
    -2.8365744e3,
    -6.028076559e3,
    1.954263612e1,
    -2.737830188e-2,
    1.6261698e-5,
    7.0229056e-10,
    -1.8680009e-13,
    2.7150305,
];

/// Triple point of water (K)
const TRIPLE_POINT: f64 = 273.16;

// Psychrometer constant for a ventilated wet bulb (1/K) and its temperature factor
const PSYCHROMETER_A: f64 = 6.6e-4;
const PSYCHROMETER_B: f64 = 0.00115;

const WET_BULB_TOLERANCE: f64 = 1e-9;
const WET_BULB_MAX_ITERATIONS: usize = 50;

/// Phase of the condensed surface for saturation vapour pressure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Phase {
    #[default]
    Water = 0,
    Ice = 1,
}

impl Phase {
    /// Decode the numeric flag used in phase arrays (0 water, 1 ice)
    #[must_use]
    pub fn from_code(code: f64) -> Option<Phase> {
        if code == 0.0 {
            Some(Phase::Water)
        } else if code == 1.0 {
            Some(Phase::Ice)
        } else {
            None
        }
    }

    #[must_use]
    pub fn code(self) -> f64 {
        f64::from(self as u8)
    }
}

// ============================================================================
// SATURATION
// ============================================================================

/// Saturation vapour pressure over water (hPa), Hardy ITS-90 formulation
#[must_use]
pub fn saturation_vapour_pressure(t_k: f64) -> f64 {
    let mut exponent = HARDY_G[7] * t_k.ln();
    for (i, &g) in HARDY_G[..7].iter().enumerate() {
        exponent += g * t_k.powi(i as i32 - 2);
    }
    exponent.exp() * 0.01
}

/// d(es)/dT of [`saturation_vapour_pressure`] (hPa/K)
fn saturation_vapour_pressure_slope(t_k: f64) -> f64 {
    let mut dlog = HARDY_G[7] / t_k;
    for (i, &g) in HARDY_G[..7].iter().enumerate() {
        let n = i as i32 - 2;
        dlog += g * f64::from(n) * t_k.powi(n - 1);
    }
    saturation_vapour_pressure(t_k) * dlog
}

/// Saturation vapour pressure (hPa) over water or ice
///
/// Magnus form with the WMO coefficients for each phase.
#[must_use]
pub fn saturation_vapour_pressure_multiphase(t_k: f64, phase: Phase) -> f64 {
    let (a, b) = match phase {
        Phase::Water => (17.502, 32.19),
        Phase::Ice => (22.587, -0.7),
    };
    6.1121 * (a * (t_k - TRIPLE_POINT) / (t_k - b)).exp()
}

// ============================================================================
// HUMIDITY CONVERSIONS
// ============================================================================

/// Actual vapour pressure (hPa) from temperature and relative humidity
#[must_use]
pub fn nonsaturation_vapour_pressure(t_k: f64, rh: f64) -> f64 {
    let t_c = kelvin_to_celsius(t_k);
    rh / 100.0 * 6.105 * (17.27 * t_c / (237.7 + t_c)).exp()
}

/// Relative humidity (%) from air and dew point temperature
///
/// Not clamped to 100: a dew point above the air temperature gives more.
#[must_use]
pub fn relative_humidity_percent(t_k: f64, td_k: f64) -> f64 {
    fn magnus(t_c: f64) -> f64 {
        6.11 * 10f64.powf(7.5 * t_c / (237.3 + t_c))
    }
    magnus(kelvin_to_celsius(td_k)) / magnus(kelvin_to_celsius(t_k)) * 100.0
}

/// Dew point (K) from relative humidity and air temperature
#[must_use]
pub fn dew_point_from_relative_humidity(rh: f64, t_k: f64) -> f64 {
    const B: f64 = 17.625;
    const C: f64 = 243.04;
    let t_c = kelvin_to_celsius(t_k);
    let g = (rh / 100.0).ln() + B * t_c / (C + t_c);
    C * g / (B - g) + KELVIN_OFFSET
}

/// Actual vapour pressure (hPa) from air and dew point temperature
#[must_use]
pub fn vapour_pressure_from_dew_point(t_k: f64, td_k: f64) -> f64 {
    saturation_vapour_pressure(t_k) * relative_humidity_percent(t_k, td_k) / 100.0
}

// ============================================================================
// PSYCHROMETRIC WET BULB
// ============================================================================

/// Wet-bulb temperature (K) from the psychrometer equation
///
/// Solves `es(Tw) - A p (T - Tw) = e` for `Tw` with Newton's method, starting
/// from the air temperature. Returns NaN if the iteration does not settle
/// within its iteration cap.
#[must_use]
pub fn wet_bulb_temperature_psychrometric(t_k: f64, rh: f64, p_hpa: f64) -> f64 {
    solve_wet_bulb(t_k, rh, p_hpa, WET_BULB_MAX_ITERATIONS)
}

fn solve_wet_bulb(t_k: f64, rh: f64, p_hpa: f64, max_iterations: usize) -> f64 {
    let e = rh / 100.0 * saturation_vapour_pressure(t_k);
    let mut tw = t_k;

    for _ in 0..max_iterations {
        let depression = t_k - tw;
        let a = PSYCHROMETER_A * (1.0 + PSYCHROMETER_B * kelvin_to_celsius(tw));
        let residual = saturation_vapour_pressure(tw) - a * p_hpa * depression - e;
        let slope = saturation_vapour_pressure_slope(tw) + a * p_hpa
            - PSYCHROMETER_A * PSYCHROMETER_B * p_hpa * depression;

        let step = residual / slope;
        if !step.is_finite() {
            return f64::NAN;
        }
        tw -= step;
        if step.abs() < WET_BULB_TOLERANCE {
            return tw;
        }
    }

    warn!(
        t_k,
        rh,
        p_hpa,
        iterations = max_iterations,
        "wet bulb iteration did not converge"
    );
    f64::NAN
}

// ============================================================================
// ARRAY ENTRY POINTS
// ============================================================================

#[must_use]
pub fn calculate_saturation_vapour_pressure(t_k: &Field) -> Field {
    t_k.map(saturation_vapour_pressure)
}

/// Elementwise phase selection; `phase` holds 0 (water) or 1 (ice) and any
/// other code produces NaN.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_saturation_vapour_pressure_multiphase(
    t_k: &Field,
    phase: &Field,
) -> Result<Field> {
    zip_map([t_k, phase], |[t, code]| {
        Phase::from_code(code).map_or(f64::NAN, |phase| {
            saturation_vapour_pressure_multiphase(t, phase)
        })
    })
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_nonsaturation_vapour_pressure(t_k: &Field, rh: &Field) -> Result<Field> {
    zip_map([t_k, rh], |[t, rh]| nonsaturation_vapour_pressure(t, rh))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_relative_humidity_percent(t_k: &Field, td_k: &Field) -> Result<Field> {
    zip_map([t_k, td_k], |[t, td]| relative_humidity_percent(t, td))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_dew_point_from_relative_humidity(rh: &Field, t_k: &Field) -> Result<Field> {
    zip_map([rh, t_k], |[rh, t]| dew_point_from_relative_humidity(rh, t))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_vapour_pressure_from_dew_point(t_k: &Field, td_k: &Field) -> Result<Field> {
    zip_map([t_k, td_k], |[t, td]| vapour_pressure_from_dew_point(t, td))
}

/// Psychrometric wet bulb at [`STANDARD_PRESSURE_HPA`]
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_wet_bulb_temperature_psychrometric(t_k: &Field, rh: &Field) -> Result<Field> {
    calculate_wet_bulb_temperature_psychrometric_at(t_k, rh, &Field::scalar(STANDARD_PRESSURE_HPA))
}

/// Psychrometric wet bulb at a station pressure `p_hpa`
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_wet_bulb_temperature_psychrometric_at(
    t_k: &Field,
    rh: &Field,
    p_hpa: &Field,
) -> Result<Field> {
    zip_map([t_k, rh, p_hpa], |[t, rh, p]| {
        wet_bulb_temperature_psychrometric(t, rh, p)
    })
}
