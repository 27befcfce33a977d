//! Temperature unit conversions
//!
//! Every other module works in kelvin; these are the only places where
//! Celsius or Fahrenheit values enter or leave.

use crate::field::Field;

/// Celsius to Kelvin conversion offset (0°C = 273.15 K)
pub const KELVIN_OFFSET: f64 = 273.15;

// ============================================================================
// SCALAR KERNELS
// ============================================================================

#[inline]
#[must_use]
pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + KELVIN_OFFSET
}

#[inline]
#[must_use]
pub fn kelvin_to_celsius(t_k: f64) -> f64 {
    t_k - KELVIN_OFFSET
}

#[inline]
#[must_use]
pub fn kelvin_to_fahrenheit(t_k: f64) -> f64 {
    kelvin_to_celsius(t_k) * 9.0 / 5.0 + 32.0
}

#[inline]
#[must_use]
pub fn fahrenheit_to_kelvin(t_f: f64) -> f64 {
    celsius_to_kelvin((t_f - 32.0) * 5.0 / 9.0)
}

// ============================================================================
// ARRAY ENTRY POINTS
// ============================================================================

#[must_use]
pub fn calculate_celsius_to_kelvin(t_c: &Field) -> Field {
    t_c.map(celsius_to_kelvin)
}

#[must_use]
pub fn calculate_kelvin_to_celsius(t_k: &Field) -> Field {
    t_k.map(kelvin_to_celsius)
}

#[must_use]
pub fn calculate_kelvin_to_fahrenheit(t_k: &Field) -> Field {
    t_k.map(kelvin_to_fahrenheit)
}

#[must_use]
pub fn calculate_fahrenheit_to_kelvin(t_f: &Field) -> Field {
    t_f.map(fahrenheit_to_kelvin)
}
