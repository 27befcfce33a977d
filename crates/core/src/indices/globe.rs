//! Black globe temperature and its inverse
//!
//! A globe of diameter 0.15 m and emissivity 0.95 exchanges heat with its
//! surroundings by radiation and forced convection:
//!
//! `B⁴ + d·B = Tmrt⁴ + d·T`, with `d = 1.1e8 v^0.6 / (0.95 D^0.4)`
//!
//! where `v` is the wind at globe height (1.1 m). Negative wind speeds are
//! treated as calm.

use crate::error::Result;
use crate::field::{zip_map, Field};
use crate::wind::scale_windspeed;

const GLOBE_HEIGHT: f64 = 1.1;
const GLOBE_DIAMETER: f64 = 0.15;
const GLOBE_EMISSIVITY: f64 = 0.95;

/// Wind at globe height, negative values clamped to zero
fn globe_wind(va: f64) -> f64 {
    let v = scale_windspeed(va, GLOBE_HEIGHT);
    if v < 0.0 {
        0.0
    } else {
        v
    }
}

/// Convective coefficient `d` of the globe balance
fn convection(v: f64) -> f64 {
    1.1e8 * v.powf(0.6) / (GLOBE_EMISSIVITY * GLOBE_DIAMETER.powf(0.4))
}

/// Globe temperature (K) from air temperature, mean radiant temperature and
/// 10 m wind speed
///
/// The quartic is solved in closed form. In calm air the globe is in pure
/// radiative balance and equals the mean radiant temperature.
#[must_use]
pub fn bgt(t_k: f64, mrt_k: f64, va: f64) -> f64 {
    let v = globe_wind(va);
    if v == 0.0 {
        return mrt_k;
    }

    let d = convection(v);
    let e = -mrt_k.powi(4) - d * t_k;
    let q = 12.0 * e;
    let s = 27.0 * d * d;
    let delta = ((s + (s * s - 4.0 * q.powi(3)).sqrt()) / 2.0).cbrt();
    let big_q = 0.5 * ((delta + q / delta) / 3.0).sqrt();
    -big_q + 0.5 * (-4.0 * big_q * big_q + d / big_q).sqrt()
}

/// Mean radiant temperature (K) from a globe temperature reading
#[must_use]
pub fn mrt_from_bgt(t_k: f64, bgt_k: f64, va: f64) -> f64 {
    let d = convection(globe_wind(va));
    (bgt_k.powi(4) + d * (bgt_k - t_k)).powf(0.25)
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_bgt(t_k: &Field, mrt_k: &Field, va: &Field) -> Result<Field> {
    zip_map([t_k, mrt_k, va], |[t, mrt, va]| bgt(t, mrt, va))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_mrt_from_bgt(t_k: &Field, bgt_k: &Field, va: &Field) -> Result<Field> {
    zip_map([t_k, bgt_k, va], |[t, b, va]| mrt_from_bgt(t, b, va))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bgt_reference_values() {
        let t = Field::from([278.15, 300.0, 300.0]);
        let mrt = Field::from([20.0, 20.0, -10.0]);
        let va = Field::from([278.15, 310.0, 310.0]);
        let out = calculate_bgt(&t, &mrt, &va).unwrap();
        let expected = [277.1238737724192, 298.70218703427656, 298.70216299754475];
        for (got, want) in out.iter().zip(expected) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_bgt_between_air_and_radiant() {
        let b = bgt(300.0, 310.0, 20.0);
        assert_abs_diff_eq!(b, 300.87798534993925, epsilon = 1e-6);
        assert!(b > 300.0 && b < 310.0);
    }

    #[test]
    fn test_bgt_calm_and_negative_wind() {
        assert_eq!(bgt(300.0, 310.0, 0.0), 310.0);
        assert_eq!(bgt(300.0, 310.0, -5.0), 310.0);
    }

    #[test]
    fn test_bgt_equal_temperatures() {
        assert_abs_diff_eq!(bgt(300.0, 300.0, 5.0), 300.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mrt_from_bgt_reference() {
        assert_abs_diff_eq!(
            mrt_from_bgt(298.15, 296.15, 10.0),
            279.80189775556704,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_mrt_from_bgt_inverts_bgt() {
        for (t, mrt, va) in [(300.0, 310.0, 20.0), (290.0, 330.0, 1.5), (305.0, 295.0, 4.0)] {
            let b = bgt(t, mrt, va);
            assert_abs_diff_eq!(mrt_from_bgt(t, b, va), mrt, epsilon = 1e-6);
        }
    }
}
