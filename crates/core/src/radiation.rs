//! Mean radiant temperature from surface radiation fluxes
//!
//! All fluxes are rates in W/m². Accumulated fields (J/m² over an hour) must
//! be divided by the accumulation period before they are passed in.

use crate::error::Result;
use crate::field::{zip_map, Field};

/// Stefan-Boltzmann constant (W/m²/K⁴)
const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Shortwave absorption coefficient of the human body
const SHORTWAVE_ABSORPTION: f64 = 0.7;

/// Longwave emissivity of the human body
const LONGWAVE_EMISSIVITY: f64 = 0.97;

/// Surface radiation fluxes of one sample (W/m²)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationFluxes {
    /// Surface solar radiation downwards
    pub ssrd: f64,
    /// Surface net solar radiation
    pub ssr: f64,
    /// Total sky direct solar radiation at the surface
    pub fdir: f64,
    /// Surface thermal radiation downwards
    pub strd: f64,
    /// Surface net thermal radiation
    pub strr: f64,
}

/// Projected area factor of a standing person for a solar elevation
fn projected_area_factor(cossza: f64) -> f64 {
    let gamma = cossza.asin().to_degrees();
    0.308 * (gamma * 0.998 - gamma * gamma / 50000.0).to_radians().cos()
}

/// Mean radiant temperature (K)
///
/// Half of the body sees the sky and half the ground. Diffuse and reflected
/// shortwave plus the direct beam `dsrp` on the projected area are absorbed
/// with coefficient 0.7; the longwave streams are taken at emissivity 0.97.
#[must_use]
pub fn mean_radiant_temperature(fluxes: RadiationFluxes, cossza: f64, dsrp: f64) -> f64 {
    let RadiationFluxes {
        ssrd,
        ssr,
        fdir,
        strd,
        strr,
    } = fluxes;
    let diffuse = ssrd - fdir;
    let reflected = ssrd - ssr;
    let upward_longwave = strd - strr;

    let shortwave = 0.5 * diffuse + 0.5 * reflected + projected_area_factor(cossza) * dsrp;
    let absorbed = 0.5 * strd
        + 0.5 * upward_longwave
        + SHORTWAVE_ABSORPTION / LONGWAVE_EMISSIVITY * shortwave;
    (absorbed / STEFAN_BOLTZMANN).powf(0.25)
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_mean_radiant_temperature(
    ssrd: &Field,
    ssr: &Field,
    fdir: &Field,
    strd: &Field,
    strr: &Field,
    cossza: &Field,
    dsrp: &Field,
) -> Result<Field> {
    zip_map(
        [ssrd, ssr, fdir, strd, strr, cossza, dsrp],
        |[ssrd, ssr, fdir, strd, strr, cossza, dsrp]| {
            let fluxes = RadiationFluxes {
                ssrd,
                ssr,
                fdir,
                strd,
                strr,
            };
            mean_radiant_temperature(fluxes, cossza, dsrp)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wind::approximate_dsrp;
    use approx::assert_abs_diff_eq;

    fn hourly(accumulated: f64) -> f64 {
        accumulated / 3600.0
    }

    #[test]
    fn test_reference_value() {
        let fluxes = RadiationFluxes {
            ssrd: hourly(60000.0),
            ssr: hourly(471818.0),
            fdir: hourly(374150.0),
            strd: hourly(1061213.0),
            strr: hourly(-182697.0),
        };
        let cossza = 0.4 / 3600.0;
        let dsrp = approximate_dsrp(374150.0, 0.4) / 3600.0;
        assert_abs_diff_eq!(
            mean_radiant_temperature(fluxes, cossza, dsrp),
            270.85099122940704,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_pure_longwave_is_black_body() {
        let flux = STEFAN_BOLTZMANN * 300f64.powi(4);
        let fluxes = RadiationFluxes {
            ssrd: 0.0,
            ssr: 0.0,
            fdir: 0.0,
            strd: flux,
            strr: 0.0,
        };
        assert_abs_diff_eq!(
            mean_radiant_temperature(fluxes, 0.0, 0.0),
            300.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_projected_area_factor_overhead_sun() {
        let at_zenith = projected_area_factor(1.0);
        let low_sun = projected_area_factor(0.1);
        assert!(at_zenith < low_sun);
        assert_abs_diff_eq!(projected_area_factor(0.0), 0.308, epsilon = 1e-12);
    }

    #[test]
    fn test_array_broadcasts_scalar_fluxes() {
        let zero = Field::scalar(0.0);
        let strd = Field::from([300.0, 400.0]);
        let mrt =
            calculate_mean_radiant_temperature(&zero, &zero, &zero, &strd, &zero, &zero, &zero)
                .unwrap();
        assert_eq!(mrt.len(), 2);
        assert!(mrt.as_slice()[0] < mrt.as_slice()[1]);
    }
}
