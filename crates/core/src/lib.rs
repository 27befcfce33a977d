//! Thermal Comfort Core Library
//!
//! Human thermal comfort indices and the solar geometry they depend on,
//! evaluated element-wise over broadcastable arrays of meteorological fields.
//!
//! ## Layout
//!
//! - [`field`] - `Field` arrays and the broadcasting rule
//! - [`units`] - temperature conversions
//! - [`psychrometrics`] - vapour pressure, relative humidity, dew point, wet bulb
//! - [`wind`] - wind profile scaling and direct-beam radiation
//! - [`solar`] - declination, zenith angle, time-integrated zenith angle
//! - [`radiation`] - mean radiant temperature
//! - [`indices`] - UTCI, WBGT, heat index, humidex, wind chill, ...
//!
//! Each formula is a plain `f64` kernel plus a `calculate_*` function over
//! [`Field`]s. The array functions fail only on incompatible shapes; out of
//! range physical inputs turn into NaN in the affected elements.
//!
//! ```
//! use thermal_comfort_core::{calculate_utci, Field, Humidity};
//!
//! let t = Field::from([300.0, 305.0]);
//! let e = Field::scalar(20.0);
//! let utci = calculate_utci(&t, &Field::scalar(2.0), &t, Humidity::VapourPressure(&e)).unwrap();
//! assert_eq!(utci.len(), 2);
//! ```

pub mod error;
pub mod field;
pub mod indices;
pub mod psychrometrics;
pub mod radiation;
pub mod solar;
pub mod units;
pub mod wind;

pub use error::{Error, Result};
pub use field::{Field, Shape};

pub use indices::{
    calculate_apparent_temperature, calculate_bgt, calculate_heat_index_adjusted,
    calculate_heat_index_simplified, calculate_humidex, calculate_mrt_from_bgt,
    calculate_normal_effective_temperature, calculate_utci, calculate_wbgt,
    calculate_wbgt_simple, calculate_wbt, calculate_wind_chill, Humidity,
};
pub use psychrometrics::{
    calculate_dew_point_from_relative_humidity, calculate_nonsaturation_vapour_pressure,
    calculate_relative_humidity_percent, calculate_saturation_vapour_pressure,
    calculate_saturation_vapour_pressure_multiphase, calculate_vapour_pressure_from_dew_point,
    calculate_wet_bulb_temperature_psychrometric, calculate_wet_bulb_temperature_psychrometric_at,
    Phase, STANDARD_PRESSURE_HPA,
};
pub use radiation::{calculate_mean_radiant_temperature, RadiationFluxes};
pub use solar::{
    calculate_cos_solar_zenith_angle, calculate_cos_solar_zenith_angle_allvalues,
    calculate_cos_solar_zenith_angle_allvalues_for_days, calculate_cos_solar_zenith_angle_for_days,
    calculate_cos_solar_zenith_angle_integrated, calculate_solar_declination_angle,
    CalendarDate, GaussOrder, Integration,
};
pub use units::{celsius_to_kelvin, kelvin_to_celsius};
pub use wind::{calculate_approximate_dsrp, calculate_scale_windspeed};
