//! Solar geometry
//!
//! Declination, equation-of-time correction and the cosine of the solar
//! zenith angle, either instantaneous or averaged over a time window.
//! Angles are in degrees and hours are UTC.

mod calendar;
mod declination;
mod integration;
mod zenith;

pub use calendar::{julian_date, CalendarDate};
pub use declination::{calculate_solar_declination_angle, solar_declination_angle};
pub use integration::{
    calculate_cos_solar_zenith_angle_integrated, cos_solar_zenith_angle_integrated, GaussOrder,
    Integration,
};
pub use zenith::{
    calculate_cos_solar_zenith_angle, calculate_cos_solar_zenith_angle_allvalues,
    calculate_cos_solar_zenith_angle_allvalues_for_days, calculate_cos_solar_zenith_angle_for_days,
    cos_solar_zenith_angle, cos_solar_zenith_angle_allvalues,
};
