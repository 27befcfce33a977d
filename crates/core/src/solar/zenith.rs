//! Instantaneous cosine of the solar zenith angle

use super::calendar::CalendarDate;
use super::declination::solar_declination_angle;
use crate::error::Result;
use crate::field::{zip_map, Field};

/// Unclamped zenith cosine for a fractional day of year
///
/// Longitude is reduced modulo 360 before it enters the hour angle.
pub(crate) fn cos_zenith_at(lat: f64, lon: f64, julian_day: f64, hour: f64) -> f64 {
    let (declination, time_correction) = solar_declination_angle(julian_day, hour);
    let hour_angle = (hour - 12.0) * 15.0 + lon.rem_euclid(360.0) + time_correction;

    let (sin_lat, cos_lat) = lat.to_radians().sin_cos();
    let (sin_dec, cos_dec) = declination.to_radians().sin_cos();
    sin_dec * sin_lat + cos_dec * cos_lat * hour_angle.to_radians().cos()
}

/// Clamp a zenith cosine to the daylight range, keeping NaN
pub(crate) fn daylight(cossza: f64) -> f64 {
    if cossza < 0.0 {
        0.0
    } else {
        cossza
    }
}

/// Cosine of the solar zenith angle, negative when the sun is below the
/// horizon
///
/// `lat` and `lon` are in degrees, `hour` is the UTC hour of `date`.
#[must_use]
pub fn cos_solar_zenith_angle_allvalues(lat: f64, lon: f64, date: CalendarDate, hour: f64) -> f64 {
    cos_zenith_at(lat, lon, date.day_of_year(), hour)
}

/// Cosine of the solar zenith angle, zero at night
#[must_use]
pub fn cos_solar_zenith_angle(lat: f64, lon: f64, date: CalendarDate, hour: f64) -> f64 {
    daylight(cos_solar_zenith_angle_allvalues(lat, lon, date, hour))
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_cos_solar_zenith_angle(
    lat: &Field,
    lon: &Field,
    date: CalendarDate,
    hour: &Field,
) -> Result<Field> {
    let julian_day = date.day_of_year();
    zip_map([lat, lon, hour], |[lat, lon, h]| {
        daylight(cos_zenith_at(lat, lon, julian_day, h))
    })
}

/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_cos_solar_zenith_angle_allvalues(
    lat: &Field,
    lon: &Field,
    date: CalendarDate,
    hour: &Field,
) -> Result<Field> {
    let julian_day = date.day_of_year();
    zip_map([lat, lon, hour], |[lat, lon, h]| {
        cos_zenith_at(lat, lon, julian_day, h)
    })
}

/// Clamped zenith cosine with the day of year as a broadcast input
///
/// `day_of_year` takes values from [`CalendarDate::day_of_year`], so samples
/// on different dates can share one call.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_cos_solar_zenith_angle_for_days(
    lat: &Field,
    lon: &Field,
    day_of_year: &Field,
    hour: &Field,
) -> Result<Field> {
    zip_map([lat, lon, day_of_year, hour], |[lat, lon, jd, h]| {
        daylight(cos_zenith_at(lat, lon, jd, h))
    })
}

/// Unclamped counterpart of [`calculate_cos_solar_zenith_angle_for_days`]
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// inputs cannot be broadcast together.
pub fn calculate_cos_solar_zenith_angle_allvalues_for_days(
    lat: &Field,
    lon: &Field,
    day_of_year: &Field,
    hour: &Field,
) -> Result<Field> {
    zip_map([lat, lon, day_of_year, hour], |[lat, lon, jd, h]| {
        cos_zenith_at(lat, lon, jd, h)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn london() -> CalendarDate {
        CalendarDate::new(2021, 6, 4).unwrap()
    }

    #[test]
    fn test_paris_reference() {
        let date = CalendarDate::new(2006, 11, 15).unwrap();
        assert_abs_diff_eq!(
            cos_solar_zenith_angle(48.81667, 2.28972, date, 10.58333),
            0.360303587797559,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_london_noon_reference() {
        assert_abs_diff_eq!(
            cos_solar_zenith_angle(51.0, 0.0, london(), 12.0),
            0.8799471697555967,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_night_values() {
        assert_abs_diff_eq!(
            cos_solar_zenith_angle_allvalues(51.0, 0.0, london(), 1.0),
            -0.26157855,
            epsilon = 1e-6
        );
        assert_eq!(cos_solar_zenith_angle(51.0, 0.0, london(), 1.0), 0.0);
    }

    #[test]
    fn test_nan_is_not_clamped() {
        assert!(cos_solar_zenith_angle(f64::NAN, 0.0, london(), 12.0).is_nan());
    }

    #[test]
    fn test_non_finite_hour_gives_nan() {
        assert!(cos_solar_zenith_angle_allvalues(51.0, 0.0, london(), f64::INFINITY).is_nan());
        assert!(cos_solar_zenith_angle(51.0, 0.0, london(), f64::NEG_INFINITY).is_nan());
        let c = calculate_cos_solar_zenith_angle_allvalues(
            &Field::scalar(51.0),
            &Field::scalar(0.0),
            london(),
            &Field::from([12.0, f64::INFINITY, 1e14]),
        )
        .unwrap();
        assert_abs_diff_eq!(c.as_slice()[0], 0.8799471697555967, epsilon = 1e-9);
        assert!(c.as_slice()[1].is_nan());
        assert!((-1.0..=1.0).contains(&c.as_slice()[2]));
    }

    #[test]
    fn test_longitude_reduction() {
        let base = cos_solar_zenith_angle_allvalues(51.0, -30.0, london(), 9.0);
        for lon in [330.0, 690.0, -390.0] {
            assert_abs_diff_eq!(
                cos_solar_zenith_angle_allvalues(51.0, lon, london(), 9.0),
                base,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_array_over_hours() {
        let hours = Field::from([1.0, 12.0]);
        let c = calculate_cos_solar_zenith_angle(
            &Field::scalar(51.0),
            &Field::scalar(0.0),
            london(),
            &hours,
        )
        .unwrap();
        assert_eq!(c.as_slice()[0], 0.0);
        assert_abs_diff_eq!(c.as_slice()[1], 0.8799471697555967, epsilon = 1e-9);

        let raw = calculate_cos_solar_zenith_angle_allvalues(
            &Field::scalar(51.0),
            &Field::scalar(0.0),
            london(),
            &hours,
        )
        .unwrap();
        assert!(raw.as_slice()[0] < 0.0);
    }

    #[test]
    fn test_day_of_year_field_matches_dates() {
        let paris = CalendarDate::new(2006, 11, 15).unwrap();
        let days = Field::from([london().day_of_year(), paris.day_of_year()]);
        let lat = Field::from([51.0, 48.81667]);
        let lon = Field::from([0.0, 2.28972]);
        let hour = Field::from([12.0, 10.58333]);

        let c = calculate_cos_solar_zenith_angle_for_days(&lat, &lon, &days, &hour).unwrap();
        assert_abs_diff_eq!(c.as_slice()[0], 0.8799471697555967, epsilon = 1e-9);
        assert_abs_diff_eq!(c.as_slice()[1], 0.360303587797559, epsilon = 1e-9);

        let night = calculate_cos_solar_zenith_angle_allvalues_for_days(
            &Field::scalar(51.0),
            &Field::scalar(0.0),
            &days,
            &Field::scalar(1.0),
        )
        .unwrap();
        assert_abs_diff_eq!(night.as_slice()[0], -0.26157855, epsilon = 1e-6);
        assert_eq!(
            night.as_slice()[1],
            cos_solar_zenith_angle_allvalues(51.0, 0.0, paris, 1.0)
        );
    }
}
