//! Calendar dates and day-of-year arithmetic

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A validated Gregorian calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarDate")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Deserialize)]
struct RawCalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = Error;

    fn try_from(raw: RawCalendarDate) -> Result<Self> {
        CalendarDate::new(raw.year, raw.month, raw.day)
    }
}

impl CalendarDate {
    /// Create a date, checking the month and the day against the month length
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a month outside `1..=12` or a
    /// day outside the month (29 February only in leap years).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_parameter("month", month, "must be in 1..=12"));
        }
        let days = days_in_month(year, month);
        if !(1..=days).contains(&day) {
            return Err(Error::invalid_parameter(
                "day",
                day,
                format!("must be in 1..={days} for {year}-{month:02}"),
            ));
        }
        Ok(CalendarDate { year, month, day })
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.month
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.day
    }

    /// Julian date of this day, see [`julian_date`]
    #[must_use]
    pub fn julian_date(self) -> f64 {
        julian_date(f64::from(self.day), f64::from(self.month), f64::from(self.year))
    }

    /// Day of the year counted from 1 on 1 January
    ///
    /// Computed as a difference of Julian dates in real arithmetic, so the
    /// value carries the fractional residue of the expression rather than
    /// being a whole number. The solar formulas are fitted against this value.
    #[must_use]
    pub fn day_of_year(self) -> f64 {
        self.julian_date() - julian_date(1.0, 1.0, f64::from(self.year)) + 1.0
    }
}

/// Fliegel and Van Flandern Julian date, evaluated in real arithmetic
#[must_use]
pub fn julian_date(day: f64, month: f64, year: f64) -> f64 {
    let m = (month - 14.0) / 12.0;
    day - 32075.0 + 1461.0 * (year + 4800.0 + m) / 4.0
        + 367.0 * (month - 2.0 - m * 12.0) / 12.0
        - 3.0 * ((year + 4900.0 + m) / 100.0) / 4.0
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
