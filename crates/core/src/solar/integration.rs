//! Time-averaged cosine of the solar zenith angle
//!
//! The window `[hour + t_begin, hour + t_end]` is split into
//! `floor((t_end - t_begin) * intervals_per_hour)` equal sub-intervals and
//! each one is integrated with a fixed Gauss-Legendre rule. Order one is the
//! midpoint rule, which is what [`Integration::SubIntervals`] uses.
//!
//! Samples are the unclamped instantaneous cosine with the declination
//! re-evaluated at every node; only the final average is clamped at zero.

use super::calendar::CalendarDate;
use super::zenith::{cos_zenith_at, daylight};
use crate::error::{Error, Result};
use crate::field::{zip_map, Field};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

// ============================================================================
// GAUSS-LEGENDRE TABLES
// ============================================================================

const NODES_1: [f64; 1] = [0.0];
const WEIGHTS_1: [f64; 1] = [2.0];

const NODES_2: [f64; 2] = [-0.5773502691896258, 0.5773502691896258];
const WEIGHTS_2: [f64; 2] = [1.0, 1.0];

const NODES_3: [f64; 3] = [-0.7745966692414834, 0.0, 0.7745966692414834];
const WEIGHTS_3: [f64; 3] = [0.5555555555555556, 0.8888888888888888, 0.5555555555555556];

const NODES_4: [f64; 4] = [
    -0.8611363115940526,
    -0.3399810435848563,
    0.3399810435848563,
    0.8611363115940526,
];
const WEIGHTS_4: [f64; 4] = [
    0.34785484513745385,
    0.6521451548625462,
    0.6521451548625462,
    0.34785484513745385,
];

/// Number of Gauss-Legendre nodes per sub-interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GaussOrder {
    One = 1,
    Two = 2,
    #[default]
    Three = 3,
    Four = 4,
}

impl GaussOrder {
    /// Nodes on `[-1, 1]` and their weights
    #[must_use]
    pub fn rule(self) -> (&'static [f64], &'static [f64]) {
        match self {
            GaussOrder::One => (&NODES_1, &WEIGHTS_1),
            GaussOrder::Two => (&NODES_2, &WEIGHTS_2),
            GaussOrder::Three => (&NODES_3, &WEIGHTS_3),
            GaussOrder::Four => (&NODES_4, &WEIGHTS_4),
        }
    }
}

impl TryFrom<u8> for GaussOrder {
    type Error = Error;

    fn try_from(order: u8) -> Result<Self> {
        match order {
            1 => Ok(GaussOrder::One),
            2 => Ok(GaussOrder::Two),
            3 => Ok(GaussOrder::Three),
            4 => Ok(GaussOrder::Four),
            _ => Err(Error::invalid_parameter(
                "integration_order",
                order,
                "must be in 1..=4",
            )),
        }
    }
}

impl From<GaussOrder> for u8 {
    fn from(order: GaussOrder) -> u8 {
        order as u8
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Quadrature scheme for [`cos_solar_zenith_angle_integrated`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum Integration {
    /// Midpoint rule on `intervals_per_hour` steps per hour
    SubIntervals { intervals_per_hour: u32 },
    /// Composite Gauss-Legendre rule
    GaussLegendre {
        order: GaussOrder,
        intervals_per_hour: u32,
    },
}

impl Default for Integration {
    fn default() -> Self {
        Integration::GaussLegendre {
            order: GaussOrder::default(),
            intervals_per_hour: 1,
        }
    }
}

impl Integration {
    /// Build a scheme from keyword-style optional settings
    ///
    /// An explicit order always selects Gauss-Legendre. Without one the
    /// default order is used and `intervals_per_hour` only refines the
    /// partition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for an order outside `1..=4` or
    /// zero intervals per hour.
    pub fn from_options(
        intervals_per_hour: Option<u32>,
        integration_order: Option<u8>,
    ) -> Result<Self> {
        let order = integration_order.map_or(Ok(GaussOrder::default()), GaussOrder::try_from)?;
        let integration = Integration::GaussLegendre {
            order,
            intervals_per_hour: intervals_per_hour.unwrap_or(1),
        };
        integration.validate()?;
        Ok(integration)
    }

    #[must_use]
    pub fn intervals_per_hour(self) -> u32 {
        match self {
            Integration::SubIntervals { intervals_per_hour }
            | Integration::GaussLegendre {
                intervals_per_hour, ..
            } => intervals_per_hour,
        }
    }

    /// Rule applied inside each sub-interval
    #[must_use]
    pub fn order(self) -> GaussOrder {
        match self {
            Integration::SubIntervals { .. } => GaussOrder::One,
            Integration::GaussLegendre { order, .. } => order,
        }
    }

    fn validate(self) -> Result<()> {
        if self.intervals_per_hour() == 0 {
            return Err(Error::invalid_parameter(
                "intervals_per_hour",
                0,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// QUADRATURE
// ============================================================================

/// A validated partition of the averaging window
#[derive(Debug, Clone, Copy)]
struct Partition {
    t_begin: f64,
    t_end: f64,
    intervals: usize,
    step: f64,
    nodes: &'static [f64],
    weights: &'static [f64],
}

impl Partition {
    fn new(t_begin: f64, t_end: f64, integration: Integration) -> Result<Self> {
        integration.validate()?;
        if !t_begin.is_finite() {
            return Err(Error::invalid_parameter("t_begin", t_begin, "must be finite"));
        }
        if !t_end.is_finite() {
            return Err(Error::invalid_parameter("t_end", t_end, "must be finite"));
        }
        if t_end.partial_cmp(&t_begin) != Some(Ordering::Greater) {
            return Err(Error::invalid_parameter(
                "t_end",
                t_end,
                format!("must be greater than t_begin = {t_begin}"),
            ));
        }

        let intervals = ((t_end - t_begin) * f64::from(integration.intervals_per_hour())) as usize;
        if intervals == 0 {
            return Err(Error::invalid_parameter(
                "intervals_per_hour",
                integration.intervals_per_hour(),
                format!("window of {} h holds no whole sub-interval", t_end - t_begin),
            ));
        }

        let (nodes, weights) = integration.order().rule();
        debug!(
            ?integration,
            intervals, "partitioned zenith angle averaging window"
        );
        Ok(Partition {
            t_begin,
            t_end,
            intervals,
            step: (t_end - t_begin) / intervals as f64,
            nodes,
            weights,
        })
    }

    fn average(&self, lat: f64, lon: f64, julian_day: f64, hour: f64) -> f64 {
        let half = self.step / 2.0;
        let mut total = 0.0;
        for i in 0..self.intervals {
            let mid = self.t_begin + i as f64 * self.step + half;
            for (&node, &weight) in self.nodes.iter().zip(self.weights) {
                let t = hour + mid + half * node;
                total += weight * cos_zenith_at(lat, lon, julian_day, t) * half;
            }
        }
        daylight(total / (self.t_end - self.t_begin))
    }
}

/// Average zenith cosine over `[hour + t_begin, hour + t_end]` hours
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if either bound is not finite, if
/// `t_end <= t_begin`, if the scheme
/// has zero intervals per hour, or if the window is too short to hold one
/// sub-interval.
pub fn cos_solar_zenith_angle_integrated(
    lat: f64,
    lon: f64,
    date: CalendarDate,
    hour: f64,
    t_begin: f64,
    t_end: f64,
    integration: Integration,
) -> Result<f64> {
    let partition = Partition::new(t_begin, t_end, integration)?;
    Ok(partition.average(lat, lon, date.day_of_year(), hour))
}

/// Array form of [`cos_solar_zenith_angle_integrated`]
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for an invalid window or scheme and
/// [`Error::ShapeMismatch`] if the inputs cannot be broadcast together.
pub fn calculate_cos_solar_zenith_angle_integrated(
    lat: &Field,
    lon: &Field,
    date: CalendarDate,
    hour: &Field,
    t_begin: f64,
    t_end: f64,
    integration: Integration,
) -> Result<Field> {
    let partition = Partition::new(t_begin, t_end, integration)?;
    let julian_day = date.day_of_year();
    zip_map([lat, lon, hour], |[lat, lon, h]| {
        partition.average(lat, lon, julian_day, h)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_weights_sum_to_two() {
        for order in [
            GaussOrder::One,
            GaussOrder::Two,
            GaussOrder::Three,
            GaussOrder::Four,
        ] {
            let (nodes, weights) = order.rule();
            assert_eq!(nodes.len(), order as usize);
            assert_abs_diff_eq!(weights.iter().sum::<f64>(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_order_four_integrates_degree_seven_exactly() {
        let (nodes, weights) = GaussOrder::Four.rule();
        let integral: f64 = nodes
            .iter()
            .zip(weights)
            .map(|(&x, &w)| w * (x.powi(6) + x.powi(7)))
            .sum();
        assert_abs_diff_eq!(integral, 2.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_order_from_u8() {
        assert_eq!(GaussOrder::try_from(2).unwrap(), GaussOrder::Two);
        assert!(matches!(
            GaussOrder::try_from(5),
            Err(Error::InvalidParameter {
                name: "integration_order",
                ..
            })
        ));
        assert!(GaussOrder::try_from(0).is_err());
    }

    #[test]
    fn test_from_options() {
        assert_eq!(
            Integration::from_options(None, None).unwrap(),
            Integration::default()
        );
        assert_eq!(
            Integration::from_options(Some(3), None).unwrap(),
            Integration::GaussLegendre {
                order: GaussOrder::Three,
                intervals_per_hour: 3
            }
        );
        assert_eq!(
            Integration::from_options(None, Some(2)).unwrap(),
            Integration::GaussLegendre {
                order: GaussOrder::Two,
                intervals_per_hour: 1
            }
        );
        assert_eq!(
            Integration::from_options(Some(2), Some(4)).unwrap(),
            Integration::GaussLegendre {
                order: GaussOrder::Four,
                intervals_per_hour: 2
            }
        );
        assert!(Integration::from_options(Some(0), None).is_err());
        assert!(Integration::from_options(None, Some(7)).is_err());
    }

    #[test]
    fn test_sub_intervals_is_midpoint_rule() {
        let scheme = Integration::SubIntervals {
            intervals_per_hour: 4,
        };
        assert_eq!(scheme.order(), GaussOrder::One);
        assert_eq!(scheme.intervals_per_hour(), 4);
    }

    #[test]
    fn test_invalid_window() {
        let date = CalendarDate::new(2006, 11, 15).unwrap();
        let default = Integration::default();
        assert!(cos_solar_zenith_angle_integrated(48.0, 2.0, date, 10.0, 3.0, 3.0, default).is_err());
        assert!(cos_solar_zenith_angle_integrated(48.0, 2.0, date, 10.0, 3.0, 1.0, default).is_err());
        assert!(cos_solar_zenith_angle_integrated(48.0, 2.0, date, 10.0, 0.0, 0.5, default).is_err());
        let zero = Integration::SubIntervals {
            intervals_per_hour: 0,
        };
        assert!(cos_solar_zenith_angle_integrated(48.0, 2.0, date, 10.0, 0.0, 3.0, zero).is_err());
    }

    #[test]
    fn test_non_finite_window_is_rejected() {
        let date = CalendarDate::new(2006, 11, 15).unwrap();
        let default = Integration::default();
        for (t_begin, t_end, name) in [
            (0.0, f64::INFINITY, "t_end"),
            (0.0, f64::NAN, "t_end"),
            (f64::NEG_INFINITY, 3.0, "t_begin"),
        ] {
            let err = cos_solar_zenith_angle_integrated(48.0, 2.0, date, 10.0, t_begin, t_end, default)
                .unwrap_err();
            assert!(
                matches!(err, Error::InvalidParameter { name: n, .. } if n == name),
                "unexpected error {err:?} for [{t_begin}, {t_end})"
            );
        }

        let err = calculate_cos_solar_zenith_angle_integrated(
            &Field::scalar(48.0),
            &Field::scalar(2.0),
            date,
            &Field::scalar(10.0),
            0.0,
            f64::INFINITY,
            default,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "t_end", .. }));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Integration::default()).unwrap();
        assert_eq!(
            json,
            r#"{"scheme":"gauss_legendre","order":3,"intervals_per_hour":1}"#
        );
        let back: Integration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Integration::default());
        assert!(serde_json::from_str::<Integration>(
            r#"{"scheme":"gauss_legendre","order":9,"intervals_per_hour":1}"#
        )
        .is_err());
    }
}
