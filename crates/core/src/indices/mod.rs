//! Thermal comfort indices
//!
//! Every index has a scalar kernel and a `calculate_*` array form that
//! broadcasts its inputs. Temperatures are in kelvin, wind speeds in m/s at
//! 10 m, relative humidity in percent. Results are in kelvin.
//!
//! Validity ranges of the underlying regressions are not enforced.

mod globe;
mod heat;
mod utci;
mod wbgt;
mod wind_chill;

pub use globe::{bgt, calculate_bgt, calculate_mrt_from_bgt, mrt_from_bgt};
pub use heat::{
    apparent_temperature, calculate_apparent_temperature, calculate_heat_index_adjusted,
    calculate_heat_index_simplified, calculate_humidex, calculate_normal_effective_temperature,
    heat_index_adjusted, heat_index_simplified, humidex, normal_effective_temperature,
};
pub use utci::{calculate_utci, utci, Humidity};
pub use wbgt::{calculate_wbgt, calculate_wbgt_simple, calculate_wbt, wbgt, wbgt_simple, wbt};
pub use wind_chill::{calculate_wind_chill, wind_chill};
