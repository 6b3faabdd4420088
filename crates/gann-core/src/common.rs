//! Shared numeric helpers.

use crate::constants::DEGREE_DECIMALS;

/// Round half away from zero to `decimals` places.
#[must_use]
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Round to the precision kept for degrees.
#[must_use]
pub(crate) fn round_degree(value: f64) -> f64 {
    round_to(value, DEGREE_DECIMALS)
}
