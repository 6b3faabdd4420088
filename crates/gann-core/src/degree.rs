//! Degree derivation: the fractional part of a square root scaled to the wheel.

use crate::common::round_degree;
use crate::constants::FULL_CIRCLE;
use crate::error::GannError;

/// Angular position of `value` on the 360° wheel.
///
/// Takes the fractional part of `sqrt(value)`, scales it to a full circle and
/// rounds to two decimals. A result that rounds up to 360.00 folds to 0.00,
/// so the returned degree always lies in `[0, 360)`.
///
/// # Errors
///
/// Returns [`GannError::Domain`] when `value` is negative or not finite.
pub fn degree_of(value: f64) -> Result<f64, GannError> {
    if !value.is_finite() || value < 0.0 {
        return Err(GannError::Domain(value));
    }
    let root = value.sqrt();
    let fraction = root - root.floor();
    Ok(round_degree(fraction * FULL_CIRCLE) % FULL_CIRCLE)
}
