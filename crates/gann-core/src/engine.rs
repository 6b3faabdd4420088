//! Level generation.
//!
//! Builds the up/down ladder around the square root of the base value. Rung
//! `l` sits at `(sqrt(base) ± factor * l)^2`, rounded half away from zero to a
//! whole price. A ladder root that would cross below zero is floored at zero,
//! so a long down ladder settles at value 0 instead of reflecting back up.

use tracing::{debug, trace};

use crate::error::GannError;
use crate::levels::{LevelPoint, LevelRecord};
use crate::options::LevelParams;
use crate::summary::{RunResult, RunSummary};

/// Generate the full level table for `params`.
///
/// The run is all-or-nothing: either every rung is produced or an error is
/// returned. No state is kept between calls.
///
/// # Errors
///
/// Returns [`GannError::InvalidInput`] when a parameter is out of range, and
/// [`GannError::Domain`] when a rung's value overflows to infinity.
pub fn generate_levels(params: &LevelParams) -> Result<RunResult, GannError> {
    params.validate()?;

    let base_root = params.base_value.sqrt();
    let mut records = Vec::with_capacity(params.level_count as usize);

    for level in 1..=params.level_count {
        let step = params.factor * f64::from(level);
        let up = ladder_point(base_root + step, params.tolerance)?;
        let down = ladder_point(base_root - step, params.tolerance)?;

        trace!(
            level,
            up_value = up.value,
            up_degree = up.degree,
            down_value = down.value,
            down_degree = down.degree,
            "Level computed"
        );
        records.push(LevelRecord { level, up, down });
    }

    let summary = RunSummary::from_records(&records, params.tolerance);
    debug!(
        base_value = params.base_value,
        factor = params.factor,
        levels = params.level_count,
        tolerance = params.tolerance,
        special_count = summary.special_count,
        average_degree = summary.average_degree,
        "Level table generated"
    );

    Ok(RunResult {
        params: *params,
        records,
        summary,
    })
}

/// Square a ladder root into a price level and derive its wheel position.
fn ladder_point(root: f64, tolerance: f64) -> Result<LevelPoint, GannError> {
    let clamped = root < 0.0;
    let value = root.max(0.0).powi(2).round();
    LevelPoint::from_value(value, tolerance, clamped)
}
