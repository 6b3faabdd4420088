//! # gann-core
//!
//! Core library for GannTable-rs.
//! Builds the GANN square-root price ladder, places every level on the 360°
//! wheel, labels it with a zodiac position, and classifies it against the
//! Cardinal, Ordinal, and Special angle sets.

pub mod angles;
pub(crate) mod common;
pub mod constants;
pub mod degree;
pub mod engine;
pub mod error;
pub mod levels;
pub mod options;
pub mod summary;
pub mod zodiac;

// Re-exports
pub use angles::{circular_distance, classify, AngleType};
pub use constants::{
    exit_codes, CARDINAL_ANGLES, DEFAULT_BASE_VALUE, DEFAULT_FACTOR, DEFAULT_LEVEL_COUNT,
    DEFAULT_TOLERANCE, FULL_CIRCLE, ORDINAL_ANGLES, SPECIAL_ANGLES,
};
pub use degree::degree_of;
pub use engine::generate_levels;
pub use error::GannError;
pub use levels::{LevelPoint, LevelRecord, Side};
pub use options::LevelParams;
pub use summary::{RunResult, RunSummary};
pub use zodiac::{zodiac_position, ZodiacPosition, ZodiacSign};

/// Compute a level table from the four scalar inputs.
///
/// This is a convenience wrapper around [`generate_levels`].
///
/// # Example
/// ```
/// let table = gann_core::gann_table(3338.0, 0.11, 1, 5.0).unwrap();
/// assert_eq!(table.records[0].up.value, 3351.0);
/// ```
pub fn gann_table(
    base_value: f64,
    factor: f64,
    level_count: u32,
    tolerance: f64,
) -> Result<RunResult, GannError> {
    generate_levels(&LevelParams::new(
        base_value,
        factor,
        level_count,
        tolerance,
    ))
}
