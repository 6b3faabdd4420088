//! Run parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_VALUE, DEFAULT_FACTOR, DEFAULT_LEVEL_COUNT, DEFAULT_TOLERANCE,
};
use crate::error::GannError;

/// The four scalar inputs of a level run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelParams {
    /// Base price the ladder is built around.
    pub base_value: f64,
    /// Step added to (up) or subtracted from (down) the base square root per level.
    pub factor: f64,
    /// Number of ladder rungs.
    pub level_count: u32,
    /// Classification tolerance in degrees.
    pub tolerance: f64,
}

impl Default for LevelParams {
    fn default() -> Self {
        Self {
            base_value: DEFAULT_BASE_VALUE,
            factor: DEFAULT_FACTOR,
            level_count: DEFAULT_LEVEL_COUNT,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl LevelParams {
    /// Create parameters for a run.
    #[must_use]
    pub fn new(base_value: f64, factor: f64, level_count: u32, tolerance: f64) -> Self {
        Self {
            base_value,
            factor,
            level_count,
            tolerance,
        }
    }

    /// Check every parameter against its valid range.
    ///
    /// `factor` may be zero or negative; only non-finite values are rejected.
    pub fn validate(&self) -> Result<(), GannError> {
        if !self.base_value.is_finite() || self.base_value <= 0.0 {
            return Err(GannError::InvalidInput(format!(
                "base_value must be a positive number, got {}",
                self.base_value
            )));
        }
        if !self.factor.is_finite() {
            return Err(GannError::InvalidInput(format!(
                "factor must be finite, got {}",
                self.factor
            )));
        }
        if self.level_count < 1 {
            return Err(GannError::InvalidInput(
                "level_count must be at least 1".into(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(GannError::InvalidInput(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
