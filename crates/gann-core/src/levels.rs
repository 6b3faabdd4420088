//! Per-level records of the up/down ladder.

use serde::{Deserialize, Serialize};

use crate::angles::{classify, AngleType};
use crate::degree::degree_of;
use crate::error::GannError;
use crate::zodiac::{zodiac_position, ZodiacPosition};

/// Which side of the ladder a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Up,
    Down,
}

/// One side (up or down) of a ladder rung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelPoint {
    /// Price level, rounded to a whole number.
    pub value: f64,
    /// Angular position in `[0, 360)`.
    pub degree: f64,
    pub zodiac: ZodiacPosition,
    pub angle_type: AngleType,
    /// Whether the ladder root was floored at zero for this point.
    pub clamped: bool,
}

impl LevelPoint {
    /// Derive degree, zodiac label and classification for a price value.
    pub fn from_value(value: f64, tolerance: f64, clamped: bool) -> Result<Self, GannError> {
        let degree = degree_of(value)?;
        Ok(Self {
            value,
            degree,
            zodiac: zodiac_position(degree),
            angle_type: classify(degree, tolerance),
            clamped,
        })
    }
}

/// One rung of the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    /// Rung index, starting at 1.
    pub level: u32,
    pub up: LevelPoint,
    pub down: LevelPoint,
}

impl LevelRecord {
    #[must_use]
    pub fn side(&self, side: Side) -> &LevelPoint {
        match side {
            Side::Up => &self.up,
            Side::Down => &self.down,
        }
    }

    /// Number of non-Regular classifications on this rung (0, 1 or 2).
    #[must_use]
    pub fn notable_count(&self) -> usize {
        usize::from(self.up.angle_type.is_notable())
            + usize::from(self.down.angle_type.is_notable())
    }

    /// Sum of the up and down degrees.
    #[must_use]
    pub fn degree_sum(&self) -> f64 {
        self.up.degree + self.down.degree
    }
}
