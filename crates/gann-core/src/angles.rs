//! Angle classification against the Cardinal, Ordinal, and Special sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{CARDINAL_ANGLES, FULL_CIRCLE, ORDINAL_ANGLES, SPECIAL_ANGLES};

/// Classification tag for a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleType {
    Cardinal,
    Ordinal,
    Special,
    Regular,
}

impl AngleType {
    /// Reference sets in precedence order.
    const PRECEDENCE: [(AngleType, &'static [f64]); 3] = [
        (AngleType::Cardinal, &CARDINAL_ANGLES),
        (AngleType::Ordinal, &ORDINAL_ANGLES),
        (AngleType::Special, &SPECIAL_ANGLES),
    ];

    /// Whether the tag marks a significant angle (anything but Regular).
    #[must_use]
    pub fn is_notable(self) -> bool {
        self != Self::Regular
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Ordinal => "Ordinal",
            Self::Special => "Special",
            Self::Regular => "Regular",
        }
    }

    /// Reference angles for this tag; empty for Regular.
    #[must_use]
    pub fn targets(self) -> &'static [f64] {
        match self {
            Self::Cardinal => &CARDINAL_ANGLES,
            Self::Ordinal => &ORDINAL_ANGLES,
            Self::Special => &SPECIAL_ANGLES,
            Self::Regular => &[],
        }
    }
}

impl fmt::Display for AngleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shortest distance between two angles around the circle.
#[must_use]
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(FULL_CIRCLE);
    diff.min(FULL_CIRCLE - diff)
}

/// Classify `degree` with the given tolerance.
///
/// Cardinal is checked first, then Ordinal, then Special; the first set with
/// a target within `tolerance` wins. Identical inputs always yield the same tag.
#[must_use]
pub fn classify(degree: f64, tolerance: f64) -> AngleType {
    AngleType::PRECEDENCE
        .iter()
        .find(|(_, targets)| {
            targets
                .iter()
                .any(|&target| circular_distance(degree, target) <= tolerance)
        })
        .map_or(AngleType::Regular, |(kind, _)| *kind)
}
