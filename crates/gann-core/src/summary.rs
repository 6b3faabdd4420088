//! Run results and aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::angles::AngleType;
use crate::levels::LevelRecord;
use crate::options::LevelParams;

/// Aggregate statistics over every record of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub level_count: u32,
    pub tolerance: f64,
    /// Non-Regular classifications across both series (at most `2 * level_count`).
    pub special_count: usize,
    /// Mean of all up and down degrees.
    pub average_degree: f64,
    pub cardinal_count: usize,
    pub ordinal_count: usize,
    /// Matches against the Special angle set only.
    pub special_angle_count: usize,
    /// Highest minus lowest value across both ladders.
    pub value_spread: f64,
    /// Rungs where either ladder root was floored at zero.
    pub clamped_levels: usize,
}

impl RunSummary {
    /// Compute statistics in a single pass over `records`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_records(records: &[LevelRecord], tolerance: f64) -> Self {
        let mut summary = Self {
            level_count: u32::try_from(records.len()).unwrap_or(u32::MAX),
            tolerance,
            special_count: 0,
            average_degree: 0.0,
            cardinal_count: 0,
            ordinal_count: 0,
            special_angle_count: 0,
            value_spread: 0.0,
            clamped_levels: 0,
        };
        if records.is_empty() {
            return summary;
        }

        let mut degree_total = 0.0;
        let mut max_value = f64::NEG_INFINITY;
        let mut min_value = f64::INFINITY;

        for record in records {
            for point in [&record.up, &record.down] {
                max_value = max_value.max(point.value);
                min_value = min_value.min(point.value);
                match point.angle_type {
                    AngleType::Cardinal => summary.cardinal_count += 1,
                    AngleType::Ordinal => summary.ordinal_count += 1,
                    AngleType::Special => summary.special_angle_count += 1,
                    AngleType::Regular => {}
                }
            }
            summary.special_count += record.notable_count();
            degree_total += record.degree_sum();
            if record.up.clamped || record.down.clamped {
                summary.clamped_levels += 1;
            }
        }

        summary.average_degree = degree_total / (records.len() as f64 * 2.0);
        summary.value_spread = max_value - min_value;
        summary
    }
}

/// Complete output of one run: the parameters, every rung, and the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub params: LevelParams,
    /// Records ordered by level, `records[i].level == i + 1`.
    pub records: Vec<LevelRecord>,
    pub summary: RunSummary,
}

impl RunResult {
    /// `(level, up_degree, down_degree)` triples for plotting.
    #[must_use]
    pub fn degree_series(&self) -> Vec<(u32, f64, f64)> {
        self.records
            .iter()
            .map(|r| (r.level, r.up.degree, r.down.degree))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
