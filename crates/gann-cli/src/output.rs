//! Text formatting for level tables and summaries.

use std::fmt::Write as _;
use std::time::Duration;

use gann_core::{LevelPoint, RunResult, Side};

use crate::ui::style_angle;

const LEVEL_WIDTH: usize = 5;
const VALUE_WIDTH: usize = 12;
const DEGREE_WIDTH: usize = 9;
const ZODIAC_WIDTH: usize = 20;
const TYPE_WIDTH: usize = 8;

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a whole-number price level with thousand separators.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value >= 0.0 && value < 1e19 {
        format_number(value.round() as u64)
    } else {
        format!("{value}")
    }
}

/// Format a degree with two decimals and a degree sign.
#[must_use]
pub fn format_degree(degree: f64) -> String {
    format!("{degree:.2}\u{b0}")
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}\u{b5}s", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

fn push_side(line: &mut String, point: &LevelPoint, color: bool) {
    let kind = format!("{:<TYPE_WIDTH$}", point.angle_type.as_str());
    let kind = if color {
        style_angle(kind, point.angle_type)
            .force_styling(true)
            .to_string()
    } else {
        kind
    };
    let _ = write!(
        line,
        " {:>VALUE_WIDTH$} {:>DEGREE_WIDTH$} {:<ZODIAC_WIDTH$} {kind}",
        format_value(point.value),
        format_degree(point.degree),
        point.zodiac.to_string(),
    );
}

/// Render the level table, one row per record.
#[must_use]
pub fn render_table(result: &RunResult, color: bool) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>LEVEL_WIDTH$}", "Level");
    for prefix in ["Up", "Down"] {
        let _ = write!(
            out,
            " {:>VALUE_WIDTH$} {:>DEGREE_WIDTH$} {:<ZODIAC_WIDTH$} {:<TYPE_WIDTH$}",
            format!("{prefix} Value"),
            format!("{prefix} Deg"),
            format!("{prefix} Zodiac"),
            format!("{prefix} Type"),
        );
    }
    out.push('\n');
    let rule_width = LEVEL_WIDTH + 2 * (VALUE_WIDTH + DEGREE_WIDTH + ZODIAC_WIDTH + TYPE_WIDTH + 4);
    let _ = writeln!(out, "{:-<rule_width$}", "");

    for record in &result.records {
        let mut line = format!("{:>LEVEL_WIDTH$}", record.level);
        for side in [Side::Up, Side::Down] {
            push_side(&mut line, record.side(side), color);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render the summary panel.
#[must_use]
pub fn render_summary(result: &RunResult) -> String {
    let s = &result.summary;
    let mut out = String::new();
    let _ = writeln!(out, "Levels:          {}", s.level_count);
    let _ = writeln!(
        out,
        "Special angles:  {} (cardinal {}, ordinal {}, special {})",
        s.special_count, s.cardinal_count, s.ordinal_count, s.special_angle_count
    );
    let _ = writeln!(out, "Average degree:  {}", format_degree(s.average_degree));
    let _ = writeln!(out, "Value spread:    {}", format_value(s.value_spread));
    let _ = writeln!(out, "Tolerance:       \u{b1}{}", format_degree(s.tolerance));
    if s.clamped_levels > 0 {
        let _ = writeln!(out, "Floored levels:  {}", s.clamped_levels);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gann_core::gann_table;

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(3351), "3,351");
    }

    #[test]
    fn format_value_whole_numbers() {
        assert_eq!(format_value(3351.0), "3,351");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn format_degree_two_decimals() {
        assert_eq!(format_degree(319.62), "319.62\u{b0}");
        assert_eq!(format_degree(0.0), "0.00\u{b0}");
        assert_eq!(format_degree(356.9), "356.90\u{b0}");
    }

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).contains("\u{b5}s"));
        assert!(format_duration(Duration::from_millis(42)).ends_with("ms"));
        assert_eq!(format_duration(Duration::from_secs(2)), "2.000s");
    }

    #[test]
    fn table_has_header_and_rows() {
        let result = gann_table(3338.0, 0.11, 3, 5.0).unwrap();
        let table = render_table(&result, false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 3);
        assert!(lines[0].contains("Up Zodiac"));
        assert!(lines[2].contains("3,351"));
        assert!(lines[2].contains("319.62\u{b0}"));
        assert!(lines[2].contains("Aquarius 19.62\u{b0}"));
        assert!(lines[2].contains("Ordinal"));
        assert!(lines[2].contains("3,325"));
        assert!(lines[3].contains("Cardinal"));
    }

    #[test]
    fn colored_table_keeps_content() {
        let result = gann_table(3338.0, 0.11, 2, 5.0).unwrap();
        let table = render_table(&result, true);
        assert!(table.contains("Ordinal"));
        assert!(table.contains('\u{1b}'));
    }

    #[test]
    fn summary_lists_statistics() {
        let result = gann_table(3338.0, 0.11, 5, 5.0).unwrap();
        let summary = render_summary(&result);
        assert!(summary.contains("Levels:          5"));
        assert!(summary.contains("Special angles:  4"));
        assert!(summary.contains("Average degree:  171.05\u{b0}"));
        assert!(summary.contains("Tolerance:       \u{b1}5.00\u{b0}"));
        assert!(!summary.contains("Floored"));
    }

    #[test]
    fn summary_reports_floored_levels() {
        let result = gann_table(16.0, 1.0, 6, 5.0).unwrap();
        assert!(render_summary(&result).contains("Floored levels:  2"));
    }
}
