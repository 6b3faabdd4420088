//! Text chart of up/down degrees per level.
//!
//! Each level is one row on a 0..360° axis. `U` marks the up degree, `D` the
//! down degree, and `*` a cell holding both. Cardinal angles are drawn as `|`
//! and Ordinal angles as `:` behind the markers.

use gann_core::{RunResult, Side, CARDINAL_ANGLES, FULL_CIRCLE, ORDINAL_ANGLES};

/// Default number of cells across the 360° axis (5° per cell).
pub const DEFAULT_CHART_WIDTH: usize = 72;

const MIN_CHART_WIDTH: usize = 24;
const ROW_PREFIX: usize = 6;

/// Cell index for a degree on an axis `width` cells wide.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn cell_for(degree: f64, width: usize) -> usize {
    let on_wheel = degree.rem_euclid(FULL_CIRCLE);
    ((on_wheel / FULL_CIRCLE * width as f64).floor() as usize).min(width - 1)
}

fn marker(side: Side) -> char {
    match side {
        Side::Up => 'U',
        Side::Down => 'D',
    }
}

fn reference_row(width: usize) -> Vec<char> {
    let mut cells = vec![' '; width];
    for &angle in &ORDINAL_ANGLES {
        cells[cell_for(angle, width)] = ':';
    }
    for &angle in &CARDINAL_ANGLES {
        cells[cell_for(angle, width)] = '|';
    }
    cells
}

/// Render the degree chart for a run.
#[must_use]
pub fn render_degree_chart(result: &RunResult, width: usize) -> String {
    let width = width.max(MIN_CHART_WIDTH);
    let background = reference_row(width);
    let mut out = String::new();

    for (level, up, down) in result.degree_series() {
        let mut cells = background.clone();
        for (side, degree) in [(Side::Up, up), (Side::Down, down)] {
            let cell = &mut cells[cell_for(degree, width)];
            *cell = if matches!(*cell, 'U' | 'D' | '*') {
                '*'
            } else {
                marker(side)
            };
        }
        let row: String = cells.into_iter().collect();
        out.push_str(&format!("{level:>4} |{row}|\n"));
    }

    out.push_str(&format!("{:>ROW_PREFIX$}{}+\n", "+", "-".repeat(width)));
    out.push_str(&axis_labels(width));
    out.push('\n');
    out
}

fn axis_labels(width: usize) -> String {
    let mut line = vec![' '; ROW_PREFIX + width + 4];
    let labels = [(0.0, "0"), (90.0, "90"), (180.0, "180"), (270.0, "270")];
    for (angle, label) in labels {
        let start = ROW_PREFIX + cell_for(angle, width);
        for (i, ch) in label.chars().enumerate() {
            line[start + i] = ch;
        }
    }
    let end = ROW_PREFIX + width;
    for (i, ch) in "360".chars().enumerate() {
        line[end + i] = ch;
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gann_core::gann_table;

    fn row_cells(row: &str) -> Vec<char> {
        let start = row.find('|').unwrap() + 1;
        row[start..].chars().collect()
    }

    #[test]
    fn cell_positions() {
        assert_eq!(cell_for(0.0, 72), 0);
        assert_eq!(cell_for(90.0, 72), 18);
        assert_eq!(cell_for(359.99, 72), 71);
        assert_eq!(cell_for(360.0, 72), 0);
    }

    #[test]
    fn markers_and_reference_lines() {
        let result = gann_table(3338.0, 0.11, 1, 5.0).unwrap();
        let chart = render_degree_chart(&result, DEFAULT_CHART_WIDTH);
        let first = chart.lines().next().unwrap();
        let cells = row_cells(first);

        // 319.62 -> cell 63, 238.61 -> cell 47
        assert_eq!(cells[63], 'U');
        assert_eq!(cells[47], 'D');
        assert_eq!(cells[18], '|');
        assert_eq!(cells[9], ':');
        assert_eq!(cells[0], '|');
    }

    #[test]
    fn shared_cell_uses_star() {
        let result = gann_table(3338.0, 0.0, 2, 5.0).unwrap();
        let chart = render_degree_chart(&result, DEFAULT_CHART_WIDTH);
        for line in chart.lines().take(2) {
            assert!(line.contains('*'));
            assert!(!line.contains('U'));
        }
    }

    #[test]
    fn one_row_per_level_plus_axis() {
        let result = gann_table(3338.0, 0.11, 7, 5.0).unwrap();
        let chart = render_degree_chart(&result, 36);
        assert_eq!(chart.lines().count(), 7 + 2);
        assert!(chart.lines().last().unwrap().ends_with("360"));
    }

    #[test]
    fn narrow_width_is_raised() {
        let result = gann_table(3338.0, 0.11, 1, 5.0).unwrap();
        let chart = render_degree_chart(&result, 1);
        let first = chart.lines().next().unwrap();
        assert_eq!(row_cells(first).len(), MIN_CHART_WIDTH + 1);
    }
}
