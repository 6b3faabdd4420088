//! CSV and JSON export of a run.
//!
//! Export always receives the `RunResult` to write; nothing is cached between
//! runs.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use gann_core::{LevelRecord, RunResult};

const EXPORT_PREFIX: &str = "gann_table";

/// Error type for export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat row in the exported table.
#[derive(Debug, Serialize)]
struct ExportRow {
    level: u32,
    up_value: f64,
    up_degree: f64,
    up_zodiac: String,
    up_type: &'static str,
    down_value: f64,
    down_degree: f64,
    down_zodiac: String,
    down_type: &'static str,
}

impl From<&LevelRecord> for ExportRow {
    fn from(record: &LevelRecord) -> Self {
        Self {
            level: record.level,
            up_value: record.up.value,
            up_degree: record.up.degree,
            up_zodiac: record.up.zodiac.to_string(),
            up_type: record.up.angle_type.as_str(),
            down_value: record.down.value,
            down_degree: record.down.degree,
            down_zodiac: record.down.zodiac.to_string(),
            down_type: record.down.angle_type.as_str(),
        }
    }
}

/// Write the level table as CSV, header first.
pub fn write_csv<W: Write>(writer: W, result: &RunResult) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in &result.records {
        csv_writer.serialize(ExportRow::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the level table as CSV to `path`.
pub fn export_csv(path: &Path, result: &RunResult) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), result)?;
    tracing::info!(path = %path.display(), rows = result.records.len(), "CSV exported");
    Ok(())
}

/// Default export file name stamped with `now`, e.g. `gann_table_20250101_093000.csv`.
#[must_use]
pub fn timestamped_filename<Tz: TimeZone>(now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!(
        "{EXPORT_PREFIX}_{}.csv",
        now.format("%Y%m%d_%H%M%S")
    ))
}

/// Render the whole run (parameters, records, summary) as JSON.
pub fn to_json(result: &RunResult, pretty: bool) -> Result<String, ExportError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gann_core::gann_table;
    use tempfile::TempDir;

    fn sample() -> RunResult {
        gann_table(3338.0, 0.11, 2, 5.0).unwrap()
    }

    #[test]
    fn csv_header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            concat!(
                "level,up_value,up_degree,up_zodiac,up_type,",
                "down_value,down_degree,down_zodiac,down_type"
            )
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,3351.0,319.62,"));
        assert!(lines[1].contains("Aquarius 19.62"));
        assert!(lines[1].ends_with(",Regular"));
        assert!(lines[2].contains(",Cardinal,"));
    }

    #[test]
    fn export_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("levels.csv");
        export_csv(&path, &sample()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 9);
        assert_eq!(&headers[0], "level");
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "2");
        assert_eq!(&rows[1][1], "3363.0");
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("levels.csv");
        assert!(matches!(
            export_csv(&path, &sample()),
            Err(ExportError::Io(_))
        ));
    }

    #[test]
    fn timestamped_name_format() {
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 9, 30, 5).unwrap();
        assert_eq!(
            timestamped_filename(&now),
            PathBuf::from("gann_table_20250102_093005.csv")
        );
    }

    #[test]
    fn json_contains_summary() {
        let json = to_json(&sample(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["level_count"], 2);
        assert_eq!(value["records"][0]["up"]["angle_type"], "Ordinal");
        assert_eq!(value["records"][0]["up"]["zodiac"]["sign"], "Aquarius");
        assert_eq!(value["params"]["base_value"], 3338.0);

        let pretty = to_json(&sample(), true).unwrap();
        assert!(pretty.contains('\n'));
    }
}
