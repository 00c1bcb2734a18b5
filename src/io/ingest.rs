//! Raw weather CSV ingest.
//!
//! Turns a weather provider export into typed rows ready for synthesis.
//!
//! Design goals:
//! - **Strict schema** for required fields (clear errors + exit code 2)
//! - **Whole-batch failure** on any malformed value: the training set must
//!   never contain silently-defaulted rows, so unlike station ingest there is
//!   no row-level skipping here
//! - **Deterministic behavior** (no hidden randomness)

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::RawWeatherRow;
use crate::error::AppError;

/// Columns the synthesizer cannot run without.
const REQUIRED_COLUMNS: [&str; 3] = ["temp", "humidity", "solarradiation"];

/// Ingest output for one raw weather file.
#[derive(Debug, Clone)]
pub struct RawWeatherTable {
    pub rows: Vec<RawWeatherRow>,
    pub rows_read: usize,
}

/// Load and validate a raw weather CSV.
pub fn load_weather_rows(path: &Path) -> Result<RawWeatherTable, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!(
            "Failed to open weather CSV '{}': {e}",
            path.display()
        ))
    })?;
    read_weather_rows(file)
}

/// Reader-based ingest (split out so tests can feed in-memory CSVs).
pub fn read_weather_rows<R: Read>(reader: R) -> Result<RawWeatherTable, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    for required in REQUIRED_COLUMNS {
        if !header_map.contains_key(required) {
            return Err(AppError::input(format!(
                "Missing required column: `{required}`"
            )));
        }
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2 because records() starts after the header and CSV lines are 1-based.
        let line = idx + 2;
        let record =
            result.map_err(|e| AppError::input(format!("CSV parse error at line {line}: {e}")))?;
        rows.push(parse_row(&record, &header_map, line)?);
    }

    if rows.is_empty() {
        return Err(AppError::empty("No data rows in weather CSV."));
    }

    let rows_read = rows.len();
    Ok(RawWeatherTable { rows, rows_read })
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    line: usize,
) -> Result<RawWeatherRow, AppError> {
    Ok(RawWeatherRow {
        temp_f: required_f64(record, header_map, "temp", line)?,
        humidity: required_f64(record, header_map, "humidity", line)?,
        solar_radiation: required_f64(record, header_map, "solarradiation", line)?,
        track_age: optional_f64(record, header_map, "track_age", line)?,
    })
}

fn required_f64(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
    line: usize,
) -> Result<f64, AppError> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| AppError::input(format!("Missing required column: `{name}`")))?;
    let raw = record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::input(format!("Missing `{name}` value at line {line}.")))?;
    parse_finite(raw).ok_or_else(|| {
        AppError::input(format!(
            "Non-numeric `{name}` value '{raw}' at line {line}."
        ))
    })
}

/// A column that may be absent entirely; a present-but-garbage value still
/// fails the batch.
fn optional_f64(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
    line: usize,
) -> Result<Option<f64>, AppError> {
    let Some(idx) = header_map.get(name) else {
        return Ok(None);
    };
    let Some(raw) = record.get(*idx).map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    parse_finite(raw).map(Some).ok_or_else(|| {
        AppError::input(format!(
            "Non-numeric `{name}` value '{raw}' at line {line}."
        ))
    })
}

fn parse_finite(s: &str) -> Option<f64> {
    let v = s.parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}

pub(crate) fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿temp"). If we don't strip it, schema validation
    // will incorrectly report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_in_any_order() {
        let csv = "humidity,solarradiation,temp\n60,800,95\n55,700,88\n";
        let table = read_weather_rows(csv.as_bytes()).unwrap();
        assert_eq!(table.rows_read, 2);
        assert_eq!(table.rows[0].temp_f, 95.0);
        assert_eq!(table.rows[0].humidity, 60.0);
        assert_eq!(table.rows[1].solar_radiation, 700.0);
        assert!(table.rows[0].track_age.is_none());
    }

    #[test]
    fn carries_track_age_column_through() {
        let csv = "temp,humidity,solarradiation,track_age\n95,60,800,25\n";
        let table = read_weather_rows(csv.as_bytes()).unwrap();
        assert_eq!(table.rows[0].track_age, Some(25.0));
    }

    #[test]
    fn missing_column_fails_the_batch() {
        let csv = "temp,humidity\n95,60\n";
        let err = read_weather_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("solarradiation"), "{err}");
    }

    #[test]
    fn non_numeric_value_fails_the_batch_with_line_number() {
        let csv = "temp,humidity,solarradiation\n95,60,800\nhot,60,800\n";
        let err = read_weather_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn empty_file_reports_empty_dataset() {
        let csv = "temp,humidity,solarradiation\n";
        let err = read_weather_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn bom_prefixed_header_still_resolves() {
        let csv = "\u{feff}temp,humidity,solarradiation\n95,60,800\n";
        let table = read_weather_rows(csv.as_bytes()).unwrap();
        assert_eq!(table.rows[0].temp_f, 95.0);
    }
}
