//! Station metadata CSV ingest and cleaned-table output.
//!
//! Unlike weather ingest, station ingest validates row by row: a station with
//! unusable coordinates is skipped and reported rather than failing the batch,
//! matching how the upstream table (hand-maintained, with gaps) is handled.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{StationRow, TrackSegment};
use crate::error::AppError;
use crate::io::ingest::build_header_map;

/// A row-level error encountered during station ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub station: Option<String>,
    pub message: String,
}

/// Ingest output: usable rows + what was skipped.
#[derive(Debug, Clone)]
pub struct StationData {
    pub rows: Vec<StationRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load and validate the station metadata CSV.
pub fn load_station_rows(path: &Path) -> Result<StationData, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!(
            "Failed to open stations CSV '{}': {e}",
            path.display()
        ))
    })?;
    read_station_rows(file)
}

/// Reader-based ingest (split out so tests can feed in-memory CSVs).
pub fn read_station_rows<R: Read>(reader: R) -> Result<StationData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    for required in ["station_name", "lat", "lng"] {
        if !header_map.contains_key(required) {
            return Err(AppError::input(format!(
                "Missing required column: `{required}`"
            )));
        }
    }

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    station: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(row) => rows.push(row),
            Err((station, message)) => row_errors.push(RowError {
                line,
                station,
                message,
            }),
        }
    }

    if rows.is_empty() {
        return Err(AppError::empty(
            "No usable station rows remain after validation.",
        ));
    }

    Ok(StationData {
        rows,
        row_errors,
        rows_read,
    })
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<StationRow, (Option<String>, String)> {
    let station_name = get_field(record, header_map, "station_name")
        .map(str::to_string)
        .ok_or((None, "Missing `station_name` value.".to_string()))?;

    let latitude = parse_coord(record, header_map, "lat")
        .map_err(|m| (Some(station_name.clone()), m))?;
    let longitude = parse_coord(record, header_map, "lng")
        .map_err(|m| (Some(station_name.clone()), m))?;

    let track_age_years = match get_field(record, header_map, "track_age_years") {
        Some(raw) => Some(parse_finite(raw).ok_or_else(|| {
            (
                Some(station_name.clone()),
                format!("Non-numeric `track_age_years` value '{raw}'."),
            )
        })?),
        None => None,
    };

    Ok(StationRow {
        station_code: get_field(record, header_map, "station_code").map(str::to_string),
        state_name: get_field(record, header_map, "state_name").map(str::to_string),
        latitude,
        longitude,
        track_age_years,
        station_name,
    })
}

fn parse_coord(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<f64, String> {
    let raw = get_field(record, header_map, name)
        .ok_or_else(|| format!("Missing `{name}` value."))?;
    parse_finite(raw).ok_or_else(|| format!("Non-numeric `{name}` value '{raw}'."))
}

fn get_field<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_finite(s: &str) -> Option<f64> {
    let v = s.parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}

/// Write the cleaned station table.
///
/// Uses a `csv` writer since station and state names are free text that may
/// need quoting.
pub fn write_stations_csv(path: &Path, segments: &[TrackSegment]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::input(format!(
            "Failed to create stations CSV '{}': {e}",
            path.display()
        ))
    })?;

    writer
        .write_record([
            "station_name",
            "station_code",
            "state_name",
            "lat",
            "lng",
            "track_age_years",
        ])
        .map_err(|e| AppError::input(format!("Failed to write stations CSV header: {e}")))?;

    for s in segments {
        writer
            .write_record([
                s.station_name.as_str(),
                s.station_code.as_deref().unwrap_or(""),
                s.state_name.as_str(),
                &s.latitude.to_string(),
                &s.longitude.to_string(),
                &s.track_age_years.to_string(),
            ])
            .map_err(|e| AppError::input(format!("Failed to write stations CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::input(format!("Failed to flush stations CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_and_skips_bad_coordinates() {
        let csv = "station_name,station_code,state_name,lat,lng,track_age_years\n\
                   Chennai Egmore,MS,Tamil Nadu,13.0822,80.2599,14\n\
                   Ghost Halt,GH,,not-a-lat,80.0,\n\
                   Tambaram,TBM,Tamil Nadu,12.9229,80.1273,\n";
        let data = read_station_rows(csv.as_bytes()).unwrap();

        assert_eq!(data.rows_read, 3);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.row_errors.len(), 1);
        assert_eq!(data.row_errors[0].line, 3);
        assert_eq!(data.row_errors[0].station.as_deref(), Some("Ghost Halt"));

        assert_eq!(data.rows[0].track_age_years, Some(14.0));
        assert!(data.rows[1].track_age_years.is_none());
        assert!(data.rows[1].state_name.as_deref() == Some("Tamil Nadu"));
    }

    #[test]
    fn missing_required_header_fails() {
        let csv = "station_name,lat\nX,13.0\n";
        let err = read_station_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("lng"), "{err}");
    }

    #[test]
    fn all_rows_unusable_is_an_empty_dataset() {
        let csv = "station_name,lat,lng\nX,,\nY,bad,bad\n";
        let err = read_station_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
