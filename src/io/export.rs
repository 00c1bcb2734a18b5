//! Training-set and scored-station exports.
//!
//! The exports are meant to be easy to consume in spreadsheets, model-training
//! scripts, or downstream map tooling.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{RailStressSample, StationAssessment};
use crate::error::AppError;

/// Write the training table.
///
/// Columns are exactly `temp_c,humidity,solarradiation,track_age,tmsi` — the
/// schema model-training consumers expect. `stress_mpa` is an intermediate
/// and is deliberately not exported.
pub fn write_training_csv(path: &Path, samples: &[RailStressSample]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::input(format!(
            "Failed to create training CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "temp_c,humidity,solarradiation,track_age,tmsi")
        .map_err(|e| AppError::input(format!("Failed to write training CSV header: {e}")))?;

    for s in samples {
        writeln!(
            file,
            "{:.4},{},{},{},{:.6}",
            s.temp_c, s.humidity, s.solar_radiation, s.track_age, s.tmsi
        )
        .map_err(|e| AppError::input(format!("Failed to write training CSV row: {e}")))?;
    }

    Ok(())
}

/// Write per-station scoring results.
pub fn write_assessments_csv(
    path: &Path,
    assessments: &[StationAssessment],
) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::input(format!(
            "Failed to create results CSV '{}': {e}",
            path.display()
        ))
    })?;

    writer
        .write_record([
            "station_name",
            "state_name",
            "lat",
            "lng",
            "track_age_years",
            "temp_c",
            "humidity",
            "solarradiation",
            "weather_source",
            "risk_index",
            "risk_tier",
        ])
        .map_err(|e| AppError::input(format!("Failed to write results CSV header: {e}")))?;

    for a in assessments {
        let s = &a.segment;
        writer
            .write_record([
                s.station_name.as_str(),
                s.state_name.as_str(),
                &s.latitude.to_string(),
                &s.longitude.to_string(),
                &s.track_age_years.to_string(),
                &format!("{:.1}", a.weather.temperature_celsius),
                &format!("{:.0}", a.weather.humidity_percent),
                &format!("{:.0}", a.weather.solar_radiation_w_m2),
                a.source.display_name(),
                &format!("{:.2}", a.assessment.risk_index),
                a.assessment.tier.display_name(),
            ])
            .map_err(|e| AppError::input(format!("Failed to write results CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::input(format!("Failed to flush results CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_rows_format_as_expected() {
        // Mirror the writeln! body so the row shape is pinned without touching disk.
        let s = RailStressSample {
            temp_c: 35.0,
            humidity: 60.0,
            solar_radiation: 800.0,
            track_age: 20.0,
            stress_mpa: 36.225,
            tmsi: 0.319050,
        };
        let row = format!(
            "{:.4},{},{},{},{:.6}",
            s.temp_c, s.humidity, s.solar_radiation, s.track_age, s.tmsi
        );
        assert_eq!(row, "35.0000,60,800,20,0.319050");
    }
}
