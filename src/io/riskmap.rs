//! Read/write risk-map JSON files.
//!
//! The risk map is the portable hand-off to a map renderer: one marker per
//! scored station, carrying everything a popup needs (weather, age, source,
//! index, tier, color). The schema is defined by `domain::RiskMapFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::domain::{RiskMapFile, RiskMarker, StationAssessment};
use crate::error::AppError;

/// Write a risk-map JSON file.
pub fn write_risk_map(
    path: &Path,
    assessments: &[StationAssessment],
    index_name: &str,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input(format!(
            "Failed to create risk map '{}': {e}",
            path.display()
        ))
    })?;

    let map = RiskMapFile {
        tool: "railtherm".to_string(),
        generated: Local::now().date_naive(),
        index: index_name.to_string(),
        markers: assessments.iter().map(marker_from).collect(),
    };

    serde_json::to_writer_pretty(file, &map)
        .map_err(|e| AppError::input(format!("Failed to write risk map JSON: {e}")))?;

    Ok(())
}

/// Read a risk-map JSON file.
pub fn read_risk_map(path: &Path) -> Result<RiskMapFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!("Failed to open risk map '{}': {e}", path.display()))
    })?;
    let map: RiskMapFile = serde_json::from_reader(file)
        .map_err(|e| AppError::input(format!("Invalid risk map JSON: {e}")))?;
    Ok(map)
}

fn marker_from(a: &StationAssessment) -> RiskMarker {
    RiskMarker {
        station_name: a.segment.station_name.clone(),
        state_name: a.segment.state_name.clone(),
        latitude: a.segment.latitude,
        longitude: a.segment.longitude,
        temperature_celsius: a.weather.temperature_celsius,
        humidity_percent: a.weather.humidity_percent,
        solar_radiation_w_m2: a.weather.solar_radiation_w_m2,
        track_age_years: a.segment.track_age_years,
        weather_source: a.source,
        risk_index: a.assessment.risk_index,
        tier: a.assessment.tier,
        color: a.assessment.tier.marker_color().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        RiskAssessment, RiskTier, TrackSegment, WeatherReading, WeatherSource,
    };

    #[test]
    fn marker_carries_tier_color() {
        let a = StationAssessment {
            segment: TrackSegment {
                station_name: "Mambalam".to_string(),
                station_code: None,
                state_name: "Tamil Nadu".to_string(),
                latitude: 13.0383,
                longitude: 80.2337,
                track_age_years: 40.0,
            },
            weather: WeatherReading {
                temperature_celsius: 40.0,
                humidity_percent: 55.0,
                solar_radiation_w_m2: 900.0,
            },
            source: WeatherSource::Demo,
            assessment: RiskAssessment {
                risk_index: 0.78,
                tier: RiskTier::High,
            },
        };
        let m = marker_from(&a);
        assert_eq!(m.color, "red");
        assert_eq!(m.tier, RiskTier::High);
        assert_eq!(m.station_name, "Mambalam");
    }

    #[test]
    fn risk_map_round_trips_through_json() {
        let map = RiskMapFile {
            tool: "railtherm".to_string(),
            generated: chrono::NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            index: "heuristic".to_string(),
            markers: vec![],
        };
        let json = serde_json::to_string(&map).unwrap();
        let back: RiskMapFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tool, "railtherm");
        assert_eq!(back.index, "heuristic");
        assert_eq!(back.generated, map.generated);
    }
}
