//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during scoring and synthesis
//! - exported to CSV/JSON for downstream map renderers
//! - reloaded later for inspection

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A point-in-time weather observation in metric units.
///
/// Ephemeral: constructed per evaluation, never persisted by the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_celsius: f64,
    /// Nominally 0–100; inputs are not clamped here, the scorer normalizes.
    pub humidity_percent: f64,
    pub solar_radiation_w_m2: f64,
}

/// A raw row from the weather provider's CSV export.
///
/// Temperatures arrive in **Fahrenheit** (the upstream provider's convention);
/// the synthesizer converts. `track_age` is present only when the source table
/// carries real ages; otherwise it is synthesized.
#[derive(Debug, Clone)]
pub struct RawWeatherRow {
    pub temp_f: f64,
    pub humidity: f64,
    pub solar_radiation: f64,
    pub track_age: Option<f64>,
}

/// A raw station record as ingested from the station metadata CSV.
#[derive(Debug, Clone)]
pub struct StationRow {
    pub station_name: String,
    pub station_code: Option<String>,
    pub state_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub track_age_years: Option<f64>,
}

/// A station with a resolved track age.
///
/// Loaded once at startup and immutable for the process lifetime. Geolocation
/// is pass-through data for the map layer; the scoring formulas ignore it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSegment {
    pub station_name: String,
    pub station_code: Option<String>,
    pub state_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub track_age_years: f64,
}

/// One training row: flattened weather + track age + derived label.
///
/// Invariants: `tmsi` is always within `[0, 1]`; `stress_mpa` is always
/// `>= 0` (only compressive stress is physically meaningful for buckling).
#[derive(Debug, Clone, PartialEq)]
pub struct RailStressSample {
    pub temp_c: f64,
    pub humidity: f64,
    pub solar_radiation: f64,
    pub track_age: f64,
    /// Net compressive thermal stress (intermediate; not exported).
    pub stress_mpa: f64,
    /// Thermal misalignment stress index, the training target.
    pub tmsi: f64,
}

/// Discrete risk bucket derived by thresholding a continuous index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Short label for tables.
    pub fn display_name(self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
        }
    }

    /// Verbose operations label (the wording map popups use).
    pub fn status_label(self) -> &'static str {
        match self {
            RiskTier::Low => "SAFE: Normal Operations",
            RiskTier::Medium => "WARNING: Moderate Thermal Stress",
            RiskTier::High => "CRITICAL: High Risk of Buckling",
        }
    }

    /// Marker color understood by downstream map renderers.
    pub fn marker_color(self) -> &'static str {
        match self {
            RiskTier::Low => "green",
            RiskTier::Medium => "orange",
            RiskTier::High => "red",
        }
    }
}

/// Scorer output. Derived, never stored; recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Composite risk index in `[0, 1]`.
    pub risk_index: f64,
    pub tier: RiskTier,
}

/// Where a station's weather values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherSource {
    /// Seeded synthetic weather (fast, reproducible).
    Demo,
    /// Live API response.
    Live,
    /// Fixed substitute after a failed live fetch.
    Fallback,
}

impl WeatherSource {
    pub fn display_name(self) -> &'static str {
        match self {
            WeatherSource::Demo => "Demo",
            WeatherSource::Live => "Live API",
            WeatherSource::Fallback => "Fallback",
        }
    }
}

/// A fully scored station: segment + the weather used + the verdict.
#[derive(Debug, Clone)]
pub struct StationAssessment {
    pub segment: TrackSegment,
    pub weather: WeatherReading,
    pub source: WeatherSource,
    pub assessment: RiskAssessment,
}

/// Which risk-index strategy to evaluate.
///
/// The dataset-target formula (physics) and the dashboard formula (heuristic)
/// are two distinct weightings over similar inputs; they are never unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    Heuristic,
    Physics,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IndexKind::Heuristic => "heuristic",
            IndexKind::Physics => "physics",
        };
        write!(f, "{name}")
    }
}

/// Inclusive range for synthesized track ages (whole years).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min_years: u32,
    pub max_years: u32,
}

impl AgeRange {
    pub fn validate(self) -> Result<(), AppError> {
        if self.min_years > self.max_years {
            return Err(AppError::input(format!(
                "Invalid track-age range: min {} > max {}.",
                self.min_years, self.max_years
            )));
        }
        Ok(())
    }
}

/// Configuration for `railtherm prepare` (dataset synthesis).
#[derive(Debug, Clone)]
pub struct PrepareConfig {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub age_range: AgeRange,
    pub seed: u64,
}

/// Configuration for `railtherm stations` (station preprocessing).
#[derive(Debug, Clone)]
pub struct StationsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub age_range: AgeRange,
    pub seed: u64,
}

/// Configuration for `railtherm score` (fleet scoring).
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub stations_path: PathBuf,
    /// Use the live weather API instead of seeded demo weather.
    pub live: bool,
    pub index: IndexKind,
    pub seed: u64,
    /// Age range for stations whose table carries no real age.
    pub age_range: AgeRange,
    pub top_n: usize,
    pub export_csv: Option<PathBuf>,
    pub export_map: Option<PathBuf>,
}

/// A saved risk-map file (JSON).
///
/// This is the portable hand-off to a map renderer: one marker per scored
/// station with everything a popup needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMapFile {
    pub tool: String,
    pub generated: NaiveDate,
    /// Name of the index strategy that produced the scores.
    pub index: String,
    pub markers: Vec<RiskMarker>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMarker {
    pub station_name: String,
    pub state_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub solar_radiation_w_m2: f64,
    pub track_age_years: f64,
    pub weather_source: WeatherSource,
    pub risk_index: f64,
    pub tier: RiskTier,
    pub color: String,
}
