//! Seeded synthetic weather and track ages.
//!
//! All randomness flows through an injected `StdRng`: a given seed reproduces
//! a full demo scoring run bit-for-bit, and tests can assert determinism.

use rand::Rng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::{AgeRange, StationRow, TrackSegment, WeatherReading};
use crate::error::AppError;

/// Fixed reading substituted when a live fetch fails.
pub const FALLBACK_READING: WeatherReading = WeatherReading {
    temperature_celsius: 38.0,
    humidity_percent: 60.0,
    solar_radiation_w_m2: 850.0,
};

/// Normal-noise demo weather centered on peak-summer conditions.
#[derive(Debug, Clone)]
pub struct DemoWeather {
    temp: Normal<f64>,
    humidity: Normal<f64>,
    solar: Normal<f64>,
}

impl DemoWeather {
    pub fn new() -> Result<Self, AppError> {
        let build = |mean: f64, std_dev: f64| {
            Normal::new(mean, std_dev)
                .map_err(|e| AppError::external(format!("Demo weather distribution error: {e}")))
        };
        Ok(Self {
            temp: build(38.0, 3.0)?,
            humidity: build(60.0, 8.0)?,
            solar: build(850.0, 120.0)?,
        })
    }

    pub fn sample(&self, rng: &mut StdRng) -> WeatherReading {
        WeatherReading {
            temperature_celsius: self.temp.sample(rng),
            humidity_percent: self.humidity.sample(rng),
            solar_radiation_w_m2: self.solar.sample(rng),
        }
    }
}

/// Draw a synthetic track age: a whole number of years, uniform over the
/// inclusive range. Explicitly a placeholder, not measured data.
pub fn synth_track_age(rng: &mut StdRng, range: AgeRange) -> f64 {
    rng.gen_range(range.min_years..=range.max_years) as f64
}

/// Resolve station rows to segments: ages carried through from the source
/// table win over synthetic ones; missing state names become `Unknown`.
pub fn resolve_track_ages(
    rows: &[StationRow],
    rng: &mut StdRng,
    range: AgeRange,
) -> Vec<TrackSegment> {
    rows.iter()
        .map(|row| {
            let track_age_years = row
                .track_age_years
                .unwrap_or_else(|| synth_track_age(rng, range));
            TrackSegment {
                station_name: row.station_name.clone(),
                station_code: row.station_code.clone(),
                state_name: row
                    .state_name
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                latitude: row.latitude,
                longitude: row.longitude,
                track_age_years,
            }
        })
        .collect()
}
