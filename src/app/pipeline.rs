//! Shared scoring pipeline used by the `score` front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! station ingest -> age resolution -> weather acquisition -> index -> tiers
//!
//! The CLI then focuses on presentation (printing and exports).

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::{DemoWeather, FALLBACK_READING, WeatherClient, resolve_track_ages};
use crate::domain::{ScoreConfig, StationAssessment, WeatherSource};
use crate::error::AppError;
use crate::report::RiskSummary;
use crate::risk::{RiskInputs, assess, strategy_for};

/// All computed outputs of a single `railtherm score` run.
pub struct ScoreOutput {
    pub assessments: Vec<StationAssessment>,
    pub summary: RiskSummary,
    /// Name of the index strategy that produced the scores.
    pub index_name: &'static str,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

/// Execute the full scoring pipeline and return the computed outputs.
pub fn run_score(config: &ScoreConfig) -> Result<ScoreOutput, AppError> {
    config.age_range.validate()?;

    // 1) Load station metadata (immutable reference data for the run).
    let data = crate::io::stations::load_station_rows(&config.stations_path)?;

    // 2) Resolve track ages; all randomness flows from this one seeded RNG.
    let mut rng = StdRng::seed_from_u64(config.seed);
    let segments = resolve_track_ages(&data.rows, &mut rng, config.age_range);

    // 3) Pick weather providers up front so a missing API key fails before
    //    any station is scored.
    let client = if config.live {
        Some(WeatherClient::from_env()?)
    } else {
        None
    };
    let demo = DemoWeather::new()?;

    let index = strategy_for(config.index);

    // 4) Score each station. Live-fetch failures substitute the fixed
    //    fallback reading; they never abort the run.
    let mut assessments = Vec::with_capacity(segments.len());
    for segment in segments {
        let (weather, source) = match &client {
            Some(client) => match client.fetch(segment.latitude, segment.longitude, &mut rng) {
                Some(reading) => (reading, WeatherSource::Live),
                None => (FALLBACK_READING, WeatherSource::Fallback),
            },
            None => (demo.sample(&mut rng), WeatherSource::Demo),
        };

        let inputs = RiskInputs {
            weather,
            track_age_years: segment.track_age_years,
        };
        let assessment = assess(index.as_ref(), &inputs);

        assessments.push(StationAssessment {
            segment,
            weather,
            source,
            assessment,
        });
    }

    let summary = crate::report::summarize(&assessments)
        .ok_or_else(|| AppError::empty("No stations to score."))?;

    Ok(ScoreOutput {
        assessments,
        summary,
        index_name: index.name(),
        rows_read: data.rows_read,
        rows_skipped: data.row_errors.len(),
    })
}
