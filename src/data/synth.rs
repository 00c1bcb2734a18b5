//! Training-set synthesis from raw weather observations.
//!
//! Each input row becomes one `RailStressSample`:
//!
//! 1. Fahrenheit → Celsius
//! 2. ambient → rail surface temperature
//! 3. rail temperature → compressive thermal stress (clamped `>= 0`)
//! 4. track age from the row, else a seeded uniform draw
//! 5. stress + age → `tmsi` target in `[0, 1]`

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::demo::synth_track_age;
use crate::domain::{AgeRange, RailStressSample, RawWeatherRow};
use crate::error::AppError;
use crate::risk::physics::{
    fahrenheit_to_celsius, rail_surface_temp, stress_index, thermal_stress_mpa,
};

/// Deterministic dataset synthesizer.
///
/// The only randomness is the synthetic track-age draw for rows that carry no
/// real age, and it comes from the explicitly seeded RNG held here.
pub struct Synthesizer {
    rng: StdRng,
    age_range: AgeRange,
}

impl Synthesizer {
    pub fn new(seed: u64, age_range: AgeRange) -> Result<Self, AppError> {
        age_range.validate()?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            age_range,
        })
    }

    /// Derive one training sample per input row, preserving input order.
    pub fn synthesize(&mut self, rows: &[RawWeatherRow]) -> Vec<RailStressSample> {
        rows.iter().map(|row| self.sample_from(row)).collect()
    }

    fn sample_from(&mut self, row: &RawWeatherRow) -> RailStressSample {
        let temp_c = fahrenheit_to_celsius(row.temp_f);
        let stress_mpa = thermal_stress_mpa(rail_surface_temp(temp_c));
        // Ages carried through from the source table win over synthetic ones.
        let track_age = row
            .track_age
            .unwrap_or_else(|| synth_track_age(&mut self.rng, self.age_range));
        RailStressSample {
            temp_c,
            humidity: row.humidity,
            solar_radiation: row.solar_radiation,
            track_age,
            stress_mpa,
            tmsi: stress_index(stress_mpa, track_age),
        }
    }
}
