//! Four-factor weighted heuristic index (the dashboard formula).
//!
//! Each input normalizes against a fixed assumed ceiling and clamps to
//! `[0, 1]` on both ends — negative raw inputs score zero rather than
//! producing a negative term. The composite weights sum to 1.0, which keeps
//! the index bounded; retuned weights must preserve that.

use super::{RiskIndex, RiskInputs};

/// Assumed temperature ceiling (°C).
pub const TEMP_CEILING_C: f64 = 60.0;
/// Assumed humidity ceiling (%).
pub const HUMIDITY_CEILING_PCT: f64 = 100.0;
/// Assumed solar radiation ceiling (W/m²).
pub const SOLAR_CEILING_W_M2: f64 = 1000.0;
/// Assumed track-age ceiling (years).
pub const AGE_CEILING_YEARS: f64 = 40.0;

pub const TEMP_WEIGHT: f64 = 0.35;
pub const SOLAR_WEIGHT: f64 = 0.25;
pub const AGE_WEIGHT: f64 = 0.20;
pub const HUMIDITY_WEIGHT: f64 = 0.20;

/// Normalize a raw factor against its ceiling, clamped to `[0, 1]`.
fn factor_score(value: f64, ceiling: f64) -> f64 {
    (value / ceiling).clamp(0.0, 1.0)
}

/// Round to the 2-decimal precision the index is reported at.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// The dashboard scoring formula as a strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedHeuristicIndex;

impl RiskIndex for WeightedHeuristicIndex {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn compute(&self, inputs: &RiskInputs) -> f64 {
        let temp = factor_score(inputs.weather.temperature_celsius, TEMP_CEILING_C);
        let humidity = factor_score(inputs.weather.humidity_percent, HUMIDITY_CEILING_PCT);
        let solar = factor_score(inputs.weather.solar_radiation_w_m2, SOLAR_CEILING_W_M2);
        let age = factor_score(inputs.track_age_years, AGE_CEILING_YEARS);

        round2(
            TEMP_WEIGHT * temp
                + SOLAR_WEIGHT * solar
                + AGE_WEIGHT * age
                + HUMIDITY_WEIGHT * humidity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskTier, WeatherReading};
    use crate::risk::classify;

    fn inputs(temp: f64, humidity: f64, solar: f64, age: f64) -> RiskInputs {
        RiskInputs {
            weather: WeatherReading {
                temperature_celsius: temp,
                humidity_percent: humidity,
                solar_radiation_w_m2: solar,
            },
            track_age_years: age,
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let sum = TEMP_WEIGHT + SOLAR_WEIGHT + AGE_WEIGHT + HUMIDITY_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12, "weights sum to {sum}");
    }

    #[test]
    fn peak_summer_scenario() {
        // temp 38/60 = 0.6333, humidity 0.60, solar 0.80, age 35/40 = 0.875
        // → 0.35*0.6333 + 0.25*0.80 + 0.20*0.875 + 0.20*0.60 = 0.7167 → 0.72
        assert!((factor_score(38.0, TEMP_CEILING_C) - 0.6333).abs() < 1e-4);
        assert!((factor_score(60.0, HUMIDITY_CEILING_PCT) - 0.60).abs() < 1e-12);
        assert!((factor_score(800.0, SOLAR_CEILING_W_M2) - 0.80).abs() < 1e-12);
        assert!((factor_score(35.0, AGE_CEILING_YEARS) - 0.875).abs() < 1e-12);

        let risk = WeightedHeuristicIndex.compute(&inputs(38.0, 60.0, 800.0, 35.0));
        assert!((risk - 0.72).abs() < 1e-12, "got {risk}");
        assert_eq!(classify(risk), RiskTier::High);
    }

    #[test]
    fn negative_inputs_score_zero() {
        let risk = WeightedHeuristicIndex.compute(&inputs(-10.0, -5.0, -800.0, -3.0));
        assert_eq!(risk, 0.0);
    }

    #[test]
    fn saturated_inputs_score_one() {
        let risk = WeightedHeuristicIndex.compute(&inputs(100.0, 200.0, 5000.0, 90.0));
        assert!((risk - 1.0).abs() < 1e-12);
    }

    #[test]
    fn index_bounded_for_any_real_input() {
        for &(t, h, s, a) in &[
            (f64::MIN, 0.0, 0.0, 0.0),
            (f64::MAX, f64::MAX, f64::MAX, f64::MAX),
            (-273.15, 150.0, 0.0, 200.0),
        ] {
            let risk = WeightedHeuristicIndex.compute(&inputs(t, h, s, a));
            assert!((0.0..=1.0).contains(&risk), "out of range: {risk}");
        }
    }

    #[test]
    fn identical_inputs_identical_output() {
        let i = inputs(41.2, 63.7, 912.0, 22.0);
        let a = WeightedHeuristicIndex.compute(&i);
        let b = WeightedHeuristicIndex.compute(&i);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
