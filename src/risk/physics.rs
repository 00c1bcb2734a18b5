//! Physics-based thermal stress index.
//!
//! The stress relation is the standard one for continuously welded rail:
//!
//! `stress = E * alpha * (rail_temp - neutral_temp)`
//!
//! Only net compressive stress (rail hotter than its neutral temperature)
//! drives buckling risk; tension states clamp to zero. The blended index
//! normalizes stress and track age against fixed ceilings — design choices
//! for this dataset, not measured maxima.

use super::{RiskIndex, RiskInputs};

/// Young's modulus for rail steel (N/mm²).
pub const YOUNGS_MODULUS: f64 = 210_000.0;
/// Linear thermal expansion coefficient (per °C).
pub const EXPANSION_COEFF: f64 = 11.5e-6;
/// Stress-free reference temperature at which rail is fastened (°C).
pub const NEUTRAL_TEMP_C: f64 = 35.0;
/// Empirical offset of exposed rail surface over ambient air in direct sun (°C).
pub const RAIL_SURFACE_OFFSET_C: f64 = 15.0;

/// Normalization ceiling for the stress term (MPa).
pub const STRESS_CEILING_MPA: f64 = 150.0;
/// Normalization ceiling for the age term (years).
pub const AGE_CEILING_YEARS: f64 = 40.0;
/// Blend weight of the stress term.
pub const STRESS_WEIGHT: f64 = 0.7;
/// Blend weight of the age term.
pub const AGE_WEIGHT: f64 = 0.3;

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Rail surface temperature in direct sun, from ambient air temperature.
pub fn rail_surface_temp(ambient_c: f64) -> f64 {
    ambient_c + RAIL_SURFACE_OFFSET_C
}

/// Net compressive thermal stress (MPa), clamped at zero.
pub fn thermal_stress_mpa(rail_temp_c: f64) -> f64 {
    (YOUNGS_MODULUS * EXPANSION_COEFF * (rail_temp_c - NEUTRAL_TEMP_C)).max(0.0)
}

/// Thermal misalignment stress index: normalized stress (70%) blended with
/// normalized track age (30%), clamped to `[0, 1]`.
pub fn stress_index(stress_mpa: f64, track_age_years: f64) -> f64 {
    (stress_mpa / STRESS_CEILING_MPA * STRESS_WEIGHT
        + track_age_years / AGE_CEILING_YEARS * AGE_WEIGHT)
        .clamp(0.0, 1.0)
}

/// The dataset-target formula as a scoring strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicsBasedIndex;

impl RiskIndex for PhysicsBasedIndex {
    fn name(&self) -> &'static str {
        "physics"
    }

    fn compute(&self, inputs: &RiskInputs) -> f64 {
        let rail_temp = rail_surface_temp(inputs.weather.temperature_celsius);
        stress_index(thermal_stress_mpa(rail_temp), inputs.track_age_years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WeatherReading;

    #[test]
    fn fahrenheit_conversion_round_trips() {
        for &f in &[-40.0, 0.0, 32.0, 95.0, 120.5] {
            let back = celsius_to_fahrenheit(fahrenheit_to_celsius(f));
            assert!((back - f).abs() < 1e-10, "round trip failed for {f}");
        }
        assert!((fahrenheit_to_celsius(95.0) - 35.0).abs() < 1e-12);
    }

    #[test]
    fn stress_never_negative() {
        for &t in &[-100.0, 0.0, NEUTRAL_TEMP_C, 34.999, 35.0, 60.0, 500.0] {
            assert!(thermal_stress_mpa(t) >= 0.0, "negative stress at {t}");
        }
    }

    #[test]
    fn stress_at_peak_summer_reading() {
        // 95 °F → 35 °C ambient → 50 °C rail → 210000 * 11.5e-6 * 15 = 36.225 MPa.
        let rail = rail_surface_temp(fahrenheit_to_celsius(95.0));
        assert!((rail - 50.0).abs() < 1e-12);
        let stress = thermal_stress_mpa(rail);
        assert!((stress - 36.225).abs() < 1e-9, "got {stress}");
        // Stress term alone contributes 36.225/150 * 0.7 = 0.169.
        let stress_term = stress_index(stress, 0.0);
        assert!((stress_term - 0.169).abs() < 1e-6, "got {stress_term}");
    }

    #[test]
    fn stress_index_clamped_for_extreme_inputs() {
        assert!((stress_index(10_000.0, 1_000.0) - 1.0).abs() < 1e-12);
        assert_eq!(stress_index(0.0, -50.0), 0.0);
        assert_eq!(stress_index(0.0, 0.0), 0.0);
    }

    #[test]
    fn physics_index_matches_manual_blend() {
        let inputs = RiskInputs {
            weather: WeatherReading {
                temperature_celsius: 35.0,
                humidity_percent: 60.0,
                solar_radiation_w_m2: 800.0,
            },
            track_age_years: 20.0,
        };
        let expected = 36.225 / 150.0 * 0.7 + 20.0 / 40.0 * 0.3;
        let got = PhysicsBasedIndex.compute(&inputs);
        assert!((got - expected).abs() < 1e-9, "got {got}, expected {expected}");
    }
}
