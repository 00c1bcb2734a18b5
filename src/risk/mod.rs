//! Risk-index strategies and tier classification.
//!
//! Two formulas over similar inputs coexist here on purpose:
//!
//! - `PhysicsBasedIndex` — the dataset-target formula (rail temp → thermal
//!   stress → blended index)
//! - `WeightedHeuristicIndex` — the four-factor weighted sum the dashboard uses
//!
//! They approximate the same concept with different weightings and must stay
//! independently testable; unifying them would change observable outputs.

pub mod heuristic;
pub mod physics;

pub use heuristic::WeightedHeuristicIndex;
pub use physics::PhysicsBasedIndex;

use crate::domain::{IndexKind, RiskAssessment, RiskTier, WeatherReading};

/// Inputs common to every index strategy.
#[derive(Debug, Clone, Copy)]
pub struct RiskInputs {
    pub weather: WeatherReading,
    pub track_age_years: f64,
}

/// A named risk-index strategy producing a bounded score.
pub trait RiskIndex {
    fn name(&self) -> &'static str;

    /// Compute the risk index for the given inputs.
    ///
    /// Total over any real-valued input; the result is always within `[0, 1]`
    /// and the computation never fails.
    fn compute(&self, inputs: &RiskInputs) -> f64;
}

/// Lower bound of the MEDIUM band (inclusive).
pub const MEDIUM_THRESHOLD: f64 = 0.4;
/// Lower bound of the HIGH band (inclusive).
pub const HIGH_THRESHOLD: f64 = 0.7;

/// Threshold a continuous index into a tier.
///
/// Bands are closed on their lower bound: exactly 0.4 is MEDIUM and exactly
/// 0.7 is HIGH.
pub fn classify(risk_index: f64) -> RiskTier {
    if risk_index < MEDIUM_THRESHOLD {
        RiskTier::Low
    } else if risk_index < HIGH_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

/// Evaluate a strategy and classify the result.
pub fn assess(index: &dyn RiskIndex, inputs: &RiskInputs) -> RiskAssessment {
    let risk_index = index.compute(inputs);
    RiskAssessment {
        risk_index,
        tier: classify(risk_index),
    }
}

/// Resolve an `--index` flag to a strategy instance.
pub fn strategy_for(kind: IndexKind) -> Box<dyn RiskIndex> {
    match kind {
        IndexKind::Heuristic => Box::new(WeightedHeuristicIndex),
        IndexKind::Physics => Box::new(PhysicsBasedIndex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_band_boundaries() {
        assert_eq!(classify(0.0), RiskTier::Low);
        assert_eq!(classify(0.39), RiskTier::Low);
        assert_eq!(classify(0.4), RiskTier::Medium, "exactly 0.4 is MEDIUM");
        assert_eq!(classify(0.69), RiskTier::Medium);
        assert_eq!(classify(0.7), RiskTier::High, "exactly 0.7 is HIGH");
        assert_eq!(classify(1.0), RiskTier::High);
    }

    #[test]
    fn assess_stays_bounded_for_both_strategies() {
        let extreme = RiskInputs {
            weather: WeatherReading {
                temperature_celsius: 500.0,
                humidity_percent: -50.0,
                solar_radiation_w_m2: 1e9,
            },
            track_age_years: 1000.0,
        };
        for kind in [IndexKind::Heuristic, IndexKind::Physics] {
            let out = assess(strategy_for(kind).as_ref(), &extreme);
            assert!(
                (0.0..=1.0).contains(&out.risk_index),
                "{kind:?} index out of range: {}",
                out.risk_index
            );
        }
    }
}
