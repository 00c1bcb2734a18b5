//! Reporting utilities: summaries, rankings, and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{RiskTier, StationAssessment};

/// Station counts per risk tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Aggregate view of one scoring run.
#[derive(Debug, Clone)]
pub struct RiskSummary {
    pub n_stations: usize,
    pub counts: TierCounts,
    pub mean_index: f64,
    pub max_index: f64,
}

/// Summarize a scoring run. Returns `None` for an empty run.
pub fn summarize(assessments: &[StationAssessment]) -> Option<RiskSummary> {
    if assessments.is_empty() {
        return None;
    }

    let mut counts = TierCounts::default();
    let mut sum = 0.0;
    let mut max_index = f64::NEG_INFINITY;

    for a in assessments {
        match a.assessment.tier {
            RiskTier::Low => counts.low += 1,
            RiskTier::Medium => counts.medium += 1,
            RiskTier::High => counts.high += 1,
        }
        sum += a.assessment.risk_index;
        max_index = max_index.max(a.assessment.risk_index);
    }

    Some(RiskSummary {
        n_stations: assessments.len(),
        counts,
        mean_index: sum / assessments.len() as f64,
        max_index,
    })
}

/// Rank stations by risk index, highest first, keeping the top N.
pub fn rank_by_risk(assessments: &[StationAssessment], top_n: usize) -> Vec<StationAssessment> {
    let mut sorted = assessments.to_vec();
    sorted.sort_by(|a, b| {
        b.assessment
            .risk_index
            .partial_cmp(&a.assessment.risk_index)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(top_n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        RiskAssessment, TrackSegment, WeatherReading, WeatherSource,
    };

    fn assessment(name: &str, risk_index: f64, tier: RiskTier) -> StationAssessment {
        StationAssessment {
            segment: TrackSegment {
                station_name: name.to_string(),
                station_code: None,
                state_name: "Tamil Nadu".to_string(),
                latitude: 13.0,
                longitude: 80.0,
                track_age_years: 20.0,
            },
            weather: WeatherReading {
                temperature_celsius: 38.0,
                humidity_percent: 60.0,
                solar_radiation_w_m2: 800.0,
            },
            source: WeatherSource::Demo,
            assessment: RiskAssessment { risk_index, tier },
        }
    }

    #[test]
    fn summarize_counts_tiers() {
        let runs = vec![
            assessment("A", 0.2, RiskTier::Low),
            assessment("B", 0.5, RiskTier::Medium),
            assessment("C", 0.8, RiskTier::High),
            assessment("D", 0.9, RiskTier::High),
        ];
        let summary = summarize(&runs).unwrap();
        assert_eq!(summary.n_stations, 4);
        assert_eq!(summary.counts.low, 1);
        assert_eq!(summary.counts.medium, 1);
        assert_eq!(summary.counts.high, 2);
        assert!((summary.mean_index - 0.6).abs() < 1e-12);
        assert!((summary.max_index - 0.9).abs() < 1e-12);
    }

    #[test]
    fn summarize_empty_is_none() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn rank_orders_highest_first() {
        let runs = vec![
            assessment("A", 0.2, RiskTier::Low),
            assessment("B", 0.9, RiskTier::High),
            assessment("C", 0.5, RiskTier::Medium),
        ];
        let ranked = rank_by_risk(&runs, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].segment.station_name, "B");
        assert_eq!(ranked[1].segment.station_name, "C");
    }
}
