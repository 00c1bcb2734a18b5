//! Terminal formatting for score runs, single assessments, and synthesis.
//!
//! We keep formatting code in one place so:
//! - the scoring/synthesis code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{
    RailStressSample, RiskAssessment, RiskMapFile, RiskMarker, ScoreConfig, StationAssessment,
};
use crate::report::RiskSummary;
use crate::risk::RiskInputs;

/// Format the scoring-run header: mode, index, dataset shape, tier counts.
pub fn format_score_summary(
    summary: &RiskSummary,
    config: &ScoreConfig,
    index_name: &str,
    rows_read: usize,
    rows_skipped: usize,
) -> String {
    let mut out = String::new();

    out.push_str("=== railtherm - Rail Thermal Buckling Risk ===\n");
    out.push_str(&format!(
        "Mode: {}\n",
        if config.live { "live weather" } else { "demo weather (seeded)" }
    ));
    out.push_str(&format!("Index: {index_name}\n"));
    out.push_str(&format!("Seed: {}\n", config.seed));
    out.push_str(&format!(
        "Stations: {} scored ({rows_read} read, {rows_skipped} skipped)\n",
        summary.n_stations
    ));
    out.push_str(&format!(
        "Tiers: LOW={} MEDIUM={} HIGH={}\n",
        summary.counts.low, summary.counts.medium, summary.counts.high
    ));
    out.push_str(&format!(
        "Risk index: mean={:.2} max={:.2}\n",
        summary.mean_index, summary.max_index
    ));
    out.push('\n');

    out
}

/// Format the ranked station table (highest risk first).
pub fn format_station_table(rows: &[StationAssessment]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<24} {:<14} {:>6} {:>7} {:>6} {:>7} {:<10} {:>6} {:<8}\n",
        "station", "state", "age_y", "temp_c", "hum_%", "solar", "source", "index", "tier"
    ));
    out.push_str(&format!(
        "{:-<24} {:-<14} {:-<6} {:-<7} {:-<6} {:-<7} {:-<10} {:-<6} {:-<8}\n",
        "", "", "", "", "", "", "", "", ""
    ));

    for a in rows {
        let s = &a.segment;
        out.push_str(&format!(
            "{:<24} {:<14} {:>6.0} {:>7.1} {:>6.0} {:>7.0} {:<10} {:>6.2} {:<8}\n",
            truncate(&s.station_name, 24),
            truncate(&s.state_name, 14),
            s.track_age_years,
            a.weather.temperature_celsius,
            a.weather.humidity_percent,
            a.weather.solar_radiation_w_m2,
            a.source.display_name(),
            a.assessment.risk_index,
            a.assessment.tier.display_name(),
        ));
    }

    out
}

/// Format a single-reading assessment.
pub fn format_assessment(
    inputs: &RiskInputs,
    index_name: &str,
    assessment: &RiskAssessment,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Temperature: {:.1} °C\n",
        inputs.weather.temperature_celsius
    ));
    out.push_str(&format!("Humidity: {:.0}%\n", inputs.weather.humidity_percent));
    out.push_str(&format!(
        "Solar: {:.0} W/m²\n",
        inputs.weather.solar_radiation_w_m2
    ));
    out.push_str(&format!("Track age: {:.0} years\n", inputs.track_age_years));
    out.push_str(&format!(
        "Risk index ({index_name}): {:.2}\n",
        assessment.risk_index
    ));
    out.push_str(&format!("Status: {}\n", assessment.tier.status_label()));
    out
}

/// Format the dataset-synthesis summary printed by `prepare`.
pub fn format_prepare_summary(n_inputs: usize, samples: &[RailStressSample]) -> String {
    let (mut tmsi_min, mut tmsi_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let mut stress_max = 0.0f64;
    for s in samples {
        tmsi_min = tmsi_min.min(s.tmsi);
        tmsi_max = tmsi_max.max(s.tmsi);
        stress_max = stress_max.max(s.stress_mpa);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Processed {} rows from {n_inputs} file(s).\n",
        samples.len()
    ));
    out.push_str(&format!(
        "tmsi=[{tmsi_min:.3}, {tmsi_max:.3}] | max stress={stress_max:.2} MPa\n"
    ));
    out
}

/// Format a reloaded risk-map file for terminal display.
pub fn format_map_file(map: &RiskMapFile, top_n: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Risk map: {} markers | index={} | generated {}\n\n",
        map.markers.len(),
        map.index,
        map.generated
    ));

    let mut markers: Vec<&RiskMarker> = map.markers.iter().collect();
    markers.sort_by(|a, b| {
        b.risk_index
            .partial_cmp(&a.risk_index)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    out.push_str(&format!(
        "{:<24} {:>9} {:>9} {:>6} {:<8} {:<7}\n",
        "station", "lat", "lng", "index", "tier", "color"
    ));
    out.push_str(&format!(
        "{:-<24} {:-<9} {:-<9} {:-<6} {:-<8} {:-<7}\n",
        "", "", "", "", "", ""
    ));
    for m in markers.into_iter().take(top_n) {
        out.push_str(&format!(
            "{:<24} {:>9.4} {:>9.4} {:>6.2} {:<8} {:<7}\n",
            truncate(&m.station_name, 24),
            m.latitude,
            m.longitude,
            m.risk_index,
            m.tier.display_name(),
            m.color,
        ));
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        RiskTier, TrackSegment, WeatherReading, WeatherSource,
    };

    #[test]
    fn station_table_shows_tier_labels() {
        let rows = vec![StationAssessment {
            segment: TrackSegment {
                station_name: "Chennai Beach".to_string(),
                station_code: Some("MSB".to_string()),
                state_name: "Tamil Nadu".to_string(),
                latitude: 13.0913,
                longitude: 80.2837,
                track_age_years: 35.0,
            },
            weather: WeatherReading {
                temperature_celsius: 38.0,
                humidity_percent: 60.0,
                solar_radiation_w_m2: 800.0,
            },
            source: WeatherSource::Demo,
            assessment: RiskAssessment {
                risk_index: 0.72,
                tier: RiskTier::High,
            },
        }];
        let table = format_station_table(&rows);
        assert!(table.contains("Chennai Beach"));
        assert!(table.contains("HIGH"));
        assert!(table.contains("0.72"));
    }

    #[test]
    fn truncate_caps_long_names() {
        let name = "An Unreasonably Long Station Name Indeed";
        let t = truncate(name, 10);
        assert_eq!(t.chars().count(), 10);
        assert!(t.ends_with('.'));
    }

    #[test]
    fn assessment_output_names_the_status() {
        let inputs = RiskInputs {
            weather: WeatherReading {
                temperature_celsius: 20.0,
                humidity_percent: 40.0,
                solar_radiation_w_m2: 300.0,
            },
            track_age_years: 5.0,
        };
        let assessment = RiskAssessment {
            risk_index: 0.27,
            tier: RiskTier::Low,
        };
        let text = format_assessment(&inputs, "heuristic", &assessment);
        assert!(text.contains("SAFE: Normal Operations"));
        assert!(text.contains("0.27"));
    }
}
