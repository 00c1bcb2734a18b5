//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - weather and station records typed at the CSV boundary (`RawWeatherRow`,
//!   `StationRow`, `TrackSegment`)
//! - training rows (`RailStressSample`)
//! - scorer outputs (`RiskAssessment`, `RiskTier`)
//! - per-command run configuration (`PrepareConfig`, `ScoreConfig`, ...)

pub mod types;

pub use types::*;
