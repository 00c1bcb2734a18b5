//! Command-line parsing for the rail thermal buckling risk toolkit.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the scoring/synthesis code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::IndexKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "railtherm", version, about = "Rail Thermal Buckling Risk Toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synthesize a training dataset from raw weather CSV exports.
    Prepare(PrepareArgs),
    /// Clean a raw station table and fill in synthetic track ages.
    Stations(StationsArgs),
    /// Score every station with demo or live weather and print a ranked table.
    Score(ScoreArgs),
    /// Score a single weather reading passed on the command line.
    Assess(AssessArgs),
    /// Print the contents of a previously exported risk-map JSON.
    Show(ShowArgs),
}

/// Options for dataset synthesis.
#[derive(Debug, Parser, Clone)]
pub struct PrepareArgs {
    /// Raw weather CSV (Fahrenheit temps). Repeat to concatenate several files.
    #[arg(short = 'i', long = "input", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output path for the training CSV.
    #[arg(short = 'o', long, default_value = "processed_data.csv")]
    pub output: PathBuf,

    /// Minimum synthetic track age (years), for rows without a real age.
    #[arg(long, default_value_t = 5)]
    pub age_min: u32,

    /// Maximum synthetic track age (years).
    #[arg(long, default_value_t = 40)]
    pub age_max: u32,

    /// Random seed for synthetic track ages.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Options for station preprocessing.
#[derive(Debug, Parser, Clone)]
pub struct StationsArgs {
    /// Raw station metadata CSV.
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Output path for the cleaned station CSV.
    #[arg(short = 'o', long, default_value = "stations_data.csv")]
    pub output: PathBuf,

    /// Minimum synthetic track age (years).
    #[arg(long, default_value_t = 8)]
    pub age_min: u32,

    /// Maximum synthetic track age (years).
    #[arg(long, default_value_t = 35)]
    pub age_max: u32,

    /// Random seed for synthetic track ages.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Options for fleet scoring.
#[derive(Debug, Parser, Clone)]
pub struct ScoreArgs {
    /// Cleaned station CSV (see `railtherm stations`).
    #[arg(short = 's', long, default_value = "stations_data.csv")]
    pub stations: PathBuf,

    /// Fetch live weather per station instead of seeded demo weather.
    #[arg(long)]
    pub live: bool,

    /// Which risk-index strategy to evaluate.
    #[arg(long, value_enum, default_value_t = IndexKind::Heuristic)]
    pub index: IndexKind,

    /// Random seed for demo weather and synthetic ages.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Minimum synthetic track age (years), for stations without a real age.
    #[arg(long, default_value_t = 5)]
    pub age_min: u32,

    /// Maximum synthetic track age (years).
    #[arg(long, default_value_t = 35)]
    pub age_max: u32,

    /// Show the top-N highest-risk stations.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Export per-station results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export a risk-map JSON for a downstream map renderer.
    #[arg(long = "export-map")]
    pub export_map: Option<PathBuf>,
}

/// Options for single-reading assessment.
#[derive(Debug, Parser, Clone)]
pub struct AssessArgs {
    /// Ambient temperature (°C).
    #[arg(long)]
    pub temp: f64,

    /// Relative humidity (%).
    #[arg(long)]
    pub humidity: f64,

    /// Solar radiation (W/m²).
    #[arg(long)]
    pub solar: f64,

    /// Track age (years).
    #[arg(long)]
    pub age: f64,

    /// Which risk-index strategy to evaluate.
    #[arg(long, value_enum, default_value_t = IndexKind::Heuristic)]
    pub index: IndexKind,
}

/// Options for displaying a saved risk map.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Risk-map JSON produced by `railtherm score --export-map`.
    #[arg(long, value_name = "JSON")]
    pub map: PathBuf,

    /// Show the top-N highest-risk markers.
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}
