//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs dataset synthesis / station preprocessing / scoring
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{AssessArgs, Command, PrepareArgs, ScoreArgs, ShowArgs, StationsArgs};
use crate::data::{Synthesizer, resolve_track_ages};
use crate::domain::{
    AgeRange, PrepareConfig, ScoreConfig, StationsConfig, WeatherReading,
};
use crate::error::AppError;
use crate::risk::{RiskInputs, assess, strategy_for};

pub mod pipeline;

/// Entry point for the `railtherm` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `railtherm` and `railtherm --live` to behave like
    // `railtherm score ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Prepare(args) => handle_prepare(args),
        Command::Stations(args) => handle_stations(args),
        Command::Score(args) => handle_score(args),
        Command::Assess(args) => handle_assess(args),
        Command::Show(args) => handle_show(args),
    }
}

fn handle_prepare(args: PrepareArgs) -> Result<(), AppError> {
    let config = prepare_config_from_args(&args);
    let mut synthesizer = Synthesizer::new(config.seed, config.age_range)?;

    // Concatenate per-file outputs in input order.
    let mut samples = Vec::new();
    for path in &config.inputs {
        let table = crate::io::ingest::load_weather_rows(path)?;
        samples.extend(synthesizer.synthesize(&table.rows));
    }

    crate::io::export::write_training_csv(&config.output, &samples)?;

    print!(
        "{}",
        crate::report::format_prepare_summary(config.inputs.len(), &samples)
    );
    println!("Saved to {}", config.output.display());
    Ok(())
}

fn handle_stations(args: StationsArgs) -> Result<(), AppError> {
    let config = stations_config_from_args(&args);
    config.age_range.validate()?;

    let data = crate::io::stations::load_station_rows(&config.input)?;
    for err in &data.row_errors {
        eprintln!(
            "skipped line {} ({}): {}",
            err.line,
            err.station.as_deref().unwrap_or("?"),
            err.message
        );
    }

    let mut rng = seeded_rng(config.seed);
    let segments = resolve_track_ages(&data.rows, &mut rng, config.age_range);
    crate::io::stations::write_stations_csv(&config.output, &segments)?;

    println!(
        "Cleaned {} of {} station rows. Saved to {}",
        segments.len(),
        data.rows_read,
        config.output.display()
    );
    Ok(())
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = score_config_from_args(&args);
    let run = pipeline::run_score(&config)?;

    print!(
        "{}",
        crate::report::format_score_summary(
            &run.summary,
            &config,
            run.index_name,
            run.rows_read,
            run.rows_skipped,
        )
    );

    let ranked = crate::report::rank_by_risk(&run.assessments, config.top_n);
    print!("{}", crate::report::format_station_table(&ranked));

    if let Some(path) = &config.export_csv {
        crate::io::export::write_assessments_csv(path, &run.assessments)?;
    }
    if let Some(path) = &config.export_map {
        crate::io::riskmap::write_risk_map(path, &run.assessments, run.index_name)?;
    }

    Ok(())
}

fn handle_assess(args: AssessArgs) -> Result<(), AppError> {
    let inputs = RiskInputs {
        weather: WeatherReading {
            temperature_celsius: args.temp,
            humidity_percent: args.humidity,
            solar_radiation_w_m2: args.solar,
        },
        track_age_years: args.age,
    };
    let index = strategy_for(args.index);
    let assessment = assess(index.as_ref(), &inputs);

    print!(
        "{}",
        crate::report::format_assessment(&inputs, index.name(), &assessment)
    );
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let map = crate::io::riskmap::read_risk_map(&args.map)?;
    print!("{}", crate::report::format_map_file(&map, args.top));
    Ok(())
}

fn seeded_rng(seed: u64) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    rand::rngs::StdRng::seed_from_u64(seed)
}

pub fn prepare_config_from_args(args: &PrepareArgs) -> PrepareConfig {
    PrepareConfig {
        inputs: args.inputs.clone(),
        output: args.output.clone(),
        age_range: AgeRange {
            min_years: args.age_min,
            max_years: args.age_max,
        },
        seed: args.seed,
    }
}

pub fn stations_config_from_args(args: &StationsArgs) -> StationsConfig {
    StationsConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        age_range: AgeRange {
            min_years: args.age_min,
            max_years: args.age_max,
        },
        seed: args.seed,
    }
}

pub fn score_config_from_args(args: &ScoreArgs) -> ScoreConfig {
    ScoreConfig {
        stations_path: args.stations.clone(),
        live: args.live,
        index: args.index,
        seed: args.seed,
        age_range: AgeRange {
            min_years: args.age_min,
            max_years: args.age_max,
        },
        top_n: args.top,
        export_csv: args.export.clone(),
        export_map: args.export_map.clone(),
    }
}

/// Rewrite argv so `railtherm` defaults to `railtherm score`.
///
/// Rules:
/// - `railtherm`                      -> `railtherm score`
/// - `railtherm --live ...`           -> `railtherm score --live ...`
/// - `railtherm --help/--version/-h`  -> unchanged (top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("score".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(
        arg1.as_str(),
        "prepare" | "stations" | "score" | "assess" | "show"
    );
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "score flags".
    if arg1.starts_with('-') {
        argv.insert(1, "score".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
