//! `railtherm` library crate.
//!
//! The binary (`railtherm`) is a thin wrapper around this library so that:
//!
//! - scoring and dataset-synthesis logic is testable without spawning processes
//! - modules are reusable (batch jobs, a future service, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod risk;
