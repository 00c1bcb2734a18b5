//! Input/output helpers.
//!
//! - raw weather CSV ingest + validation (`ingest`)
//! - station metadata CSV read/write (`stations`)
//! - training-set and scored-station CSV exports (`export`)
//! - risk-map JSON read/write (`riskmap`)

pub mod export;
pub mod ingest;
pub mod riskmap;
pub mod stations;

pub use export::*;
pub use ingest::*;
pub use riskmap::*;
pub use stations::*;
