//! Data acquisition and generation.
//!
//! - live weather fetch with fallback (`openweather`)
//! - seeded demo weather + synthetic track ages (`demo`)
//! - training-set synthesis from raw weather rows (`synth`)

pub mod demo;
pub mod openweather;
pub mod synth;

pub use demo::*;
pub use openweather::*;
pub use synth::*;
