//! CLI library components for the synthetic patient generator.

pub mod logging;
