//! Generation core: profile synthesis, record assembly, and the batch
//! pipeline.
//!
//! - **synth**: correlated random synthesis of candidate profiles
//! - **assemble**: reference-data enrichment into canonical records
//! - **pipeline**: the `generate_batch` entry point

pub mod assemble;
pub mod pipeline;
pub mod synth;

pub use assemble::RecordAssembler;
pub use pipeline::{BatchConfig, generate_batch};
pub use synth::{ProfileSynthesizer, REQUIRED_CONDITION, derive_medications, synthesize_profile};
