//! Export artifacts and cohort statistics for generated batches.
//!
//! - **json**: the nested record document (`patients_detailed.json`)
//! - **csv**: the flattened tabular export (`patients_flattened.csv`)
//! - **stats**: cohort aggregates and real-world benchmark figures

mod csv;
mod json;
mod stats;

pub use csv::{CSV_FILE_NAME, write_patients_csv};
pub use json::{JSON_FILE_NAME, write_patients_json};
pub use stats::{
    AGE_BENCHMARK_MEAN, BMI_BENCHMARK_MEAN, CohortSummary, ETHNICITY_BENCHMARK, SEX_BENCHMARK,
    fraction,
};
