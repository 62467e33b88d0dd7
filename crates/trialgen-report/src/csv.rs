//! Flat CSV artifact writer.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use trialgen_model::PatientRecord;
use trialgen_transform::flatten;

/// File name of the flattened tabular artifact.
pub const CSV_FILE_NAME: &str = "patients_flattened.csv";

/// Write the flattened tabular artifact under `output_dir`.
///
/// Patient order follows the input slice; within a patient, rows appear in
/// the fixed category order (conditions, medications, lab results). The
/// header row is derived from the `FlatRow` field order.
pub fn write_patients_csv(output_dir: &Path, records: &[PatientRecord]) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(CSV_FILE_NAME);
    let mut writer = csv::Writer::from_path(&output_path)?;
    let mut rows = 0usize;
    for record in records {
        for row in flatten(record) {
            writer.serialize(row)?;
            rows += 1;
        }
    }
    writer.flush()?;
    debug!(rows, path = %output_path.display(), "wrote flat export");
    Ok(output_path)
}
