//! Nested JSON artifact writer.

use std::path::{Path, PathBuf};

use anyhow::Result;

use trialgen_model::PatientRecord;

/// File name of the nested record document.
pub const JSON_FILE_NAME: &str = "patients_detailed.json";

/// Write the nested record document under `output_dir`, one element per
/// patient in generation order.
pub fn write_patients_json(output_dir: &Path, records: &[PatientRecord]) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(JSON_FILE_NAME);
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
