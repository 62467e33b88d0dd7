//! Denormalized row view for tabular export.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::demographics::{Ethnicity, Sex};

/// Category tag for a flattened row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// Demographics-only row for a patient without sub-records.
    #[default]
    #[serde(rename = "")]
    None,
    Condition,
    Medication,
    #[serde(rename = "Lab Result")]
    LabResult,
}

impl RecordType {
    /// Returns the tag as it appears in the CSV export.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::None => "",
            RecordType::Condition => "Condition",
            RecordType::Medication => "Medication",
            RecordType::LabResult => "Lab Result",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One denormalized export row.
///
/// Field order matches the flat-file header contract:
/// `patient_id, age, sex, ethnicity, trial_eligible, ineligibility_reasons,
/// record_type, name, code, details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRow {
    pub patient_id: String,
    pub age: u32,
    pub sex: Sex,
    pub ethnicity: Ethnicity,
    pub trial_eligible: bool,
    /// All ineligibility reasons joined with `"; "`, identical on every row
    /// of the same patient.
    pub ineligibility_reasons: String,
    pub record_type: RecordType,
    pub name: String,
    pub code: String,
    pub details: String,
}
