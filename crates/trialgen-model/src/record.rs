//! Canonical nested patient record.
//!
//! Field order and nesting are part of the external contract: the JSON
//! document schema, downstream flattening, and CSV column order all depend on
//! it. Serde emits struct fields in declaration order, so the declarations
//! below are the schema.

use serde::{Deserialize, Serialize};

use crate::demographics::{Ethnicity, Sex};

/// An enriched condition entry on the canonical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub condition_name: String,
    pub icd_10_code: String,
    /// Approximate date, `YYYY-MM-DD`.
    pub date_of_diagnosis: String,
}

/// An enriched medication entry on the canonical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub medication_name: String,
    pub rx_norm_code: String,
    pub dosage: String,
    pub frequency: String,
}

/// An enriched lab-result entry on the canonical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResultEntry {
    pub test_name: String,
    pub loinc_code: String,
    pub value: f64,
    pub units: String,
}

/// One synthesized patient, enriched and classified.
///
/// Constructed once by the record assembler and immutable thereafter; owned
/// solely by its producing generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: String,
    pub age: u32,
    pub sex: Sex,
    pub ethnicity: Ethnicity,
    pub trial_eligible: bool,
    pub ineligibility_reasons: Vec<String>,
    pub conditions: Vec<ConditionEntry>,
    pub medications: Vec<MedicationEntry>,
    pub lab_results: Vec<LabResultEntry>,
}

impl PatientRecord {
    /// Total number of sub-records across the three categories.
    pub fn subrecord_count(&self) -> usize {
        self.conditions.len() + self.medications.len() + self.lab_results.len()
    }

    pub fn has_subrecords(&self) -> bool {
        self.subrecord_count() > 0
    }
}
