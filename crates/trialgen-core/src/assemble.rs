//! Assembly of canonical records from screened profiles.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rand::Rng;
use tracing::debug;

use trialgen_model::{
    ConditionEntry, EligibilityVerdict, LAB_BMI, LAB_HBA1C, LabResultEntry, MedicationEntry,
    PatientProfile, PatientRecord, ReferenceData,
};

/// Builds canonical nested records from a profile, its verdict, and the
/// reference-data tables.
///
/// Generated names without a reference mapping are skipped silently; the
/// skip is documented data-quality policy, not an error.
#[derive(Debug, Clone)]
pub struct RecordAssembler<'a> {
    reference: &'a ReferenceData,
    current_year: i32,
}

impl<'a> RecordAssembler<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self {
            reference,
            current_year: Utc::now().year(),
        }
    }

    /// Pin the year used as the diagnosis-date anchor (test fixtures).
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Assemble the canonical record for one screened candidate.
    ///
    /// Output field order and nesting follow the canonical schema exactly;
    /// downstream flattening and the CSV column order depend on it.
    pub fn assemble<R: Rng + ?Sized>(
        &self,
        profile: &PatientProfile,
        verdict: &EligibilityVerdict,
        patient_id: &str,
        rng: &mut R,
    ) -> PatientRecord {
        let mut conditions = Vec::new();
        for name in &profile.conditions {
            let Some(entry) = self.reference.condition(name) else {
                debug!(condition = %name, "no reference mapping, dropping entry");
                continue;
            };
            conditions.push(ConditionEntry {
                condition_name: name.clone(),
                icd_10_code: entry.icd_10_code.clone(),
                date_of_diagnosis: self.diagnosis_date(profile.age, rng),
            });
        }

        let mut medications = Vec::new();
        for name in &profile.medications {
            let Some(entry) = self.reference.medication(name) else {
                debug!(medication = %name, "no reference mapping, dropping entry");
                continue;
            };
            medications.push(MedicationEntry {
                medication_name: name.clone(),
                rx_norm_code: entry.rx_norm_code.clone(),
                dosage: entry.dosage.clone(),
                frequency: entry.frequency.clone(),
            });
        }

        let mut lab_results = Vec::new();
        for (key, value) in [(LAB_HBA1C, profile.hba1c), (LAB_BMI, profile.bmi)] {
            let Some(entry) = self.reference.lab(key) else {
                debug!(lab = %key, "no reference mapping, dropping entry");
                continue;
            };
            lab_results.push(LabResultEntry {
                test_name: entry.test_name.clone(),
                loinc_code: entry.loinc_code.clone(),
                value,
                units: entry.units.clone(),
            });
        }

        PatientRecord {
            patient_id: patient_id.to_string(),
            age: profile.age,
            sex: profile.sex,
            ethnicity: profile.ethnicity,
            trial_eligible: verdict.eligible,
            ineligibility_reasons: verdict.reasons.clone(),
            conditions,
            medications,
            lab_results,
        }
    }

    /// Approximate diagnosis date: anchored as if diagnosed up to 30 years
    /// after birth, then a uniform day within the 1-5 years before that
    /// anchor. The arithmetic is intentionally loose and kept as-is.
    fn diagnosis_date<R: Rng + ?Sized>(&self, age: u32, rng: &mut R) -> String {
        let anchor_year = self.current_year - age as i32 + 30;
        let start_year = anchor_year - rng.random_range(1..=5);
        let start = NaiveDate::from_ymd_opt(start_year, 1, 1).expect("jan 1 is a valid date");
        let end = NaiveDate::from_ymd_opt(anchor_year, 1, 1).expect("jan 1 is a valid date");
        let span = (end - start).num_days();
        let date = start + Duration::days(rng.random_range(0..=span));
        date.format("%Y-%m-%d").to_string()
    }
}
