//! The record-to-rows flattening transform.

use trialgen_model::{FlatRow, PatientRecord, RecordType};

/// Flatten one record into its denormalized export rows.
///
/// The iterator is lazy and finite. It yields one row per condition, then
/// per medication, then per lab result, preserving each sub-list's order;
/// a record with no sub-records yields exactly one demographics-only row.
/// The record is never mutated, so re-invoking restarts the sequence.
pub fn flatten(record: &PatientRecord) -> FlatRows<'_> {
    let cursor = if record.has_subrecords() {
        Cursor::Conditions(0)
    } else {
        Cursor::Demographics
    };
    FlatRows {
        record,
        reasons: record.ineligibility_reasons.join("; "),
        cursor,
    }
}

/// Lazy row iterator over one patient record.
#[derive(Debug, Clone)]
pub struct FlatRows<'a> {
    record: &'a PatientRecord,
    /// Joined once up front; identical on every row of the patient.
    reasons: String,
    cursor: Cursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Demographics,
    Conditions(usize),
    Medications(usize),
    Labs(usize),
    Done,
}

impl FlatRows<'_> {
    fn base_row(&self) -> FlatRow {
        let record = self.record;
        FlatRow {
            patient_id: record.patient_id.clone(),
            age: record.age,
            sex: record.sex,
            ethnicity: record.ethnicity,
            trial_eligible: record.trial_eligible,
            ineligibility_reasons: self.reasons.clone(),
            record_type: RecordType::None,
            name: String::new(),
            code: String::new(),
            details: String::new(),
        }
    }

    fn remaining(&self) -> usize {
        let record = self.record;
        match self.cursor {
            Cursor::Demographics => 1,
            Cursor::Conditions(index) => {
                record.conditions.len() - index
                    + record.medications.len()
                    + record.lab_results.len()
            }
            Cursor::Medications(index) => {
                record.medications.len() - index + record.lab_results.len()
            }
            Cursor::Labs(index) => record.lab_results.len() - index,
            Cursor::Done => 0,
        }
    }
}

impl Iterator for FlatRows<'_> {
    type Item = FlatRow;

    fn next(&mut self) -> Option<FlatRow> {
        loop {
            match self.cursor {
                Cursor::Demographics => {
                    self.cursor = Cursor::Done;
                    return Some(self.base_row());
                }
                Cursor::Conditions(index) => {
                    let Some(entry) = self.record.conditions.get(index) else {
                        self.cursor = Cursor::Medications(0);
                        continue;
                    };
                    self.cursor = Cursor::Conditions(index + 1);
                    let mut row = self.base_row();
                    row.record_type = RecordType::Condition;
                    row.name = entry.condition_name.clone();
                    row.code = entry.icd_10_code.clone();
                    row.details = format!("Diagnosed: {}", entry.date_of_diagnosis);
                    return Some(row);
                }
                Cursor::Medications(index) => {
                    let Some(entry) = self.record.medications.get(index) else {
                        self.cursor = Cursor::Labs(0);
                        continue;
                    };
                    self.cursor = Cursor::Medications(index + 1);
                    let mut row = self.base_row();
                    row.record_type = RecordType::Medication;
                    row.name = entry.medication_name.clone();
                    row.code = entry.rx_norm_code.clone();
                    row.details = format!("{}, {}", entry.dosage, entry.frequency);
                    return Some(row);
                }
                Cursor::Labs(index) => {
                    let Some(entry) = self.record.lab_results.get(index) else {
                        self.cursor = Cursor::Done;
                        continue;
                    };
                    self.cursor = Cursor::Labs(index + 1);
                    let mut row = self.base_row();
                    row.record_type = RecordType::LabResult;
                    row.name = entry.test_name.clone();
                    row.code = entry.loinc_code.clone();
                    row.details = format!("Value: {:.1} {}", entry.value, entry.units);
                    return Some(row);
                }
                Cursor::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FlatRows<'_> {}
