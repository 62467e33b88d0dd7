//! Reference-data lookup tables used to enrich records.
//!
//! Conditions map to ICD-10 codes, medications to RxNorm codes with common
//! dosages and frequencies, and lab keys to LOINC-coded test descriptors.
//! The codes are opaque enrichment strings here; no terminology semantics
//! are modeled.
//!
//! Generated entries without a mapping are silently dropped from the
//! enriched record. That skip is documented data-quality policy, not an
//! error surface.

use std::collections::BTreeMap;

/// ICD-10 enrichment for one condition name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionRef {
    pub icd_10_code: String,
}

/// RxNorm enrichment for one medication name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationRef {
    pub rx_norm_code: String,
    pub dosage: String,
    pub frequency: String,
}

/// LOINC enrichment for one lab key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabRef {
    pub test_name: String,
    pub loinc_code: String,
    pub units: String,
}

/// Lab key for glycated hemoglobin.
pub const LAB_HBA1C: &str = "hba1c";
/// Lab key for body mass index.
pub const LAB_BMI: &str = "bmi";

/// Static lookup tables consulted by the record assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    conditions: BTreeMap<String, ConditionRef>,
    medications: BTreeMap<String, MedicationRef>,
    labs: BTreeMap<String, LabRef>,
}

impl ReferenceData {
    /// An empty table set; useful for exercising the lookup-miss policy.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in tables covering the generation vocabulary.
    pub fn builtin() -> Self {
        let mut reference = Self::default();
        reference.insert_condition("Type 2 Diabetes", "E11.9");
        reference.insert_condition("Hypertension", "I10");
        reference.insert_condition("Hyperlipidemia", "E78.5");
        reference.insert_condition("Obesity", "E66.9");
        reference.insert_medication("Metformin", "860975", "500 mg", "twice daily");
        reference.insert_medication("Lisinopril", "314076", "10 mg", "once daily");
        reference.insert_medication("Atorvastatin", "860364", "20 mg", "once daily");
        reference.insert_medication("Lifestyle Therapy", "N/A", "N/A", "ongoing");
        reference.insert_lab(LAB_HBA1C, "Hemoglobin A1c", "4548-4", "%");
        reference.insert_lab(LAB_BMI, "Body Mass Index", "39156-5", "kg/m^2");
        reference
    }

    pub fn insert_condition(&mut self, name: &str, icd_10_code: &str) {
        self.conditions.insert(
            name.to_string(),
            ConditionRef {
                icd_10_code: icd_10_code.to_string(),
            },
        );
    }

    pub fn insert_medication(&mut self, name: &str, rx_norm_code: &str, dosage: &str, frequency: &str) {
        self.medications.insert(
            name.to_string(),
            MedicationRef {
                rx_norm_code: rx_norm_code.to_string(),
                dosage: dosage.to_string(),
                frequency: frequency.to_string(),
            },
        );
    }

    pub fn insert_lab(&mut self, key: &str, test_name: &str, loinc_code: &str, units: &str) {
        self.labs.insert(
            key.to_string(),
            LabRef {
                test_name: test_name.to_string(),
                loinc_code: loinc_code.to_string(),
                units: units.to_string(),
            },
        );
    }

    pub fn condition(&self, name: &str) -> Option<&ConditionRef> {
        self.conditions.get(name)
    }

    pub fn medication(&self, name: &str) -> Option<&MedicationRef> {
        self.medications.get(name)
    }

    pub fn lab(&self, key: &str) -> Option<&LabRef> {
        self.labs.get(key)
    }

    pub fn conditions(&self) -> impl Iterator<Item = (&str, &ConditionRef)> {
        self.conditions.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn medications(&self) -> impl Iterator<Item = (&str, &MedicationRef)> {
        self.medications.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn labs(&self) -> impl Iterator<Item = (&str, &LabRef)> {
        self.labs.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_generation_vocabulary() {
        let reference = ReferenceData::builtin();
        for condition in ["Type 2 Diabetes", "Hypertension", "Hyperlipidemia", "Obesity"] {
            assert!(reference.condition(condition).is_some(), "missing {condition}");
        }
        for medication in ["Metformin", "Lisinopril", "Atorvastatin", "Lifestyle Therapy"] {
            assert!(reference.medication(medication).is_some(), "missing {medication}");
        }
        assert_eq!(reference.lab(LAB_HBA1C).unwrap().loinc_code, "4548-4");
        assert_eq!(reference.lab(LAB_BMI).unwrap().units, "kg/m^2");
    }

    #[test]
    fn unknown_names_miss() {
        let reference = ReferenceData::builtin();
        assert!(reference.condition("Gout").is_none());
        assert!(reference.medication("Insulin").is_none());
        assert!(reference.lab("ldl").is_none());
    }
}
