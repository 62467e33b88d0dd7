pub mod criteria;
pub mod demographics;
pub mod error;
pub mod flat;
pub mod profile;
pub mod record;
pub mod reference;
pub mod verdict;

pub use criteria::{CriteriaConfig, ExclusionCriteria, InclusionCriteria};
pub use demographics::{Ethnicity, Sex};
pub use error::{Result, TrialGenError};
pub use flat::{FlatRow, RecordType};
pub use profile::PatientProfile;
pub use record::{ConditionEntry, LabResultEntry, MedicationEntry, PatientRecord};
pub use reference::{
    ConditionRef, LAB_BMI, LAB_HBA1C, LabRef, MedicationRef, ReferenceData,
};
pub use verdict::EligibilityVerdict;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_serialize_round_trip() {
        let criteria = CriteriaConfig::default();
        let json = serde_json::to_string(&criteria).expect("serialize criteria");
        let round: CriteriaConfig = serde_json::from_str(&json).expect("deserialize criteria");
        assert_eq!(round, criteria);
        assert_eq!(round.inclusion.required_condition, "Type 2 Diabetes");
        assert_eq!(round.exclusion.max_bmi, Some(40.0));
    }

    #[test]
    fn profile_membership_helpers() {
        let profile = PatientProfile {
            age: 55,
            sex: Sex::Male,
            ethnicity: Ethnicity::White,
            hba1c: 7.0,
            bmi: 30.0,
            conditions: vec!["Type 2 Diabetes".to_string()],
            medications: vec!["Metformin".to_string()],
        };
        assert!(profile.has_condition("Type 2 Diabetes"));
        assert!(!profile.has_condition("Hypertension"));
        assert!(profile.takes_medication("Metformin"));
        assert!(!profile.takes_medication("Insulin"));
    }
}
