//! Eligibility screening for synthesized candidate profiles.
//!
//! Rules run in a fixed order and every failing rule contributes a reason;
//! there is no short-circuiting, so verdicts are deterministic for a given
//! profile and criteria:
//!
//! 1. age within the inclusion range
//! 2. HbA1c at or above the inclusion floor
//! 3. required condition present
//! 4. BMI at or below the exclusion ceiling (when configured)
//! 5. prohibited medication absent (when configured)

use tracing::debug;

use trialgen_model::{
    CriteriaConfig, EligibilityVerdict, ExclusionCriteria, InclusionCriteria, PatientProfile,
};

/// Screen one candidate profile against the configured criteria.
///
/// Malformed criteria are the caller's contract violation; run
/// [`CriteriaConfig::validate`] before screening a batch.
pub fn evaluate(profile: &PatientProfile, criteria: &CriteriaConfig) -> EligibilityVerdict {
    let mut reasons = Vec::new();
    if let Some(reason) = age_violation(profile, &criteria.inclusion) {
        reasons.push(reason);
    }
    if let Some(reason) = hba1c_violation(profile, &criteria.inclusion) {
        reasons.push(reason);
    }
    if let Some(reason) = required_condition_violation(profile, &criteria.inclusion) {
        reasons.push(reason);
    }
    if let Some(reason) = bmi_violation(profile, &criteria.exclusion) {
        reasons.push(reason);
    }
    if let Some(reason) = prohibited_medication_violation(profile, &criteria.exclusion) {
        reasons.push(reason);
    }
    let verdict = EligibilityVerdict::from_reasons(reasons);
    debug!(
        eligible = verdict.eligible,
        violations = verdict.reasons.len(),
        "screened profile"
    );
    verdict
}

fn age_violation(profile: &PatientProfile, inclusion: &InclusionCriteria) -> Option<String> {
    if (inclusion.min_age..=inclusion.max_age).contains(&profile.age) {
        return None;
    }
    Some(format!(
        "Age {} outside range [{}-{}]",
        profile.age, inclusion.min_age, inclusion.max_age
    ))
}

fn hba1c_violation(profile: &PatientProfile, inclusion: &InclusionCriteria) -> Option<String> {
    if profile.hba1c >= inclusion.min_hba1c {
        return None;
    }
    Some(format!(
        "HbA1c {:.1}% is below minimum of {}%",
        profile.hba1c, inclusion.min_hba1c
    ))
}

fn required_condition_violation(
    profile: &PatientProfile,
    inclusion: &InclusionCriteria,
) -> Option<String> {
    if profile.has_condition(&inclusion.required_condition) {
        return None;
    }
    Some(format!(
        "Missing required condition: {}",
        inclusion.required_condition
    ))
}

fn bmi_violation(profile: &PatientProfile, exclusion: &ExclusionCriteria) -> Option<String> {
    let max_bmi = exclusion.max_bmi?;
    if profile.bmi <= max_bmi {
        return None;
    }
    Some(format!(
        "BMI {:.1} exceeds maximum of {max_bmi}",
        profile.bmi
    ))
}

fn prohibited_medication_violation(
    profile: &PatientProfile,
    exclusion: &ExclusionCriteria,
) -> Option<String> {
    let medication = exclusion.prohibited_medication.as_deref()?;
    if !profile.takes_medication(medication) {
        return None;
    }
    Some(format!(
        "Patient is taking a prohibited medication: {medication}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trialgen_model::{Ethnicity, Sex};

    fn test_profile() -> PatientProfile {
        PatientProfile {
            age: 55,
            sex: Sex::Male,
            ethnicity: Ethnicity::White,
            hba1c: 7.0,
            bmi: 30.0,
            conditions: vec!["Type 2 Diabetes".to_string()],
            medications: vec![],
        }
    }

    #[test]
    fn age_violation_names_bounds() {
        let mut profile = test_profile();
        profile.age = 39;
        let reason = age_violation(&profile, &InclusionCriteria::default()).unwrap();
        assert_eq!(reason, "Age 39 outside range [40-65]");
    }

    #[test]
    fn bmi_rule_skipped_when_unconfigured() {
        let mut profile = test_profile();
        profile.bmi = 55.0;
        assert!(bmi_violation(&profile, &ExclusionCriteria::default()).is_none());
    }

    #[test]
    fn boundary_values_are_inclusive() {
        let inclusion = InclusionCriteria::default();
        let mut profile = test_profile();
        profile.age = 40;
        assert!(age_violation(&profile, &inclusion).is_none());
        profile.age = 65;
        assert!(age_violation(&profile, &inclusion).is_none());
        profile.hba1c = 6.5;
        assert!(hba1c_violation(&profile, &inclusion).is_none());
        let exclusion = CriteriaConfig::default().exclusion;
        profile.bmi = 40.0;
        assert!(bmi_violation(&profile, &exclusion).is_none());
    }
}
