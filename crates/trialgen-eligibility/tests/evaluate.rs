//! Integration tests for the screening engine against the built-in criteria.

use trialgen_eligibility::evaluate;
use trialgen_model::{CriteriaConfig, Ethnicity, PatientProfile, Sex};

fn make_profile(age: u32, hba1c: f64, bmi: f64) -> PatientProfile {
    PatientProfile {
        age,
        sex: Sex::Female,
        ethnicity: Ethnicity::Hispanic,
        hba1c,
        bmi,
        conditions: vec![],
        medications: vec![],
    }
}

#[test]
fn qualifying_profile_passes_with_no_reasons() {
    let mut profile = make_profile(55, 7.0, 30.0);
    profile.conditions.push("Type 2 Diabetes".to_string());

    let verdict = evaluate(&profile, &CriteriaConfig::default());
    assert!(verdict.eligible);
    assert!(verdict.reasons.is_empty());
}

#[test]
fn failing_profile_collects_every_violation_in_rule_order() {
    let mut profile = make_profile(70, 6.0, 45.0);
    profile.medications.push("Insulin".to_string());

    let verdict = evaluate(&profile, &CriteriaConfig::default());
    assert!(!verdict.eligible);
    assert_eq!(
        verdict.reasons,
        vec![
            "Age 70 outside range [40-65]".to_string(),
            "HbA1c 6.0% is below minimum of 6.5%".to_string(),
            "Missing required condition: Type 2 Diabetes".to_string(),
            "BMI 45.0 exceeds maximum of 40".to_string(),
            "Patient is taking a prohibited medication: Insulin".to_string(),
        ]
    );
}

#[test]
fn evaluation_is_deterministic() {
    let mut profile = make_profile(70, 6.0, 45.0);
    profile.medications.push("Insulin".to_string());
    let criteria = CriteriaConfig::default();

    let first = evaluate(&profile, &criteria);
    let second = evaluate(&profile, &criteria);
    assert_eq!(first, second);
}

#[test]
fn unconfigured_exclusions_never_fire() {
    let mut criteria = CriteriaConfig::default();
    criteria.exclusion.max_bmi = None;
    criteria.exclusion.prohibited_medication = None;

    let mut profile = make_profile(55, 7.0, 60.0);
    profile.conditions.push("Type 2 Diabetes".to_string());
    profile.medications.push("Insulin".to_string());

    let verdict = evaluate(&profile, &criteria);
    assert!(verdict.eligible);
}

#[test]
fn alternative_criteria_do_not_interfere() {
    let mut strict = CriteriaConfig::default();
    strict.inclusion.min_hba1c = 8.0;

    let mut profile = make_profile(55, 7.0, 30.0);
    profile.conditions.push("Type 2 Diabetes".to_string());

    assert!(evaluate(&profile, &CriteriaConfig::default()).eligible);
    let verdict = evaluate(&profile, &strict);
    assert!(!verdict.eligible);
    assert_eq!(
        verdict.reasons,
        vec!["HbA1c 7.0% is below minimum of 8%".to_string()]
    );
}
