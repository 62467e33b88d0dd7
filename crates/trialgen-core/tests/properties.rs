//! Property tests for the synthesis invariants.

use proptest::prelude::*;

use trialgen_core::{ProfileSynthesizer, REQUIRED_CONDITION};

fn rounded_to_one_decimal(value: f64) -> bool {
    ((value * 10.0).round() / 10.0 - value).abs() < 1e-9
}

proptest! {
    #[test]
    fn vitals_stay_in_bounds(seed in any::<u64>()) {
        let mut synthesizer = ProfileSynthesizer::from_seed(seed);
        let profile = synthesizer.synthesize();

        prop_assert!((40..=70).contains(&profile.age));
        prop_assert!(profile.hba1c >= 5.0 && profile.hba1c <= 9.5);
        prop_assert!(profile.bmi >= 24.0 && profile.bmi <= 40.0);
        prop_assert!(rounded_to_one_decimal(profile.hba1c));
        prop_assert!(rounded_to_one_decimal(profile.bmi));
    }

    #[test]
    fn medications_track_conditions(seed in any::<u64>()) {
        let mut synthesizer = ProfileSynthesizer::from_seed(seed);
        let profile = synthesizer.synthesize();

        for (condition, medication) in [
            (REQUIRED_CONDITION, "Metformin"),
            ("Hypertension", "Lisinopril"),
            ("Hyperlipidemia", "Atorvastatin"),
            ("Obesity", "Lifestyle Therapy"),
        ] {
            prop_assert_eq!(
                profile.has_condition(condition),
                profile.takes_medication(medication),
                "pairing broken for {} / {}",
                condition,
                medication
            );
        }
        // No medication appears without a matching condition.
        prop_assert!(profile.medications.len() <= profile.conditions.len());
    }
}
