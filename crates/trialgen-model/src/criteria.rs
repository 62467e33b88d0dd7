//! Declarative trial eligibility criteria.
//!
//! Criteria are explicit values handed to the evaluator, never process-wide
//! state, so tests and callers can screen against alternative configurations
//! without interference. `CriteriaConfig::validate` gates a generation run:
//! a malformed configuration is fatal before any patient is synthesized.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrialGenError};

/// Inclusion thresholds a candidate must satisfy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InclusionCriteria {
    /// Minimum age, inclusive.
    pub min_age: u32,
    /// Maximum age, inclusive.
    pub max_age: u32,
    /// Minimum HbA1c, percent.
    pub min_hba1c: f64,
    /// Condition that must be present on the candidate profile.
    pub required_condition: String,
}

impl Default for InclusionCriteria {
    fn default() -> Self {
        Self {
            min_age: 40,
            max_age: 65,
            min_hba1c: 6.5,
            required_condition: "Type 2 Diabetes".to_string(),
        }
    }
}

/// Exclusion thresholds; each rule applies only when configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExclusionCriteria {
    /// Maximum BMI, exclusive of values above it.
    #[serde(default)]
    pub max_bmi: Option<f64>,
    /// A medication the candidate must not be taking.
    #[serde(default)]
    pub prohibited_medication: Option<String>,
}

/// Complete criteria configuration passed into the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaConfig {
    pub inclusion: InclusionCriteria,
    #[serde(default)]
    pub exclusion: ExclusionCriteria,
}

impl Default for CriteriaConfig {
    /// The built-in trial configuration: adults 40-65 with HbA1c >= 6.5% and
    /// Type 2 Diabetes; excluded above BMI 40 or when taking Insulin.
    fn default() -> Self {
        Self {
            inclusion: InclusionCriteria::default(),
            exclusion: ExclusionCriteria {
                max_bmi: Some(40.0),
                prohibited_medication: Some("Insulin".to_string()),
            },
        }
    }
}

impl CriteriaConfig {
    /// Check the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`TrialGenError::Criteria`] for an inverted age range, a
    /// non-finite or non-positive threshold, or a blank condition/medication
    /// name.
    pub fn validate(&self) -> Result<()> {
        let inclusion = &self.inclusion;
        if inclusion.min_age > inclusion.max_age {
            return Err(TrialGenError::Criteria(format!(
                "min_age {} exceeds max_age {}",
                inclusion.min_age, inclusion.max_age
            )));
        }
        if !inclusion.min_hba1c.is_finite() || inclusion.min_hba1c <= 0.0 {
            return Err(TrialGenError::Criteria(format!(
                "min_hba1c must be a positive number, got {}",
                inclusion.min_hba1c
            )));
        }
        if inclusion.required_condition.trim().is_empty() {
            return Err(TrialGenError::Criteria(
                "required_condition must not be blank".to_string(),
            ));
        }
        if let Some(max_bmi) = self.exclusion.max_bmi
            && (!max_bmi.is_finite() || max_bmi <= 0.0)
        {
            return Err(TrialGenError::Criteria(format!(
                "max_bmi must be a positive number, got {max_bmi}"
            )));
        }
        if let Some(medication) = &self.exclusion.prohibited_medication
            && medication.trim().is_empty()
        {
            return Err(TrialGenError::Criteria(
                "prohibited_medication must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_are_valid() {
        assert!(CriteriaConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_age_range_rejected() {
        let mut criteria = CriteriaConfig::default();
        criteria.inclusion.min_age = 70;
        criteria.inclusion.max_age = 40;
        let error = criteria.validate().unwrap_err();
        assert!(error.to_string().contains("min_age 70 exceeds max_age 40"));
    }

    #[test]
    fn blank_required_condition_rejected() {
        let mut criteria = CriteriaConfig::default();
        criteria.inclusion.required_condition = "   ".to_string();
        assert!(criteria.validate().is_err());
    }

    #[test]
    fn unconfigured_exclusions_are_valid() {
        let criteria = CriteriaConfig {
            inclusion: InclusionCriteria::default(),
            exclusion: ExclusionCriteria::default(),
        };
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn negative_max_bmi_rejected() {
        let mut criteria = CriteriaConfig::default();
        criteria.exclusion.max_bmi = Some(-1.0);
        assert!(criteria.validate().is_err());
    }

    #[test]
    fn criteria_deserialize_without_exclusion_section() {
        let criteria: CriteriaConfig = serde_json::from_str(
            r#"{"inclusion":{"min_age":18,"max_age":80,"min_hba1c":7.0,"required_condition":"Type 2 Diabetes"}}"#,
        )
        .unwrap();
        assert_eq!(criteria.inclusion.min_age, 18);
        assert_eq!(criteria.exclusion.max_bmi, None);
        assert!(criteria.validate().is_ok());
    }
}
