//! Screening verdict produced by the eligibility engine.

use serde::{Deserialize, Serialize};

/// Outcome of screening one candidate profile.
///
/// Invariant: `reasons` is non-empty exactly when `eligible` is false, and
/// reason order follows rule-evaluation order, so verdicts compare equal for
/// identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub reasons: Vec<String>,
}

impl EligibilityVerdict {
    /// Build a verdict from collected rule violations; eligible iff none.
    pub fn from_reasons(reasons: Vec<String>) -> Self {
        Self {
            eligible: reasons.is_empty(),
            reasons,
        }
    }

    /// A verdict with no violations.
    pub fn eligible() -> Self {
        Self::from_reasons(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_invariant_holds() {
        assert!(EligibilityVerdict::eligible().eligible);
        let verdict = EligibilityVerdict::from_reasons(vec!["too young".to_string()]);
        assert!(!verdict.eligible);
        assert_eq!(verdict.reasons.len(), 1);
    }
}
