//! Type-safe demographic enumerations.
//!
//! These enums carry the categorical demographics that appear on every
//! synthesized record. Their canonical string forms are part of the export
//! contract (JSON values and CSV cells), so serialization uses the variant
//! names verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient sex as recorded on the synthetic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// All categories, in sampling order.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Returns the canonical name as it appears in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" => Ok(Sex::Male),
            "FEMALE" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: {s}")),
        }
    }
}

/// Ethnicity categories used by the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ethnicity {
    White,
    Black,
    Hispanic,
    Asian,
    Other,
}

impl Ethnicity {
    /// All categories, in sampling order.
    pub const ALL: [Ethnicity; 5] = [
        Ethnicity::White,
        Ethnicity::Black,
        Ethnicity::Hispanic,
        Ethnicity::Asian,
        Ethnicity::Other,
    ];

    /// Returns the canonical name as it appears in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Ethnicity::White => "White",
            Ethnicity::Black => "Black",
            Ethnicity::Hispanic => "Hispanic",
            Ethnicity::Asian => "Asian",
            Ethnicity::Other => "Other",
        }
    }
}

impl fmt::Display for Ethnicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ethnicity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WHITE" => Ok(Ethnicity::White),
            "BLACK" => Ok(Ethnicity::Black),
            "HISPANIC" => Ok(Ethnicity::Hispanic),
            "ASIAN" => Ok(Ethnicity::Asian),
            "OTHER" => Ok(Ethnicity::Other),
            _ => Err(format!("Unknown ethnicity: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("FEMALE".parse::<Sex>().unwrap(), Sex::Female);
        assert!("Unknown".parse::<Sex>().is_err());
    }

    #[test]
    fn test_ethnicity_from_str() {
        assert_eq!("hispanic".parse::<Ethnicity>().unwrap(), Ethnicity::Hispanic);
        assert_eq!("Other".parse::<Ethnicity>().unwrap(), Ethnicity::Other);
        assert!("Martian".parse::<Ethnicity>().is_err());
    }

    #[test]
    fn test_display_matches_export_form() {
        assert_eq!(Sex::Female.to_string(), "Female");
        assert_eq!(Ethnicity::Black.to_string(), "Black");
    }
}
