//! Calculator inputs: insured's age, gender, sum assured and plan attributes

use crate::text::normalize_label;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accepted spellings per gender, in folded form
const MALE_LABELS: &[&str] = &["nam", "male", "m", "trai", "1"];
const FEMALE_LABELS: &[&str] = &["nu", "female", "f", "gai", "0"];
const OTHER_LABELS: &[&str] = &["khac", "other", "o"];

/// Gender of the insured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Gender::Male => MALE_LABELS,
            Gender::Female => FEMALE_LABELS,
            Gender::Other => OTHER_LABELS,
        }
    }

    /// Whether a free-text cell ("Nữ", "F", "1", ...) denotes this gender
    pub fn matches_label(&self, label: &str) -> bool {
        let folded = normalize_label(label);
        self.synonyms().contains(&folded.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Gender::Male, Gender::Female, Gender::Other]
            .into_iter()
            .find(|g| g.matches_label(s))
            .ok_or_else(|| format!("Unknown gender: {}", s))
    }
}

/// Inputs to a single fee calculation
///
/// Callers supply already-validated values; the engine does no range checking
/// beyond what the rate tables themselves imply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorParams {
    /// Age of the insured in whole years
    pub age: u32,

    pub gender: Gender,

    /// Sum assured (STBH) in currency units
    pub sum_assured: f64,

    /// Policy term in years
    #[serde(default)]
    pub term: Option<u32>,

    /// Occupation risk class, 1 (office) to 4 (hazardous)
    #[serde(default)]
    pub occupation_group: Option<u8>,

    /// Health-care plan label
    #[serde(default)]
    pub plan: Option<String>,

    /// Health-care package label
    #[serde(default)]
    pub package: Option<String>,
}

impl CalculatorParams {
    pub fn new(age: u32, gender: Gender, sum_assured: f64) -> Self {
        Self {
            age,
            gender,
            sum_assured,
            term: None,
            occupation_group: None,
            plan: None,
            package: None,
        }
    }

    pub fn with_term(mut self, term: u32) -> Self {
        self.term = Some(term);
        self
    }

    pub fn with_occupation_group(mut self, group: u8) -> Self {
        self.occupation_group = Some(group);
        self
    }

    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

/// Age in completed years on a given date
///
/// Birthdays falling after `on` within the year do not count yet. Dates of
/// birth after `on` give 0.
pub fn age_on(date_of_birth: NaiveDate, on: NaiveDate) -> u32 {
    if on <= date_of_birth {
        return 0;
    }
    let mut years = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_synonyms() {
        assert!(Gender::Male.matches_label("Nam"));
        assert!(Gender::Male.matches_label("TRAI"));
        assert!(Gender::Male.matches_label("1"));
        assert!(Gender::Female.matches_label("Nữ"));
        assert!(Gender::Female.matches_label("Gái"));
        assert!(!Gender::Male.matches_label("Nữ"));
        assert!(!Gender::Female.matches_label("Nam"));
        assert!(!Gender::Male.matches_label("mal"));
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("nữ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("khác".parse::<Gender>().unwrap(), Gender::Other);
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn test_age_on() {
        let dob = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2026, 6, 14).unwrap()), 35);
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()), 36);
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(1989, 1, 1).unwrap()), 0);
    }

    #[test]
    fn test_params_builder() {
        let params = CalculatorParams::new(30, Gender::Female, 500_000_000.0)
            .with_term(10)
            .with_occupation_group(2)
            .with_plan("Cơ bản");

        assert_eq!(params.term, Some(10));
        assert_eq!(params.occupation_group, Some(2));
        assert_eq!(params.plan.as_deref(), Some("Cơ bản"));
        assert_eq!(params.package, None);
    }
}
