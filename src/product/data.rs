//! Product catalog entries and their generic rate tables

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// How a product's fee is computed when it carries no usable rate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationType {
    /// Per-age fee table selected by plan and package
    HealthCare,
    /// Per-thousand rate by occupation group
    Accident,
    /// Per-thousand rate by age and gender, nearest-age fallback
    AgeGender,
    /// Per-thousand rate by age, gender and term, nearest-age fallback
    AgeGenderTerm,
    /// Fee resolved only from the product's own rate table
    Dynamic,
    /// Any tag this engine does not recognise
    #[serde(other)]
    Unknown,
}

impl CalculationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationType::HealthCare => "health_care",
            CalculationType::Accident => "accident",
            CalculationType::AgeGender => "age_gender",
            CalculationType::AgeGenderTerm => "age_gender_term",
            CalculationType::Dynamic => "dynamic",
            CalculationType::Unknown => "unknown",
        }
    }

    /// Parse a tag, mapping anything unrecognised to `Unknown`
    pub fn from_tag(tag: &str) -> Self {
        match crate::text::normalize_tag(tag).as_str() {
            "health care" => CalculationType::HealthCare,
            "accident" => CalculationType::Accident,
            "age gender" => CalculationType::AgeGender,
            "age gender term" => CalculationType::AgeGenderTerm,
            "dynamic" => CalculationType::Dynamic,
            _ => CalculationType::Unknown,
        }
    }
}

/// Formula applied to the rate picked from a rate table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Formula {
    /// round(sum_assured / 1000 * rate)
    RateBased,
    /// The rate is the fee
    FixedFee,
    /// Unrecognised or missing tag; resolves to no rate
    #[default]
    #[serde(other)]
    Unsupported,
}

/// A single cell of a rate table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Numeric value of the cell; text is parsed after trimming
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            Cell::Number(_) => None,
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Cell::Empty => None,
        }
    }

    /// Text value of the cell; numbers are rendered without a trailing ".0"
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Cell::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Cell::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                Some(Cow::Owned(format!("{}", *n as i64)))
            }
            Cell::Number(n) => Some(Cow::Owned(n.to_string())),
            Cell::Empty => None,
        }
    }

    /// Blank cells count as "column not defined" for matching
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Interpret raw CSV text: numbers become numeric, blanks become empty
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else if let Ok(n) = trimmed.parse::<f64>() {
            Cell::Number(n)
        } else {
            Cell::Text(trimmed.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// One row of a rate table: column name -> cell
pub type RateRow = BTreeMap<String, Cell>;

/// Which rate-table column holds each lookup dimension
///
/// A dimension with no column configured is not filtered on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupKeys {
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub package: Option<String>,
}

/// Column mapping and formula for data-driven fee lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub lookup_keys: LookupKeys,

    /// Column holding the rate (or fee) of the matched row
    pub result_column: String,

    #[serde(default)]
    pub formula: Formula,
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product code, unique within a catalog
    pub code: String,

    #[serde(default)]
    pub name: String,

    pub calculation_type: CalculationType,

    /// Generic rate table, in lookup order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_table: Option<Vec<RateRow>>,

    /// CSV file holding the rate table, relative to the catalog file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_table_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calc_config: Option<CalcConfig>,
}

impl Product {
    /// Create a product without a rate table
    pub fn new(code: impl Into<String>, name: impl Into<String>, calculation_type: CalculationType) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            calculation_type,
            rate_table: None,
            rate_table_file: None,
            calc_config: None,
        }
    }

    /// Attach a rate table and its configuration
    pub fn with_rate_table(mut self, rows: Vec<RateRow>, config: CalcConfig) -> Self {
        self.rate_table = Some(rows);
        self.calc_config = Some(config);
        self
    }

    /// Non-empty rate table plus a configuration: resolve dynamically
    pub fn uses_rate_table(&self) -> bool {
        let has_rows = self.rate_table.as_ref().is_some_and(|rows| !rows.is_empty());
        has_rows && self.calc_config.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers() {
        assert_eq!(Cell::Number(10.0).as_number(), Some(10.0));
        assert_eq!(Cell::Text(" 3.05 ".into()).as_number(), Some(3.05));
        assert_eq!(Cell::Text("n/a".into()).as_number(), None);
        assert_eq!(Cell::Empty.as_number(), None);
        assert_eq!(Cell::Number(f64::NAN).as_number(), None);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(Cell::Number(10.0).as_text().as_deref(), Some("10"));
        assert_eq!(Cell::Number(2.5).as_text().as_deref(), Some("2.5"));
        assert_eq!(Cell::Text("Nữ".into()).as_text().as_deref(), Some("Nữ"));
        assert!(Cell::Text("  ".into()).is_blank());
        assert!(!Cell::Number(0.0).is_blank());
    }

    #[test]
    fn test_cell_from_raw() {
        assert_eq!(Cell::from_raw("25"), Cell::Number(25.0));
        assert_eq!(Cell::from_raw(" Nam "), Cell::Text("Nam".into()));
        assert_eq!(Cell::from_raw(""), Cell::Empty);
    }

    #[test]
    fn test_calculation_type_serde() {
        let t: CalculationType = serde_json::from_str("\"age_gender_term\"").unwrap();
        assert_eq!(t, CalculationType::AgeGenderTerm);
        let t: CalculationType = serde_json::from_str("\"something_else\"").unwrap();
        assert_eq!(t, CalculationType::Unknown);
        assert_eq!(CalculationType::from_tag("Health-Care"), CalculationType::HealthCare);
        assert_eq!(CalculationType::from_tag("pension"), CalculationType::Unknown);
    }

    #[test]
    fn test_formula_serde() {
        let f: Formula = serde_json::from_str("\"RATE_BASED\"").unwrap();
        assert_eq!(f, Formula::RateBased);
        let f: Formula = serde_json::from_str("\"FIXED_FEE\"").unwrap();
        assert_eq!(f, Formula::FixedFee);
        let f: Formula = serde_json::from_str("\"PERCENT_OF_PREMIUM\"").unwrap();
        assert_eq!(f, Formula::Unsupported);
    }

    #[test]
    fn test_uses_rate_table() {
        let config = CalcConfig {
            lookup_keys: LookupKeys::default(),
            result_column: "rate".into(),
            formula: Formula::RateBased,
        };

        let legacy = Product::new("ACC", "Accident", CalculationType::Accident);
        assert!(!legacy.uses_rate_table());

        let empty = legacy.clone().with_rate_table(Vec::new(), config.clone());
        assert!(!empty.uses_rate_table());

        let mut row = RateRow::new();
        row.insert("rate".into(), Cell::Number(1.0));
        let dynamic = legacy.with_rate_table(vec![row], config);
        assert!(dynamic.uses_rate_table());
    }
}
