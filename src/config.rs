//! Engine configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Product codes priced by the investment-linked calculator
pub const DEFAULT_INVESTMENT_LINKED_CODES: [&str; 2] = ["UL01", "UL02"];

fn default_per_thousand_unit() -> f64 { 1000.0 }
fn default_investment_linked_codes() -> Vec<String> {
    DEFAULT_INVESTMENT_LINKED_CODES.iter().map(|c| c.to_string()).collect()
}
fn default_investment_linked_min_premium() -> f64 { 7_000_000.0 }

/// Errors raised while loading or validating an engine config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid engine config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("per_thousand_unit must be finite and greater than 0, got {0}")]
    InvalidUnit(f64),

    #[error("investment_linked_min_premium must be finite and not negative, got {0}")]
    InvalidMinPremium(f64),
}

/// Tunables for the fee calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Sum-assured unit that per-thousand rates apply to (default: 1000)
    #[serde(default = "default_per_thousand_unit")]
    pub per_thousand_unit: f64,

    /// Age/gender product codes delegated to the investment-linked calculator
    #[serde(default = "default_investment_linked_codes")]
    pub investment_linked_codes: Vec<String>,

    /// Floor on the investment-linked planned annual premium (default: 7,000,000)
    #[serde(default = "default_investment_linked_min_premium")]
    pub investment_linked_min_premium: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            per_thousand_unit: default_per_thousand_unit(),
            investment_linked_codes: default_investment_linked_codes(),
            investment_linked_min_premium: default_investment_linked_min_premium(),
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file and validate
    pub fn from_json_path(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()
    }

    /// Parse from a JSON string and validate
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Reject values that would make per-thousand fees infinite or negative
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.per_thousand_unit.is_finite() || self.per_thousand_unit <= 0.0 {
            return Err(ConfigError::InvalidUnit(self.per_thousand_unit));
        }
        let min_premium = self.investment_linked_min_premium;
        if !min_premium.is_finite() || min_premium < 0.0 {
            return Err(ConfigError::InvalidMinPremium(min_premium));
        }
        Ok(self)
    }

    /// Whether a product code is priced as investment-linked
    pub fn is_investment_linked(&self, product_code: &str) -> bool {
        let code = product_code.trim();
        self.investment_linked_codes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(code))
    }

    /// Number of per-thousand units in a sum assured
    pub fn units(&self, sum_assured: f64) -> f64 {
        sum_assured / self.per_thousand_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.per_thousand_unit, 1000.0);
        assert!(config.is_investment_linked("ul01"));
        assert!(config.is_investment_linked(" UL02 "));
        assert!(!config.is_investment_linked("CI01"));
    }

    #[test]
    fn test_rejects_zero_or_negative_unit() {
        for json in [
            r#"{ "per_thousand_unit": 0 }"#,
            r#"{ "per_thousand_unit": -1000 }"#,
        ] {
            assert!(matches!(
                EngineConfig::from_json_str(json),
                Err(ConfigError::InvalidUnit(_))
            ));
        }

        let nan = EngineConfig { per_thousand_unit: f64::NAN, ..EngineConfig::default() };
        assert!(matches!(nan.validate(), Err(ConfigError::InvalidUnit(_))));
    }

    #[test]
    fn test_rejects_negative_min_premium() {
        let err = EngineConfig::from_json_str(r#"{ "investment_linked_min_premium": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMinPremium(v) if v == -1.0));

        let inf = EngineConfig { investment_linked_min_premium: f64::INFINITY, ..EngineConfig::default() };
        assert!(matches!(inf.validate(), Err(ConfigError::InvalidMinPremium(_))));
    }

    #[test]
    fn test_valid_config_passes() {
        let config = EngineConfig::from_json_str(r#"{ "per_thousand_unit": 1000000 }"#).unwrap();
        assert_eq!(config.per_thousand_unit, 1_000_000.0);
        assert!(EngineConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_partial_override() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "investment_linked_codes": ["ILP"] }"#).unwrap();
        assert!(config.is_investment_linked("ILP"));
        assert!(!config.is_investment_linked("UL01"));
        assert_eq!(config.investment_linked_min_premium, 7_000_000.0);
    }
}
