//! Fee calculation: rate-table resolution with legacy calculators as fallback
//!
//! # Dispatch
//!
//! A product with a non-empty rate table and a calculation config is always
//! resolved from that table. Anything else is routed on its calculation type
//! to one of the hardcoded calculators in [`legacy`].
//!
//! Every calculator returns `Result<f64, NoRate>`. Callers that need the old
//! zero-on-failure behaviour use [`calculate_product_fee_or_zero`] or
//! [`FeeCalculator::calculate_or_zero`].
//!
//! ```rust,ignore
//! let catalog = ProductCatalog::load_default()?;
//! let product = catalog.get("HC01").unwrap();
//! let params = CalculatorParams::new(6, Gender::Male, 0.0).with_plan("Cơ bản");
//!
//! let quote = FeeCalculator::default().calculate(&FeeRequest::for_product(product, &params))?;
//! assert_eq!(quote.amount, 1_164_000.0);
//! ```

pub mod dynamic;
mod error;
pub mod legacy;

pub use error::NoRate;

use crate::config::{ConfigError, EngineConfig};
use crate::params::CalculatorParams;
use crate::product::{CalculationType, Product};
use serde::Serialize;

/// Which calculator produced a fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeSource {
    RateTable,
    HealthCare,
    Accident,
    AgeGender,
    AgeGenderTerm,
    InvestmentLinked,
}

/// A computed fee and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeQuote {
    pub amount: f64,
    pub source: FeeSource,
}

impl FeeQuote {
    fn new(amount: f64, source: FeeSource) -> Self {
        Self { amount, source }
    }
}

/// Everything the dispatcher needs for one calculation
#[derive(Debug, Clone, Copy)]
pub struct FeeRequest<'a> {
    /// Catalog entry, consulted for its rate table
    pub product: Option<&'a Product>,
    pub calculation_type: CalculationType,
    pub product_code: &'a str,
    pub params: &'a CalculatorParams,
}

impl<'a> FeeRequest<'a> {
    /// Request for a catalog product; type and code come from the product
    pub fn for_product(product: &'a Product, params: &'a CalculatorParams) -> Self {
        Self {
            product: Some(product),
            calculation_type: product.calculation_type,
            product_code: &product.code,
            params,
        }
    }

    /// Request without a catalog entry, legacy calculators only
    pub fn legacy(
        calculation_type: CalculationType,
        product_code: &'a str,
        params: &'a CalculatorParams,
    ) -> Self {
        Self {
            product: None,
            calculation_type,
            product_code,
            params,
        }
    }
}

/// Stateless fee calculator
#[derive(Debug, Clone, Default)]
pub struct FeeCalculator {
    config: EngineConfig,
}

impl FeeCalculator {
    /// Build a calculator; the config is validated first
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self { config: config.validate()? })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute a fee, or say why none applies
    pub fn calculate(&self, request: &FeeRequest<'_>) -> Result<FeeQuote, NoRate> {
        let params = request.params;

        if let Some(product) = request.product.filter(|p| p.uses_rate_table()) {
            if let (Some(rows), Some(calc_config)) = (&product.rate_table, &product.calc_config) {
                return dynamic::resolve(rows, calc_config, params, &self.config)
                    .map(|fee| FeeQuote::new(fee, FeeSource::RateTable));
            }
        }

        let code = request.product_code;
        let result = match request.calculation_type {
            CalculationType::HealthCare => {
                legacy::health_care(params).map(|fee| FeeQuote::new(fee, FeeSource::HealthCare))
            }
            CalculationType::Accident => legacy::accident(params, &self.config)
                .map(|fee| FeeQuote::new(fee, FeeSource::Accident)),
            CalculationType::AgeGender => {
                let source = if self.config.is_investment_linked(code) {
                    FeeSource::InvestmentLinked
                } else {
                    FeeSource::AgeGender
                };
                legacy::age_gender(code, params, &self.config).map(|fee| FeeQuote::new(fee, source))
            }
            CalculationType::AgeGenderTerm => legacy::age_gender_term(code, params, &self.config)
                .map(|fee| FeeQuote::new(fee, FeeSource::AgeGenderTerm)),
            CalculationType::Dynamic => Err(NoRate::NoMatchingRow),
            other => {
                log::warn!("Product {}: no calculator for type {}", code, other.as_str());
                Err(NoRate::UnknownCalculationType(other))
            }
        };

        if let Err(reason) = &result {
            log::debug!("Product {}: {}", code, reason);
        }
        result
    }

    /// Compute a fee, folding every miss into 0
    pub fn calculate_or_zero(&self, request: &FeeRequest<'_>) -> f64 {
        self.calculate(request).map(|quote| quote.amount).unwrap_or(0.0)
    }
}

/// Compute a fee with the default engine configuration
pub fn calculate_product_fee(request: &FeeRequest<'_>) -> Result<FeeQuote, NoRate> {
    FeeCalculator::default().calculate(request)
}

/// Compute a fee with the default configuration; 0 when no rate applies
pub fn calculate_product_fee_or_zero(request: &FeeRequest<'_>) -> f64 {
    FeeCalculator::default().calculate_or_zero(request)
}
