//! Fee illustrations: a quote prepared for a named customer and product

use crate::calculator::{FeeCalculator, FeeRequest, FeeSource};
use crate::params::{age_on, CalculatorParams, Gender};
use crate::product::Product;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Customer details relevant to pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    #[serde(default)]
    pub occupation_group: Option<u8>,
}

/// Cover requested on the illustration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageRequest {
    pub sum_assured: f64,
    #[serde(default)]
    pub term: Option<u32>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub package: Option<String>,
}

/// Outcome of pricing an illustration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IllustrationStatus {
    Quoted { source: FeeSource },
    NoRate { reason: String },
}

/// A priced illustration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Illustration {
    pub customer_name: String,
    pub product_code: String,
    pub product_name: String,
    /// Age used for pricing, as of `quoted_on`
    pub age: u32,
    pub quoted_on: NaiveDate,
    pub params: CalculatorParams,
    /// Annual fee; 0 when no rate applied
    pub fee: f64,
    #[serde(flatten)]
    pub status: IllustrationStatus,
    pub created_at: DateTime<Utc>,
}

impl Illustration {
    /// Price `coverage` on `product` for `customer`, with age taken on `quoted_on`
    pub fn prepare(
        calculator: &FeeCalculator,
        customer: &CustomerProfile,
        product: &Product,
        coverage: &CoverageRequest,
        quoted_on: NaiveDate,
    ) -> Self {
        let age = age_on(customer.date_of_birth, quoted_on);
        let params = CalculatorParams {
            age,
            gender: customer.gender,
            sum_assured: coverage.sum_assured,
            term: coverage.term,
            occupation_group: customer.occupation_group,
            plan: coverage.plan.clone(),
            package: coverage.package.clone(),
        };

        let (fee, status) = match calculator.calculate(&FeeRequest::for_product(product, &params)) {
            Ok(quote) => (quote.amount, IllustrationStatus::Quoted { source: quote.source }),
            Err(reason) => {
                log::info!("No rate for {} on {}: {}", customer.full_name, product.code, reason);
                (0.0, IllustrationStatus::NoRate { reason: reason.to_string() })
            }
        };

        Self {
            customer_name: customer.full_name.clone(),
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            age,
            quoted_on,
            params,
            fee,
            status,
            created_at: Utc::now(),
        }
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self.status, IllustrationStatus::Quoted { .. })
    }
}
