//! Premium Engine - fee calculation for insurance sales illustrations
//!
//! This library provides:
//! - Product catalogs with optional data-driven rate tables (JSON + CSV)
//! - Rate-table resolution with accent-insensitive key matching
//! - Legacy calculators (health-care, accident, age/gender, age/gender/term, investment-linked)
//! - A dispatcher that reports *why* no rate applied instead of silently returning 0
//! - Customer illustrations built on top of the dispatcher

pub mod calculator;
pub mod config;
pub mod illustration;
pub mod params;
pub mod product;
pub mod tables;
pub mod text;

// Re-export commonly used types
pub use calculator::{
    calculate_product_fee, calculate_product_fee_or_zero, FeeCalculator, FeeQuote, FeeRequest,
    FeeSource, NoRate,
};
pub use config::{ConfigError, EngineConfig};
pub use illustration::{CoverageRequest, CustomerProfile, Illustration};
pub use params::{CalculatorParams, Gender};
pub use product::{CalculationType, Product, ProductCatalog};
