//! Product catalog: products, rate tables, and their loaders

mod data;
pub mod loader;

pub use data::{CalcConfig, CalculationType, Cell, Formula, LookupKeys, Product, RateRow};
pub use loader::{load_rate_table_csv, CatalogError, ProductCatalog, DEFAULT_CATALOG_PATH};
