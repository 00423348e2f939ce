//! Load product catalogs (JSON) and rate tables (CSV)

use super::{Cell, Product, RateRow};
use csv::Reader;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the product catalog
pub const DEFAULT_CATALOG_PATH: &str = "data/products/catalog.json";

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid rate table CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("duplicate product code: {0}")]
    DuplicateCode(String),

    #[error("product {0} has a rate table configuration with no result column")]
    MissingResultColumn(String),
}

#[derive(Debug, serde::Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// Case-folded product code used for both uniqueness and lookup
fn fold_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Ordered set of products, looked up by code
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Build a catalog, rejecting duplicate codes and incomplete configurations
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(fold_code(&product.code)) {
                return Err(CatalogError::DuplicateCode(product.code.clone()));
            }
            if let Some(config) = &product.calc_config {
                if config.result_column.trim().is_empty() {
                    return Err(CatalogError::MissingResultColumn(product.code.clone()));
                }
            }
        }
        Ok(Self { products })
    }

    /// Load a catalog file, resolving `rate_table_file` entries relative to it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let catalog = Self::from_reader_with_base(file, Some(base_dir))?;

        log::info!("Loaded {} products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load from the default catalog location
    pub fn load_default() -> Result<Self, CatalogError> {
        Self::load(DEFAULT_CATALOG_PATH)
    }

    /// Parse catalog JSON from any reader; `rate_table_file` entries are left unresolved
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::from_reader_with_base(reader, None)
    }

    fn from_reader_with_base<R: Read>(reader: R, base_dir: Option<&Path>) -> Result<Self, CatalogError> {
        let parsed: CatalogFile = serde_json::from_reader(reader)?;
        let mut products = parsed.products;

        if let Some(base) = base_dir {
            for product in &mut products {
                if product.rate_table.is_some() {
                    continue;
                }
                if let Some(relative) = &product.rate_table_file {
                    let csv_path = base.join(relative);
                    let rows = load_rate_table_csv_file(&csv_path)?;
                    log::debug!("Product {}: {} rate rows from {}", product.code, rows.len(), csv_path.display());
                    product.rate_table = Some(rows);
                }
            }
        }

        Self::new(products)
    }

    /// Look up a product by code, ignoring case
    pub fn get(&self, code: &str) -> Option<&Product> {
        let code = fold_code(code);
        self.products.iter().find(|p| fold_code(&p.code) == code)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Read a rate table from CSV: the header names the columns, one row per rate
pub fn load_rate_table_csv<R: Read>(reader: R) -> Result<Vec<RateRow>, CatalogError> {
    let mut reader = Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = RateRow::new();
        for (column, raw) in headers.iter().zip(record.iter()) {
            let cell = Cell::from_raw(raw);
            if !cell.is_blank() {
                row.insert(column.trim().to_string(), cell);
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Read a rate table CSV from a file path
pub fn load_rate_table_csv_file(path: &Path) -> Result<Vec<RateRow>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_rate_table_csv(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{CalculationType, Formula};

    fn fixture_catalog_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CATALOG_PATH)
    }

    #[test]
    fn test_load_fixture_catalog() {
        let catalog = ProductCatalog::load(fixture_catalog_path()).expect("Failed to load catalog");
        assert!(!catalog.is_empty());

        let health = catalog.get("hc01").expect("health-care product");
        assert_eq!(health.calculation_type, CalculationType::HealthCare);
        assert!(!health.uses_rate_table());

        // Rate table pulled in from the sibling CSV file
        let term = catalog.get("TERM_DYN").expect("dynamic term product");
        assert!(term.uses_rate_table());
        assert!(term.rate_table.as_ref().unwrap().len() >= 4);
    }

    #[test]
    fn test_catalog_from_reader() {
        let json = r#"{
            "products": [
                { "code": "ACC01", "name": "Accident", "calculation_type": "accident" },
                {
                    "code": "HOSP",
                    "calculation_type": "dynamic",
                    "rate_table": [
                        { "Tuổi": 30, "Giới tính": "Nữ", "Phí": 850000 }
                    ],
                    "calc_config": {
                        "lookup_keys": { "age": "Tuổi", "gender": "Giới tính" },
                        "result_column": "Phí",
                        "formula": "FIXED_FEE"
                    }
                }
            ]
        }"#;

        let catalog = ProductCatalog::from_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);

        let hosp = catalog.get("hosp").unwrap();
        assert!(hosp.uses_rate_table());
        let config = hosp.calc_config.as_ref().unwrap();
        assert_eq!(config.formula, Formula::FixedFee);
        assert_eq!(config.lookup_keys.age.as_deref(), Some("Tuổi"));
        assert_eq!(config.lookup_keys.term, None);
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let json = r#"{ "products": [
            { "code": "A", "calculation_type": "accident" },
            { "code": "a", "calculation_type": "health_care" }
        ] }"#;
        let err = ProductCatalog::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCode(code) if code == "a"));
    }

    #[test]
    fn test_missing_result_column_rejected() {
        let json = r#"{ "products": [
            { "code": "A", "calculation_type": "dynamic",
              "calc_config": { "result_column": " ", "formula": "RATE_BASED" } }
        ] }"#;
        let err = ProductCatalog::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingResultColumn(_)));
    }

    #[test]
    fn test_missing_formula_keeps_catalog_loadable() {
        use crate::calculator::{FeeCalculator, FeeRequest, NoRate};
        use crate::params::{CalculatorParams, Gender};

        let json = r#"{ "products": [
            { "code": "PA01", "calculation_type": "accident" },
            { "code": "DYN", "calculation_type": "dynamic",
              "rate_table": [ { "rate": 2.0 } ],
              "calc_config": { "result_column": "rate" } }
        ] }"#;
        let catalog = ProductCatalog::from_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);

        let dynamic = catalog.get("DYN").unwrap();
        assert_eq!(dynamic.calc_config.as_ref().unwrap().formula, Formula::Unsupported);

        let calculator = FeeCalculator::default();
        let params = CalculatorParams::new(30, Gender::Male, 1_000_000_000.0).with_occupation_group(3);
        let request = FeeRequest::for_product(dynamic, &params);
        assert_eq!(calculator.calculate(&request), Err(NoRate::UnsupportedFormula));
        assert_eq!(calculator.calculate_or_zero(&request), 0.0);

        // The legacy product in the same catalog still quotes
        let accident = catalog.get("PA01").unwrap();
        assert_eq!(calculator.calculate_or_zero(&FeeRequest::for_product(accident, &params)), 3_050_000.0);
    }

    #[test]
    fn test_non_ascii_codes_fold_consistently() {
        let json = r#"{ "products": [
            { "code": "ĐT01", "calculation_type": "accident" },
            { "code": "đt01", "calculation_type": "accident" }
        ] }"#;
        let err = ProductCatalog::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCode(_)));

        let json = r#"{ "products": [ { "code": "ĐT01", "calculation_type": "accident" } ] }"#;
        let catalog = ProductCatalog::from_reader(json.as_bytes()).unwrap();
        assert!(catalog.get("đt01").is_some());
        assert!(catalog.get(" Đt01 ").is_some());
    }

    #[test]
    fn test_load_rate_table_csv() {
        let csv = "age,gender,term,rate\n30,Nam,10,2.4\n30,Nữ,,2.1\n";
        let rows = load_rate_table_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("rate"), Some(&Cell::Number(2.4)));
        assert_eq!(rows[1].get("gender"), Some(&Cell::Text("Nữ".into())));
        // Blank cells are dropped so the dimension is unfiltered for that row
        assert!(!rows[1].contains_key("term"));
    }

    #[test]
    fn test_missing_file() {
        let err = ProductCatalog::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
