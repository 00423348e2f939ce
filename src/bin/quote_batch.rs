//! Quote a CSV of fee requests against the product catalog
//!
//! Usage: cargo run --bin quote_batch -- [requests.csv] [output.csv]
//!
//! Input columns: product_code,age,gender,sum_assured,term,occupation_group,plan,package
//! Output adds: fee,status,source,reason

use anyhow::{anyhow, Context, Result};
use premium_engine::{CalculatorParams, FeeCalculator, FeeRequest, Gender, ProductCatalog};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const DEFAULT_REQUESTS_PATH: &str = "data/products/quote_requests.csv";
const DEFAULT_OUTPUT_PATH: &str = "quote_results.csv";

#[derive(Debug, Clone, Deserialize)]
struct RequestRow {
    product_code: String,
    age: u32,
    gender: String,
    sum_assured: f64,
    term: Option<u32>,
    occupation_group: Option<u8>,
    plan: Option<String>,
    package: Option<String>,
}

#[derive(Debug, Serialize)]
struct ResultRow {
    product_code: String,
    age: u32,
    gender: String,
    sum_assured: f64,
    fee: f64,
    status: &'static str,
    source: String,
    reason: String,
}

impl RequestRow {
    fn to_params(&self) -> Result<CalculatorParams> {
        let gender: Gender = self.gender.parse().map_err(|e: String| anyhow!(e))?;
        Ok(CalculatorParams {
            age: self.age,
            gender,
            sum_assured: self.sum_assured,
            term: self.term,
            occupation_group: self.occupation_group,
            plan: self.plan.clone().filter(|p| !p.trim().is_empty()),
            package: self.package.clone().filter(|p| !p.trim().is_empty()),
        })
    }
}

fn quote(calculator: &FeeCalculator, catalog: &ProductCatalog, row: &RequestRow) -> ResultRow {
    let mut out = ResultRow {
        product_code: row.product_code.clone(),
        age: row.age,
        gender: row.gender.clone(),
        sum_assured: row.sum_assured,
        fee: 0.0,
        status: "no_rate",
        source: String::new(),
        reason: String::new(),
    };

    let params = match row.to_params() {
        Ok(params) => params,
        Err(e) => {
            out.status = "invalid";
            out.reason = e.to_string();
            return out;
        }
    };

    let Some(product) = catalog.get(&row.product_code) else {
        out.status = "invalid";
        out.reason = format!("product {} not in catalog", row.product_code);
        return out;
    };

    match calculator.calculate(&FeeRequest::for_product(product, &params)) {
        Ok(quote) => {
            out.fee = quote.amount;
            out.status = "quoted";
            out.source = format!("{:?}", quote.source);
        }
        Err(reason) => out.reason = reason.to_string(),
    }
    out
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let input = args.get(1).map(String::as_str).unwrap_or(DEFAULT_REQUESTS_PATH);
    let output = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT_PATH);

    let start = Instant::now();
    let catalog = ProductCatalog::load_default().context("loading product catalog")?;

    let mut reader = csv::Reader::from_path(input).with_context(|| format!("opening {}", input))?;
    let requests: Vec<RequestRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .with_context(|| format!("parsing {}", input))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let calculator = FeeCalculator::default();
    let results: Vec<ResultRow> = requests
        .par_iter()
        .map(|row| quote(&calculator, &catalog, row))
        .collect();

    let mut writer = csv::Writer::from_path(output).with_context(|| format!("creating {}", output))?;
    for row in &results {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let quoted = results.iter().filter(|r| r.status == "quoted").count();
    println!("Quoted {}/{} requests in {:?}", quoted, results.len(), start.elapsed());
    println!("Results written to: {}", output);
    Ok(())
}
