//! Premium Engine CLI
//!
//! Quote a single fee or print a customer illustration against a product catalog

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use premium_engine::product::DEFAULT_CATALOG_PATH;
use premium_engine::{
    CalculatorParams, CoverageRequest, CustomerProfile, EngineConfig, FeeCalculator, FeeRequest,
    Gender, Illustration, ProductCatalog,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "premium-engine", version, about = "Insurance fee calculator")]
struct Cli {
    /// Product catalog JSON
    #[arg(long, global = true, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Engine configuration JSON (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute one fee
    Quote(QuoteArgs),
    /// Price an illustration for a customer and print it as JSON
    Illustrate(IllustrateArgs),
}

#[derive(Debug, Args)]
struct CoverageArgs {
    /// Product code in the catalog
    #[arg(long)]
    product: String,

    /// Sum assured
    #[arg(long, default_value_t = 0.0)]
    sum_assured: f64,

    /// Policy term in years
    #[arg(long)]
    term: Option<u32>,

    /// Health-care plan
    #[arg(long)]
    plan: Option<String>,

    /// Health-care package
    #[arg(long)]
    package: Option<String>,
}

#[derive(Debug, Args)]
struct QuoteArgs {
    #[command(flatten)]
    coverage: CoverageArgs,

    #[arg(long)]
    age: u32,

    /// Gender label (nam/nữ, male/female, m/f, ...)
    #[arg(long)]
    gender: String,

    /// Occupation group 1-4
    #[arg(long)]
    occupation_group: Option<u8>,
}

#[derive(Debug, Args)]
struct IllustrateArgs {
    #[command(flatten)]
    coverage: CoverageArgs,

    #[arg(long)]
    name: String,

    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    dob: NaiveDate,

    #[arg(long)]
    gender: String,

    #[arg(long)]
    occupation_group: Option<u8>,

    /// Pricing date, YYYY-MM-DD (default: today)
    #[arg(long)]
    on: Option<NaiveDate>,
}

fn parse_gender(label: &str) -> Result<Gender> {
    label.parse::<Gender>().map_err(|e| anyhow!(e))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_path(path)
            .with_context(|| format!("loading engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let calculator = FeeCalculator::new(config)?;

    let catalog = ProductCatalog::load(&cli.catalog)
        .with_context(|| format!("loading catalog {}", cli.catalog.display()))?;

    match cli.command {
        Command::Quote(args) => {
            let product = catalog
                .get(&args.coverage.product)
                .ok_or_else(|| anyhow!("product {} not in catalog", args.coverage.product))?;

            let params = CalculatorParams {
                age: args.age,
                gender: parse_gender(&args.gender)?,
                sum_assured: args.coverage.sum_assured,
                term: args.coverage.term,
                occupation_group: args.occupation_group,
                plan: args.coverage.plan,
                package: args.coverage.package,
            };

            match calculator.calculate(&FeeRequest::for_product(product, &params)) {
                Ok(quote) => {
                    println!("Product: {} ({})", product.code, product.name);
                    println!("  Source: {:?}", quote.source);
                    println!("  Fee: {:.0}", quote.amount);
                }
                Err(reason) => {
                    println!("Product: {} ({})", product.code, product.name);
                    println!("  No rate: {}", reason);
                    println!("  Fee: 0");
                }
            }
        }
        Command::Illustrate(args) => {
            let product = catalog
                .get(&args.coverage.product)
                .ok_or_else(|| anyhow!("product {} not in catalog", args.coverage.product))?;

            let customer = CustomerProfile {
                full_name: args.name,
                date_of_birth: args.dob,
                gender: parse_gender(&args.gender)?,
                occupation_group: args.occupation_group,
            };
            let coverage = CoverageRequest {
                sum_assured: args.coverage.sum_assured,
                term: args.coverage.term,
                plan: args.coverage.plan,
                package: args.coverage.package,
            };
            let quoted_on = args.on.unwrap_or_else(|| Local::now().date_naive());

            let illustration = Illustration::prepare(&calculator, &customer, product, &coverage, quoted_on);
            println!("{}", serde_json::to_string_pretty(&illustration)?);
        }
    }

    Ok(())
}
