//! Data-driven fee lookup against a product's own rate table
//!
//! The first row whose configured columns all agree with the request wins.
//! A column the row leaves blank does not filter that row.

use super::NoRate;
use crate::config::EngineConfig;
use crate::params::CalculatorParams;
use crate::product::{CalcConfig, Cell, Formula, RateRow};
use crate::text::labels_overlap;

/// A single lookup dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Age,
    Gender,
    Term,
    Occupation,
    Plan,
    Package,
}

fn configured_columns(config: &CalcConfig) -> Vec<(Dimension, &str)> {
    let keys = &config.lookup_keys;
    [
        (Dimension::Age, keys.age.as_deref()),
        (Dimension::Gender, keys.gender.as_deref()),
        (Dimension::Term, keys.term.as_deref()),
        (Dimension::Occupation, keys.occupation.as_deref()),
        (Dimension::Plan, keys.plan.as_deref()),
        (Dimension::Package, keys.package.as_deref()),
    ]
    .into_iter()
    .filter_map(|(dim, column)| column.map(|c| (dim, c)))
    .collect()
}

fn numeric_equals(cell: &Cell, wanted: Option<f64>) -> bool {
    match (cell.as_number(), wanted) {
        (Some(value), Some(wanted)) => value == wanted,
        _ => false,
    }
}

fn text_overlaps(cell: &Cell, wanted: Option<&str>) -> bool {
    match (cell.as_text(), wanted) {
        (Some(value), Some(wanted)) => labels_overlap(&value, wanted),
        _ => false,
    }
}

fn cell_matches(dimension: Dimension, cell: &Cell, params: &CalculatorParams) -> bool {
    match dimension {
        Dimension::Age => numeric_equals(cell, Some(params.age as f64)),
        Dimension::Gender => cell
            .as_text()
            .is_some_and(|label| params.gender.matches_label(&label)),
        Dimension::Term => numeric_equals(cell, params.term.map(f64::from)),
        Dimension::Occupation => numeric_equals(cell, params.occupation_group.map(f64::from)),
        Dimension::Plan => text_overlaps(cell, params.plan.as_deref()),
        Dimension::Package => text_overlaps(cell, params.package.as_deref()),
    }
}

/// Whether a row satisfies every configured dimension it defines
pub fn row_matches(row: &RateRow, config: &CalcConfig, params: &CalculatorParams) -> bool {
    configured_columns(config).into_iter().all(|(dimension, column)| {
        match row.get(column) {
            Some(cell) if !cell.is_blank() => cell_matches(dimension, cell, params),
            _ => true,
        }
    })
}

/// First matching row in table order
pub fn find_row<'a>(
    rows: &'a [RateRow],
    config: &CalcConfig,
    params: &CalculatorParams,
) -> Option<&'a RateRow> {
    rows.iter().find(|row| row_matches(row, config, params))
}

/// Apply a formula to a looked-up rate
pub fn apply_formula(
    formula: Formula,
    rate: f64,
    sum_assured: f64,
    engine: &EngineConfig,
) -> Result<f64, NoRate> {
    match formula {
        Formula::RateBased => Ok((engine.units(sum_assured) * rate).round()),
        Formula::FixedFee => Ok(rate),
        Formula::Unsupported => Err(NoRate::UnsupportedFormula),
    }
}

/// Resolve a fee from a rate table
pub fn resolve(
    rows: &[RateRow],
    config: &CalcConfig,
    params: &CalculatorParams,
    engine: &EngineConfig,
) -> Result<f64, NoRate> {
    let row = find_row(rows, config, params).ok_or(NoRate::NoMatchingRow)?;

    let rate = row
        .get(&config.result_column)
        .and_then(Cell::as_number)
        .ok_or_else(|| NoRate::NonNumericRate {
            column: config.result_column.clone(),
        })?;

    let fee = apply_formula(config.formula, rate, params.sum_assured, engine)?;
    log::debug!("Rate-table match: rate={} formula={:?} fee={}", rate, config.formula, fee);
    Ok(fee)
}
