//! Reasons a fee could not be computed

use crate::product::CalculationType;
use thiserror::Error;

/// Why no rate applied to a request
///
/// A computed fee of zero is `Ok(0.0)`; every variant here is a missing or
/// unusable rate, which the legacy zero-on-failure API folds into 0.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoRate {
    #[error("age {age} is not in the rate table")]
    AgeNotTabulated { age: u32 },

    #[error("no rates are tabulated for gender {gender}")]
    GenderNotTabulated { gender: crate::params::Gender },

    #[error("unknown occupation group: {0:?}")]
    UnknownOccupationGroup(Option<u8>),

    #[error("no term {term:?} rate for age {age}")]
    TermNotTabulated { age: u32, term: Option<u32> },

    #[error("plan/package not recognised: plan={plan:?}, package={package:?}")]
    UnmappedPlan {
        plan: Option<String>,
        package: Option<String>,
    },

    #[error("no rate-table row matches the request")]
    NoMatchingRow,

    #[error("column {column} of the matched row is not numeric")]
    NonNumericRate { column: String },

    #[error("unsupported formula")]
    UnsupportedFormula,

    #[error("no calculator for calculation type {}", .0.as_str())]
    UnknownCalculationType(CalculationType),

    #[error("no rate table for product code {0}")]
    UnknownProductCode(String),
}
