//! Static rate tables behind the legacy product calculators

mod accident;
mod health_care;
mod investment;
mod premium;

pub use accident::accident_rate;
pub use health_care::{health_care_row, HealthCareKey, HealthCareRow, HealthFee};
pub use investment::protection_multiple;
pub use premium::{age_gender_table, age_gender_term_table, AgeGenderTable, AgeGenderTermTable, TermRates};
