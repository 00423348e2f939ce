//! Age/gender and age/gender/term premium tables for the traditional products
//!
//! Rates are annual premiums per 1,000 sum assured. Ages are sparse; the
//! calculators fall back to the nearest tabulated age.

use crate::params::Gender;

/// Per-gender rates by age, ages ascending
#[derive(Debug, Clone, Copy)]
pub struct AgeGenderTable {
    pub male: &'static [(u32, f64)],
    pub female: &'static [(u32, f64)],
}

impl AgeGenderTable {
    /// Rows for a gender; there is no tabulation for `Other`
    pub fn rows(&self, gender: Gender) -> Option<&'static [(u32, f64)]> {
        match gender {
            Gender::Male => Some(self.male),
            Gender::Female => Some(self.female),
            Gender::Other => None,
        }
    }
}

/// One age row of a term table: (term in years, rate)
pub type TermRates = &'static [(u32, f64)];

/// Per-gender, per-age term rates, ages ascending
#[derive(Debug, Clone, Copy)]
pub struct AgeGenderTermTable {
    pub male: &'static [(u32, TermRates)],
    pub female: &'static [(u32, TermRates)],
}

impl AgeGenderTermTable {
    pub fn rows(&self, gender: Gender) -> Option<&'static [(u32, TermRates)]> {
        match gender {
            Gender::Male => Some(self.male),
            Gender::Female => Some(self.female),
            Gender::Other => None,
        }
    }
}

/// Critical illness, whole of life
static CRITICAL_ILLNESS: AgeGenderTable = AgeGenderTable {
    male: &[
        (18, 3.10), (20, 3.25), (25, 3.70), (30, 4.45), (35, 5.60),
        (40, 7.35), (45, 9.90), (50, 13.40), (55, 18.20), (60, 24.80),
    ],
    female: &[
        (18, 3.40), (20, 3.55), (25, 4.10), (30, 5.05), (35, 6.30),
        (40, 7.95), (45, 10.05), (50, 12.70), (55, 16.10), (60, 20.50),
    ],
};

/// Whole life, level premium
static WHOLE_LIFE: AgeGenderTable = AgeGenderTable {
    male: &[
        (0, 6.20), (5, 6.85), (10, 7.60), (15, 8.45), (20, 9.50),
        (25, 10.80), (30, 12.40), (35, 14.45), (40, 17.10), (45, 20.50),
        (50, 24.90), (55, 30.60), (60, 38.10), (65, 48.00),
    ],
    female: &[
        (0, 5.70), (5, 6.25), (10, 6.90), (15, 7.65), (20, 8.55),
        (25, 9.65), (30, 11.00), (35, 12.70), (40, 14.90), (45, 17.70),
        (50, 21.40), (55, 26.20), (60, 32.50), (65, 40.90),
    ],
};

/// Term life, level premium for 5/10/15/20 years
static TERM_LIFE: AgeGenderTermTable = AgeGenderTermTable {
    male: &[
        (18, &[(5, 1.05), (10, 1.12), (15, 1.21), (20, 1.33)]),
        (25, &[(5, 1.10), (10, 1.20), (15, 1.34), (20, 1.52)]),
        (30, &[(5, 1.22), (10, 1.38), (15, 1.60), (20, 1.88)]),
        (35, &[(5, 1.45), (10, 1.71), (15, 2.05), (20, 2.48)]),
        (40, &[(5, 1.88), (10, 2.29), (15, 2.81), (20, 3.45)]),
        (45, &[(5, 2.62), (10, 3.25), (15, 4.02)]),
        (50, &[(5, 3.80), (10, 4.74), (15, 5.90)]),
        (55, &[(5, 5.55), (10, 6.95)]),
        (60, &[(5, 8.10)]),
    ],
    female: &[
        (18, &[(5, 0.92), (10, 0.98), (15, 1.05), (20, 1.14)]),
        (25, &[(5, 0.96), (10, 1.04), (15, 1.15), (20, 1.29)]),
        (30, &[(5, 1.05), (10, 1.18), (15, 1.35), (20, 1.57)]),
        (35, &[(5, 1.24), (10, 1.44), (15, 1.70), (20, 2.03)]),
        (40, &[(5, 1.57), (10, 1.89), (15, 2.28), (20, 2.77)]),
        (45, &[(5, 2.12), (10, 2.60), (15, 3.18)]),
        (50, &[(5, 2.98), (10, 3.67), (15, 4.50)]),
        (55, &[(5, 4.25), (10, 5.25)]),
        (60, &[(5, 6.05)]),
    ],
};

/// Age/gender table for a product code
pub fn age_gender_table(product_code: &str) -> Option<&'static AgeGenderTable> {
    match product_code.trim().to_uppercase().as_str() {
        "CI01" => Some(&CRITICAL_ILLNESS),
        "WL01" => Some(&WHOLE_LIFE),
        _ => None,
    }
}

/// Age/gender/term table for a product code
pub fn age_gender_term_table(product_code: &str) -> Option<&'static AgeGenderTermTable> {
    match product_code.trim().to_uppercase().as_str() {
        "TL01" => Some(&TERM_LIFE),
        _ => None,
    }
}
