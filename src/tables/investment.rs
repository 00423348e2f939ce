//! Investment-linked planned premium bands

/// (maximum age in band, sum assured as a multiple of annual premium)
const PROTECTION_MULTIPLES: &[(u32, f64)] = &[
    (30, 60.0),
    (40, 45.0),
    (50, 30.0),
    (60, 20.0),
    (70, 12.0),
];

/// Maximum protection multiple for an age; `None` above the oldest band
pub fn protection_multiple(age: u32) -> Option<f64> {
    PROTECTION_MULTIPLES
        .iter()
        .find(|(max_age, _)| age <= *max_age)
        .map(|(_, multiple)| *multiple)
}
