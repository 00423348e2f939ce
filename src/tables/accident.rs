//! Personal-accident rates by occupation group

/// Annual rate per 1,000 sum assured, indexed by occupation group 1-4
const ACCIDENT_RATES: [f64; 4] = [
    1.50, // Group 1: office, administrative
    2.10, // Group 2: light manual, sales travel
    3.05, // Group 3: skilled manual, drivers
    4.20, // Group 4: construction, heavy industry
];

/// Rate for an occupation group, `None` outside 1-4
pub fn accident_rate(occupation_group: u8) -> Option<f64> {
    match occupation_group {
        1..=4 => Some(ACCIDENT_RATES[(occupation_group - 1) as usize]),
        _ => None,
    }
}
