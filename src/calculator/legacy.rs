//! Hardcoded calculators for products that carry no rate table of their own

use super::NoRate;
use crate::config::EngineConfig;
use crate::params::CalculatorParams;
use crate::tables::{
    accident_rate, age_gender_table, age_gender_term_table, health_care_row, protection_multiple,
    HealthCareKey,
};
use crate::text::normalize_tag;

/// Health-care plan tier, before the package is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HealthPlan {
    CoBan,
    NangCao,
    ToanDien,
}

fn parse_plan(label: &str) -> Option<HealthPlan> {
    let folded = normalize_tag(label);
    if folded.contains("co ban") || folded.contains("basic") {
        Some(HealthPlan::CoBan)
    } else if folded.contains("nang cao") || folded.contains("advanced") {
        Some(HealthPlan::NangCao)
    } else if folded.contains("toan dien") || folded.contains("comprehensive") {
        Some(HealthPlan::ToanDien)
    } else {
        None
    }
}

/// Package number from a label such as "Gói 2", "package 1" or "toan_dien_2"
fn parse_package(label: &str) -> Option<u8> {
    normalize_tag(label)
        .split_whitespace()
        .find_map(|token| match token {
            "1" => Some(1),
            "2" => Some(2),
            _ => None,
        })
}

/// Map plan and package labels to a health-care table column
///
/// Comprehensive cover defaults to package 1; a package may also be carried
/// in the plan tag itself ("toan_dien_2"). Unrecognised packages do not map.
pub fn health_care_key(plan: Option<&str>, package: Option<&str>) -> Option<HealthCareKey> {
    match parse_plan(plan?)? {
        HealthPlan::CoBan => Some(HealthCareKey::CoBan),
        HealthPlan::NangCao => Some(HealthCareKey::NangCao),
        HealthPlan::ToanDien => {
            let number = match package {
                Some(p) => parse_package(p)?,
                None => parse_package(plan?).unwrap_or(1),
            };
            match number {
                2 => Some(HealthCareKey::ToanDien2),
                _ => Some(HealthCareKey::ToanDien1),
            }
        }
    }
}

/// Health-care fee by exact age, plan and package
pub fn health_care(params: &CalculatorParams) -> Result<f64, NoRate> {
    let row = health_care_row(params.age).ok_or(NoRate::AgeNotTabulated { age: params.age })?;

    let key = health_care_key(params.plan.as_deref(), params.package.as_deref()).ok_or_else(|| {
        NoRate::UnmappedPlan {
            plan: params.plan.clone(),
            package: params.package.clone(),
        }
    })?;

    row.fee(key)
        .for_gender(params.gender)
        .ok_or(NoRate::GenderNotTabulated { gender: params.gender })
}

/// Accident premium: round(sum_assured / 1000 * rate[occupation group])
pub fn accident(params: &CalculatorParams, engine: &EngineConfig) -> Result<f64, NoRate> {
    let rate = params
        .occupation_group
        .and_then(accident_rate)
        .ok_or(NoRate::UnknownOccupationGroup(params.occupation_group))?;

    Ok((engine.units(params.sum_assured) * rate).round())
}

/// Row for `age`, or for the closest tabulated age
///
/// Rows must be ascending by age. Equidistant candidates resolve to the
/// younger age.
pub fn nearest_age<T>(rows: &[(u32, T)], age: u32) -> Option<&(u32, T)> {
    if let Some(exact) = rows.iter().find(|(a, _)| *a == age) {
        return Some(exact);
    }
    rows.iter().fold(None, |best: Option<&(u32, T)>, candidate| match best {
        Some(current) if current.0.abs_diff(age) <= candidate.0.abs_diff(age) => Some(current),
        _ => Some(candidate),
    })
}

/// Age/gender premium with nearest-age fallback
///
/// Investment-linked product codes are priced by [`investment_linked`] instead.
pub fn age_gender(
    product_code: &str,
    params: &CalculatorParams,
    engine: &EngineConfig,
) -> Result<f64, NoRate> {
    if engine.is_investment_linked(product_code) {
        return investment_linked(params, engine);
    }

    let table = age_gender_table(product_code)
        .ok_or_else(|| NoRate::UnknownProductCode(product_code.to_string()))?;
    let rows = table
        .rows(params.gender)
        .ok_or(NoRate::GenderNotTabulated { gender: params.gender })?;
    let (matched_age, rate) = nearest_age(rows, params.age).ok_or(NoRate::AgeNotTabulated { age: params.age })?;

    if *matched_age != params.age {
        log::debug!("{}: age {} not tabulated, using {}", product_code, params.age, matched_age);
    }
    Ok((engine.units(params.sum_assured) * rate).round())
}

/// Age/gender/term premium: nearest age first, then the exact term
pub fn age_gender_term(
    product_code: &str,
    params: &CalculatorParams,
    engine: &EngineConfig,
) -> Result<f64, NoRate> {
    let table = age_gender_term_table(product_code)
        .ok_or_else(|| NoRate::UnknownProductCode(product_code.to_string()))?;
    let rows = table
        .rows(params.gender)
        .ok_or(NoRate::GenderNotTabulated { gender: params.gender })?;
    let (matched_age, terms) = nearest_age(rows, params.age).ok_or(NoRate::AgeNotTabulated { age: params.age })?;

    let rate = params
        .term
        .and_then(|term| terms.iter().find(|(t, _)| *t == term))
        .map(|(_, rate)| *rate)
        .ok_or(NoRate::TermNotTabulated {
            age: *matched_age,
            term: params.term,
        })?;

    Ok((engine.units(params.sum_assured) * rate).round())
}

/// Investment-linked planned annual premium
///
/// Sum assured divided by the age band's protection multiple, floored at the
/// configured minimum premium.
pub fn investment_linked(params: &CalculatorParams, engine: &EngineConfig) -> Result<f64, NoRate> {
    let multiple = protection_multiple(params.age).ok_or(NoRate::AgeNotTabulated { age: params.age })?;
    let premium = (params.sum_assured / multiple).round();
    Ok(premium.max(engine.investment_linked_min_premium))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Gender;
    use approx::assert_relative_eq;

    #[test]
    fn test_health_care_key_mapping() {
        assert_eq!(health_care_key(Some("Cơ bản"), None), Some(HealthCareKey::CoBan));
        assert_eq!(health_care_key(Some("co_ban"), Some("Gói 2")), Some(HealthCareKey::CoBan));
        assert_eq!(health_care_key(Some("Nâng cao"), None), Some(HealthCareKey::NangCao));
        assert_eq!(health_care_key(Some("Toàn diện"), None), Some(HealthCareKey::ToanDien1));
        assert_eq!(health_care_key(Some("Toàn diện"), Some("Gói 2")), Some(HealthCareKey::ToanDien2));
        assert_eq!(health_care_key(Some("toan_dien_2"), None), Some(HealthCareKey::ToanDien2));
        assert_eq!(health_care_key(Some("Toàn diện"), Some("VIP")), None);
        assert_eq!(health_care_key(Some("Vàng"), None), None);
        assert_eq!(health_care_key(None, Some("Gói 1")), None);
    }

    #[test]
    fn test_health_care_literal_fee() {
        let params = CalculatorParams::new(6, Gender::Male, 0.0).with_plan("Cơ bản");
        assert_eq!(health_care(&params), Ok(1_164_000.0));

        // Same fee for either gender on a flat entry
        let params = CalculatorParams::new(6, Gender::Female, 0.0).with_plan("Cơ bản");
        assert_eq!(health_care(&params), Ok(1_164_000.0));
    }

    #[test]
    fn test_health_care_by_gender() {
        let male = CalculatorParams::new(24, Gender::Male, 0.0)
            .with_plan("Toàn diện")
            .with_package("Gói 2");
        assert_eq!(health_care(&male), Ok(3_199_000.0));

        let female = CalculatorParams { gender: Gender::Female, ..male.clone() };
        assert_eq!(health_care(&female), Ok(3_583_000.0));

        let other = CalculatorParams { gender: Gender::Other, ..male };
        assert_eq!(
            health_care(&other),
            Err(NoRate::GenderNotTabulated { gender: Gender::Other })
        );
    }

    #[test]
    fn test_health_care_every_age_plan_and_gender() {
        let plans = [
            ("Cơ bản", None, HealthCareKey::CoBan),
            ("Nâng cao", None, HealthCareKey::NangCao),
            ("Toàn diện", Some("Gói 1"), HealthCareKey::ToanDien1),
            ("Toàn diện", Some("Gói 2"), HealthCareKey::ToanDien2),
        ];

        for age in 0..=65 {
            let row = health_care_row(age).unwrap();
            for (plan, package, key) in plans {
                for gender in [Gender::Male, Gender::Female] {
                    let mut params = CalculatorParams::new(age, gender, 0.0).with_plan(plan);
                    if let Some(package) = package {
                        params = params.with_package(package);
                    }
                    let expected = row.fee(key).for_gender(gender).unwrap();
                    assert_eq!(health_care(&params), Ok(expected), "age {age} {plan} {package:?} {gender:?}");
                }
            }
        }

        // Edges of the table, where comprehensive cover switches to per-gender fees
        let at = |age: u32, gender: Gender, package: &str| {
            health_care(
                &CalculatorParams::new(age, gender, 0.0)
                    .with_plan("Toàn diện")
                    .with_package(package),
            )
        };
        assert_eq!(at(0, Gender::Female, "Gói 1"), Ok(3_485_000.0));
        assert_eq!(at(17, Gender::Female, "Gói 2"), Ok(2_790_000.0));
        assert_eq!(at(18, Gender::Male, "Gói 1"), Ok(2_304_000.0));
        assert_eq!(at(18, Gender::Female, "Gói 2"), Ok(3_333_000.0));
        assert_eq!(at(65, Gender::Male, "Gói 2"), Ok(6_696_000.0));
        assert_eq!(at(65, Gender::Female, "Gói 1"), Ok(5_806_000.0));
    }

    #[test]
    fn test_health_care_misses() {
        let too_old = CalculatorParams::new(70, Gender::Male, 0.0).with_plan("Cơ bản");
        assert_eq!(health_care(&too_old), Err(NoRate::AgeNotTabulated { age: 70 }));

        let no_plan = CalculatorParams::new(30, Gender::Male, 0.0);
        assert!(matches!(health_care(&no_plan), Err(NoRate::UnmappedPlan { .. })));
    }

    #[test]
    fn test_accident_by_occupation() {
        let engine = EngineConfig::default();
        let params = CalculatorParams::new(35, Gender::Male, 1_000_000_000.0).with_occupation_group(3);
        let fee = accident(&params, &engine).unwrap();
        assert_relative_eq!(fee, 3_050_000.0);

        let unknown = CalculatorParams::new(35, Gender::Male, 1_000_000_000.0).with_occupation_group(7);
        assert_eq!(accident(&unknown, &engine), Err(NoRate::UnknownOccupationGroup(Some(7))));

        let missing = CalculatorParams::new(35, Gender::Male, 1_000_000_000.0);
        assert_eq!(accident(&missing, &engine), Err(NoRate::UnknownOccupationGroup(None)));
    }

    #[test]
    fn test_nearest_age() {
        let rows = [(20, 1.0), (25, 2.0)];
        assert_eq!(nearest_age(&rows, 22), Some(&(20, 1.0)));
        assert_eq!(nearest_age(&rows, 23), Some(&(25, 2.0)));
        assert_eq!(nearest_age(&rows, 25), Some(&(25, 2.0)));
        assert_eq!(nearest_age(&rows, 90), Some(&(25, 2.0)));
        assert_eq!(nearest_age(&rows, 0), Some(&(20, 1.0)));

        let empty: [(u32, f64); 0] = [];
        assert_eq!(nearest_age(&empty, 30), None);
    }

    #[test]
    fn test_nearest_age_tie_goes_to_younger() {
        let rows = [(20, 1.0), (24, 2.0)];
        assert_eq!(nearest_age(&rows, 22), Some(&(20, 1.0)));
    }

    #[test]
    fn test_age_gender_fallback() {
        let engine = EngineConfig::default();
        // CI01 male tabulates 20 (3.25) and 25 (3.70); 22 resolves to 20
        let params = CalculatorParams::new(22, Gender::Male, 100_000_000.0);
        assert_eq!(age_gender("CI01", &params, &engine), Ok(325_000.0));

        let exact = CalculatorParams::new(25, Gender::Female, 100_000_000.0);
        assert_eq!(age_gender("ci01", &exact, &engine), Ok(410_000.0));
    }

    #[test]
    fn test_age_gender_misses() {
        let engine = EngineConfig::default();
        let params = CalculatorParams::new(30, Gender::Male, 100_000_000.0);
        assert_eq!(
            age_gender("NOPE", &params, &engine),
            Err(NoRate::UnknownProductCode("NOPE".into()))
        );

        let other = CalculatorParams::new(30, Gender::Other, 100_000_000.0);
        assert!(matches!(age_gender("WL01", &other, &engine), Err(NoRate::GenderNotTabulated { .. })));
    }

    #[test]
    fn test_age_gender_delegates_investment_linked() {
        let engine = EngineConfig::default();
        let params = CalculatorParams::new(35, Gender::Female, 900_000_000.0);
        // 900M / 45 = 20M
        assert_eq!(age_gender("UL01", &params, &engine), Ok(20_000_000.0));
        assert_eq!(age_gender("UL02", &params, &engine), investment_linked(&params, &engine));
    }

    #[test]
    fn test_investment_linked_floor() {
        let engine = EngineConfig::default();
        let small = CalculatorParams::new(25, Gender::Male, 100_000_000.0);
        assert_eq!(investment_linked(&small, &engine), Ok(7_000_000.0));

        let old = CalculatorParams::new(75, Gender::Male, 100_000_000.0);
        assert_eq!(investment_linked(&old, &engine), Err(NoRate::AgeNotTabulated { age: 75 }));
    }

    #[test]
    fn test_age_gender_term() {
        let engine = EngineConfig::default();
        // TL01 female: 30 -> 10 year rate 1.18; age 32 falls back to 30
        let params = CalculatorParams::new(32, Gender::Female, 500_000_000.0).with_term(10);
        assert_eq!(age_gender_term("TL01", &params, &engine), Ok(590_000.0));

        // Age 58 -> 60 (distance 2 < 3), where only the 5 year term exists
        let params = CalculatorParams::new(58, Gender::Male, 100_000_000.0).with_term(10);
        assert_eq!(
            age_gender_term("TL01", &params, &engine),
            Err(NoRate::TermNotTabulated { age: 60, term: Some(10) })
        );

        let no_term = CalculatorParams::new(30, Gender::Male, 100_000_000.0);
        assert!(matches!(
            age_gender_term("TL01", &no_term, &engine),
            Err(NoRate::TermNotTabulated { term: None, .. })
        ));
    }
}
