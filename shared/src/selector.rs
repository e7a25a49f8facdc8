use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::country::find_by_code;
use crate::game::TargetPair;

/// One row of `data.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DateCountry {
    pub country: String,
    #[serde(default)]
    pub date: String,
}

pub fn parse_country_csv(text: &str) -> Result<Vec<DateCountry>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes())
        .deserialize::<DateCountry>()
        .collect()
}

/// Pick two distinct registry countries from the rows.
///
/// Rows with unknown codes are ignored and duplicates count once, so the
/// draw is uniform over distinct usable codes.
pub fn pick_target_pair<R: Rng + ?Sized>(rows: &[DateCountry], rng: &mut R) -> Option<TargetPair> {
    let codes: BTreeSet<&'static str> = rows
        .iter()
        .filter_map(|row| find_by_code(&row.country))
        .map(|country| country.code)
        .collect();
    let codes: Vec<&'static str> = codes.into_iter().collect();
    if codes.len() < 2 {
        return None;
    }

    let first = rng.gen_range(0..codes.len());
    let mut second = rng.gen_range(0..codes.len() - 1);
    if second >= first {
        second += 1;
    }

    TargetPair::new(find_by_code(codes[first])?, find_by_code(codes[second])?)
}

/// Rng seeded from the day string, so a reload on the same day draws the same pair.
pub fn daily_rng(day: &str) -> StdRng {
    StdRng::seed_from_u64(u64::from(crc32fast::hash(day.as_bytes())))
}

pub fn daily_target_pair(rows: &[DateCountry], day: &str) -> Option<TargetPair> {
    pick_target_pair(rows, &mut daily_rng(day))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "country,date\nfr,2022-04-01\nde,2022-04-02\njp,2022-04-03\nbr,\nxx,2022-04-05\n";

    fn rows(codes: &[&str]) -> Vec<DateCountry> {
        codes
            .iter()
            .map(|code| DateCountry {
                country: (*code).to_owned(),
                date: String::new(),
            })
            .collect()
    }

    #[test]
    fn parses_rows_with_optional_date() {
        let rows = parse_country_csv(CSV).expect("csv parses");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].country, "fr");
        assert_eq!(rows[0].date, "2022-04-01");
        assert_eq!(rows[3].country, "br");
        assert!(rows[3].date.is_empty());
    }

    #[test]
    fn picks_are_distinct_registry_countries() {
        let rows = parse_country_csv(CSV).expect("csv parses");
        for seed in 0..200 {
            let pair = pick_target_pair(&rows, &mut StdRng::seed_from_u64(seed))
                .expect("enough usable rows");
            assert_ne!(pair.from.code, pair.to.code);
            assert!(["FR", "DE", "JP", "BR"].contains(&pair.from.code));
            assert!(["FR", "DE", "JP", "BR"].contains(&pair.to.code));
        }
    }

    #[test]
    fn duplicate_codes_never_pair_with_themselves() {
        let rows = rows(&["fr", "FR", " fr ", "de"]);
        for seed in 0..50 {
            let pair = pick_target_pair(&rows, &mut StdRng::seed_from_u64(seed))
                .expect("two distinct codes");
            assert_ne!(pair.from.code, pair.to.code);
        }
    }

    #[test]
    fn too_few_usable_rows_yield_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_target_pair(&[], &mut rng).is_none());
        assert!(pick_target_pair(&rows(&["fr"]), &mut rng).is_none());
        assert!(pick_target_pair(&rows(&["fr", "fr", "zz"]), &mut rng).is_none());
    }

    #[test]
    fn same_day_draws_the_same_pair() {
        let rows = parse_country_csv(CSV).expect("csv parses");
        let a = daily_target_pair(&rows, "2022-04-01").expect("pair");
        let b = daily_target_pair(&rows, "2022-04-01").expect("pair");
        assert_eq!(a.from.code, b.from.code);
        assert_eq!(a.to.code, b.to.code);
    }
}
