//! Ranking model: reduce the country/year map to per-country averages.

use crate::input::CountryYearMap;
use crate::input::record::YearMap;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedAverage {
    pub country: String,
    pub average: f64,
}

/// Arithmetic mean of the recorded yearly values. Empty input yields 0.0.
pub fn average_of(years: &YearMap) -> f64 {
    if years.is_empty() {
        return 0.0;
    }
    let sum: i128 = years.values().map(|&gdp| i128::from(gdp)).sum();
    sum as f64 / years.len() as f64
}

/// Rank countries by mean GDP, highest first.
///
/// The sort is stable on the negated average, so countries with equal averages
/// keep the order in which they were first seen.
pub fn rank_averages(map: CountryYearMap) -> Vec<RankedAverage> {
    let mut ranked: Vec<RankedAverage> = map
        .into_iter()
        .map(|(country, years)| RankedAverage {
            average: average_of(&years),
            country,
        })
        .collect();

    ranked.sort_by(|a, b| {
        (-a.average)
            .partial_cmp(&-b.average)
            .unwrap_or(Ordering::Equal)
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GdpRecord;
    use pretty_assertions::assert_eq;

    fn map_of(rows: &[(&str, i64, i64)]) -> CountryYearMap {
        let mut map = CountryYearMap::new();
        for &(country, year, gdp) in rows {
            map.insert(GdpRecord {
                country: country.to_string(),
                year,
                gdp,
            });
        }
        map
    }

    fn ranked(rows: &[(&str, f64)]) -> Vec<RankedAverage> {
        rows.iter()
            .map(|&(country, average)| RankedAverage {
                country: country.to_string(),
                average,
            })
            .collect()
    }

    #[test]
    fn ranks_by_descending_average() {
        let map = map_of(&[
            ("Russia", 2020, 1000),
            ("Russia", 2021, 1100),
            ("USA", 2020, 2000),
            ("USA", 2021, 2100),
        ]);
        assert_eq!(
            rank_averages(map),
            ranked(&[("USA", 2050.0), ("Russia", 1050.0)])
        );
    }

    #[test]
    fn single_country() {
        let map = map_of(&[("Russia", 2020, 1000)]);
        assert_eq!(rank_averages(map), ranked(&[("Russia", 1000.0)]));
    }

    #[test]
    fn empty_map_gives_empty_ranking() {
        assert_eq!(rank_averages(CountryYearMap::new()), Vec::<RankedAverage>::new());
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let map = map_of(&[
            ("Brazil", 2020, 500),
            ("Chile", 2020, 900),
            ("Angola", 2020, 500),
            ("Denmark", 2020, 500),
        ]);
        assert_eq!(
            rank_averages(map),
            ranked(&[
                ("Chile", 900.0),
                ("Brazil", 500.0),
                ("Angola", 500.0),
                ("Denmark", 500.0),
            ])
        );
    }

    #[test]
    fn average_is_exact_mean_over_distinct_years() {
        let map = map_of(&[
            ("Peru", 2019, 1),
            ("Peru", 2020, 2),
            ("Peru", 2020, 4),
        ]);
        assert_eq!(map.get("Peru").map(average_of), Some(2.5));

        let years: YearMap = [(2019, 10), (2020, 20), (2021, 31)].into_iter().collect();
        assert!((average_of(&years) - 61.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn large_values_do_not_overflow() {
        let years: YearMap = [(2020, i64::MAX), (2021, i64::MAX)].into_iter().collect();
        assert!((average_of(&years) - i64::MAX as f64).abs() < 1e3);
    }

    #[test]
    fn ranking_is_deterministic() {
        let rows = [("A", 2020, 3), ("B", 2020, 3), ("C", 2021, 7)];
        assert_eq!(rank_averages(map_of(&rows)), rank_averages(map_of(&rows)));
    }
}
