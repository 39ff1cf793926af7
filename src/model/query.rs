//! Query engine - search, filter and sort over the country store
//!
//! Everything here is a pure function of its inputs and is safe to call on
//! every keystroke.

use super::collate::{contains_ignore_case, locale_cmp};
use super::country::Country;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Sort order for the countries grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Population,
    Area,
    Capital,
}

impl SortKey {
    pub fn all() -> [SortKey; 4] {
        [SortKey::Name, SortKey::Population, SortKey::Area, SortKey::Capital]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Population => "Population",
            SortKey::Area => "Area",
            SortKey::Capital => "Capital",
        }
    }

    pub fn from_label(label: &str) -> Option<SortKey> {
        Self::all().into_iter().find(|k| k.label() == label)
    }

    fn compare(&self, a: &Country, b: &Country) -> Ordering {
        match self {
            SortKey::Name => locale_cmp(a.common_name(), b.common_name()),
            SortKey::Population => b.population_or_zero().cmp(&a.population_or_zero()),
            SortKey::Area => b.area_or_zero().total_cmp(&a.area_or_zero()),
            SortKey::Capital => locale_cmp(
                a.first_capital().unwrap_or(""),
                b.first_capital().unwrap_or(""),
            ),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search text, region/subregion filters and sort key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    /// Empty means any region
    pub region: String,
    /// Empty means any subregion
    pub subregion: String,
    pub sort_key: SortKey,
}

impl QueryState {
    /// Whether `country` passes all three filter predicates
    pub fn matches(&self, country: &Country) -> bool {
        let needle = self.search_text.to_lowercase();
        let text_match = contains_ignore_case(country.common_name(), &needle)
            || country
                .first_capital()
                .is_some_and(|cap| contains_ignore_case(cap, &needle));
        let region_match = self.region.is_empty() || country.region == self.region;
        let subregion_match =
            self.subregion.is_empty() || country.subregion() == Some(self.subregion.as_str());

        text_match && region_match && subregion_match
    }

    pub fn is_default(&self) -> bool {
        *self == QueryState::default()
    }
}

/// Filter `countries` by `query` and order the survivors by its sort key.
///
/// Works over anything that can be viewed as a country (`&Country`, a store
/// entry carrying its position). The sort is stable, so records that compare
/// equal keep their input order.
pub fn filter_and_sort<T, I>(countries: I, query: &QueryState) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: AsRef<Country>,
{
    let mut result: Vec<T> = countries
        .into_iter()
        .filter(|c| query.matches(c.as_ref()))
        .collect();
    result.sort_by(|a, b| query.sort_key.compare(a.as_ref(), b.as_ref()));
    result
}

/// Distinct subregions available for `region` (all countries when empty), sorted
pub fn subregion_options(countries: &[Country], region: &str) -> Vec<String> {
    countries
        .iter()
        .filter(|c| region.is_empty() || c.region == region)
        .filter_map(|c| c.subregion())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::country::fixtures::*;

    fn scenario() -> Vec<Country> {
        vec![
            country("Aland", "Europe", Some(0)),
            country("Zebra", "Europe", Some(1000)),
            country("Brazil", "Americas", Some(500)),
        ]
    }

    fn names(list: &[&Country]) -> Vec<String> {
        list.iter().map(|c| c.common_name().to_string()).collect()
    }

    fn dataset() -> Vec<Country> {
        vec![
            with_area(
                with_subregion(with_capital(country("France", "Europe", Some(67_000_000)), "Paris"), "Western Europe"),
                551_695.0,
            ),
            with_area(
                with_subregion(with_capital(country("Germany", "Europe", Some(83_000_000)), "Berlin"), "Western Europe"),
                357_114.0,
            ),
            with_area(
                with_subregion(with_capital(country("Norway", "Europe", Some(5_400_000)), "Oslo"), "Northern Europe"),
                323_802.0,
            ),
            with_area(
                with_subregion(with_capital(country("Japan", "Asia", Some(125_000_000)), "Tokyo"), "Eastern Asia"),
                377_930.0,
            ),
            with_subregion(with_capital(country("Peru", "Americas", Some(33_000_000)), "Lima"), "South America"),
            with_subregion(country("Bouvet Island", "Antarctic", None), ""),
            with_area(
                with_subregion(with_capital(country("Chile", "Americas", Some(19_000_000)), "Santiago"), "South America"),
                756_102.0,
            ),
        ]
    }

    #[test]
    fn test_scenario_region_filter_and_sorts() {
        let data = scenario();
        let mut query = QueryState {
            region: "Europe".to_string(),
            ..Default::default()
        };

        assert_eq!(names(&filter_and_sort(&data, &query)), vec!["Aland", "Zebra"]);

        query.sort_key = SortKey::Population;
        assert_eq!(names(&filter_and_sort(&data, &query)), vec!["Zebra", "Aland"]);
    }

    #[test]
    fn test_search_matches_name_or_first_capital() {
        let data = dataset();
        let query = QueryState {
            search_text: "ER".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter_and_sort(&data, &query)), vec!["Germany", "Peru"]);

        let query = QueryState {
            search_text: "tok".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter_and_sort(&data, &query)), vec!["Japan"]);

        let query = QueryState {
            search_text: "LI".to_string(),
            ..Default::default()
        };
        // Berlin and Lima
        assert_eq!(names(&filter_and_sort(&data, &query)), vec!["Germany", "Peru"]);
    }

    #[test]
    fn test_result_is_subset_satisfying_predicates() {
        let data = dataset();
        let queries = [
            QueryState::default(),
            QueryState { search_text: "o".into(), ..Default::default() },
            QueryState { region: "Europe".into(), subregion: "Western Europe".into(), ..Default::default() },
            QueryState { region: "Americas".into(), sort_key: SortKey::Area, ..Default::default() },
            QueryState { search_text: "zzz".into(), ..Default::default() },
        ];

        for query in &queries {
            let result = filter_and_sort(&data, query);
            assert!(result.len() <= data.len());
            for c in &result {
                assert!(data.iter().any(|d| std::ptr::eq(d, *c)));
                assert!(query.matches(c));
            }
            let expected = data.iter().filter(|c| query.matches(c)).count();
            assert_eq!(result.len(), expected);
        }
    }

    #[test]
    fn test_numeric_sorts_are_non_increasing() {
        let data = dataset();
        for key in [SortKey::Population, SortKey::Area] {
            let query = QueryState { sort_key: key, ..Default::default() };
            let result = filter_and_sort(&data, &query);
            for pair in result.windows(2) {
                match key {
                    SortKey::Population => assert!(pair[0].population_or_zero() >= pair[1].population_or_zero()),
                    _ => assert!(pair[0].area_or_zero() >= pair[1].area_or_zero()),
                }
            }
        }
    }

    #[test]
    fn test_text_sorts_are_non_decreasing() {
        let data = dataset();
        let by_name = filter_and_sort(&data, &QueryState::default());
        for pair in by_name.windows(2) {
            assert_ne!(locale_cmp(pair[0].common_name(), pair[1].common_name()), Ordering::Greater);
        }

        let query = QueryState { sort_key: SortKey::Capital, ..Default::default() };
        let by_capital = filter_and_sort(&data, &query);
        // Missing capital sorts first
        assert_eq!(by_capital[0].common_name(), "Bouvet Island");
        for pair in by_capital.windows(2) {
            assert_ne!(
                locale_cmp(pair[0].first_capital().unwrap_or(""), pair[1].first_capital().unwrap_or("")),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn test_sort_is_stable_and_repeatable() {
        let data = vec![
            country("First", "Asia", None),
            country("Second", "Asia", Some(0)),
            country("Third", "Asia", None),
        ];
        let query = QueryState { sort_key: SortKey::Population, ..Default::default() };
        let once = names(&filter_and_sort(&data, &query));
        let twice = names(&filter_and_sort(&data, &query));
        assert_eq!(once, vec!["First", "Second", "Third"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_subregion_options_follow_region() {
        let data = dataset();
        assert_eq!(
            subregion_options(&data, "Europe"),
            vec!["Northern Europe", "Western Europe"]
        );
        assert_eq!(
            subregion_options(&data, ""),
            vec!["Eastern Asia", "Northern Europe", "South America", "Western Europe"]
        );
        assert!(subregion_options(&data, "Antarctic").is_empty());
    }

    #[test]
    fn test_sort_key_labels_round_trip() {
        for key in SortKey::all() {
            assert_eq!(SortKey::from_label(key.label()), Some(key));
        }
        assert_eq!(SortKey::from_label("Elevation"), None);
    }
}
