//! Country store - the loaded dataset
//!
//! Built once from the data source and never mutated afterwards. All views
//! borrow from it.

use super::collate::locale_cmp;
use super::country::Country;
use std::collections::{BTreeSet, HashSet};

/// A record together with its position in the store
#[derive(Debug, Clone, Copy)]
pub struct StoreEntry<'a> {
    pub position: usize,
    pub country: &'a Country,
}

impl AsRef<Country> for StoreEntry<'_> {
    fn as_ref(&self) -> &Country {
        self.country
    }
}

#[derive(Debug, Default)]
pub struct CountryStore {
    countries: Vec<Country>,
}

impl CountryStore {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    /// Every record paired with its position, in store order
    pub fn entries(&self) -> impl Iterator<Item = StoreEntry<'_>> {
        self.countries
            .iter()
            .enumerate()
            .map(|(position, country)| StoreEntry { position, country })
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// First record whose common name matches exactly
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        if name.is_empty() {
            return None;
        }
        self.countries.iter().find(|c| c.common_name() == name)
    }

    /// Distinct non-empty regions, sorted
    pub fn regions(&self) -> Vec<String> {
        region_options(&self.countries)
    }

    /// Common names in collation order (for country pickers)
    pub fn names_sorted(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .countries
            .iter()
            .map(|c| c.common_name().to_string())
            .collect();
        names.sort_by(|a, b| locale_cmp(a, b));
        names
    }

    /// Common names that appear on more than one record
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dupes = BTreeSet::new();
        for country in &self.countries {
            if !seen.insert(country.common_name()) {
                dupes.insert(country.common_name().to_string());
            }
        }
        dupes.into_iter().collect()
    }
}

/// Distinct non-empty regions among `countries`, sorted
pub fn region_options(countries: &[Country]) -> Vec<String> {
    countries
        .iter()
        .map(|c| c.region.as_str())
        .filter(|r| !r.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::country::fixtures::country;

    fn store() -> CountryStore {
        CountryStore::new(vec![
            country("Zebra", "Europe", Some(1000)),
            country("Brazil", "Americas", Some(500)),
            country("Aland", "Europe", Some(0)),
        ])
    }

    #[test]
    fn test_entries_sort_by_query_and_keep_positions() {
        use crate::model::{filter_and_sort, QueryState};
        let store = store();
        let positions: Vec<usize> = filter_and_sort(store.entries(), &QueryState::default())
            .into_iter()
            .map(|e| e.position)
            .collect();
        assert_eq!(positions, vec![2, 1, 0]);
    }

    #[test]
    fn test_find_by_name_exact_match_only() {
        let store = store();
        assert_eq!(store.find_by_name("Brazil").map(|c| c.region.as_str()), Some("Americas"));
        assert!(store.find_by_name("brazil").is_none());
        assert!(store.find_by_name("").is_none());
    }

    #[test]
    fn test_find_by_name_returns_first_duplicate() {
        let mut first = country("Congo", "Africa", Some(1));
        first.cca3 = Some("COG".to_string());
        let mut second = country("Congo", "Africa", Some(2));
        second.cca3 = Some("COD".to_string());
        let store = CountryStore::new(vec![first, second]);

        assert_eq!(store.find_by_name("Congo").and_then(|c| c.cca3.as_deref()), Some("COG"));
        assert_eq!(store.duplicate_names(), vec!["Congo".to_string()]);
    }

    #[test]
    fn test_regions_sorted_and_distinct() {
        assert_eq!(store().regions(), vec!["Americas", "Europe"]);
    }

    #[test]
    fn test_names_sorted() {
        assert_eq!(store().names_sorted(), vec!["Aland", "Brazil", "Zebra"]);
    }
}
