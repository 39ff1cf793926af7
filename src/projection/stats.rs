//! Aggregate and per-country statistics

use super::comparison::CountryDetails;
use super::format;
use crate::model::{Country, CountryStore};
use std::collections::HashSet;

/// Totals over the whole dataset
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    pub country_count: usize,
    pub total_population: u64,
    pub total_area: f64,
    /// Distinct language display names (two codes spelling "English" count once)
    pub language_count: usize,
}

impl AggregateStats {
    pub fn population_label(&self) -> String {
        format::group_digits(self.total_population)
    }

    pub fn area_label(&self) -> String {
        format::area(Some(self.total_area))
    }
}

pub fn aggregate(countries: &[Country]) -> AggregateStats {
    let languages: HashSet<&str> = countries
        .iter()
        .flat_map(|c| c.language_names())
        .collect();

    AggregateStats {
        country_count: countries.len(),
        total_population: countries.iter().map(Country::population_or_zero).sum(),
        total_area: countries.iter().map(Country::area_or_zero).sum(),
        language_count: languages.len(),
    }
}

/// Statistics panel for the selected country
#[derive(Debug, Clone, PartialEq)]
pub enum CountryStats {
    /// Nothing selected
    Empty,
    /// Selected name did not resolve
    NotFound(String),
    Found {
        details: CountryDetails,
        subregion: String,
        timezones: String,
    },
}

pub fn project_country_stats(store: &CountryStore, selected: &str) -> CountryStats {
    if selected.is_empty() {
        return CountryStats::Empty;
    }
    match store.find_by_name(selected) {
        Some(country) => CountryStats::Found {
            details: CountryDetails::from_country(country),
            subregion: format::text_or_na(country.subregion()),
            timezones: format::join_or_na(country.timezones()),
        },
        None => CountryStats::NotFound(selected.to_string()),
    }
}
