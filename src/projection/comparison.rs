//! Side-by-side comparison of two countries

use super::format;
use crate::model::{Country, CountryStore};

/// The two names picked in the comparison selectors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    pub country_a: String,
    pub country_b: String,
}

/// Which comparison selector is being changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonSlot {
    A,
    B,
}

/// Detail block shared by the comparison and statistics views
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetails {
    pub name: String,
    pub flag: String,
    pub capital: String,
    pub population: String,
    pub area: String,
    pub region: String,
    pub languages: String,
    pub currencies: String,
}

impl CountryDetails {
    pub fn from_country(country: &Country) -> Self {
        Self {
            name: country.common_name().to_string(),
            flag: country.flags.png.clone(),
            capital: format::text_or_na(country.first_capital()),
            population: format::population(country.population),
            area: format::area(country.area),
            region: format::text_or_na(Some(country.region.as_str())),
            languages: format::join_or_na(country.language_names()),
            currencies: currencies_label(country),
        }
    }

    /// Label/value rows in display order
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Capital", self.capital.as_str()),
            ("Population", self.population.as_str()),
            ("Area", self.area.as_str()),
            ("Region", self.region.as_str()),
            ("Languages", self.languages.as_str()),
            ("Currency", self.currencies.as_str()),
        ]
    }
}

/// `"Name (symbol)"` for each currency, comma joined
pub fn currencies_label(country: &Country) -> String {
    match &country.currencies {
        Some(currencies) => format::join_or_na(currencies.values().map(|c| {
            format!("{} ({})", c.name, c.symbol.as_deref().unwrap_or(""))
        })),
        None => format::NOT_AVAILABLE.to_string(),
    }
}

/// Two resolved detail blocks
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left: CountryDetails,
    pub right: CountryDetails,
}

/// Resolve both selections; `None` when either is empty or unknown
pub fn project_comparison(store: &CountryStore, selection: &ComparisonSelection) -> Option<Comparison> {
    let left = store.find_by_name(&selection.country_a)?;
    let right = store.find_by_name(&selection.country_b)?;
    Some(Comparison {
        left: CountryDetails::from_country(left),
        right: CountryDetails::from_country(right),
    })
}
