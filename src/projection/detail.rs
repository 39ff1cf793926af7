//! Full country detail shown from a grid card

use super::comparison::currencies_label;
use super::format;
use crate::model::Country;

#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetail {
    pub name: String,
    pub flag: String,
    pub official_name: String,
    pub native_name: String,
    pub region: String,
    pub subregion: String,
    pub capitals: String,
    pub population: String,
    pub area: String,
    pub languages: String,
    pub currencies: String,
    pub timezones: String,
}

impl CountryDetail {
    pub fn from_country(country: &Country) -> Self {
        Self {
            name: country.common_name().to_string(),
            flag: country.flags.svg.clone(),
            official_name: format::text_or_na(Some(country.name.official.as_str())),
            native_name: format::text_or_na(country.native_common_name()),
            region: format::text_or_na(Some(country.region.as_str())),
            subregion: format::text_or_na(country.subregion()),
            capitals: format::join_or_na(country.capital.as_deref().unwrap_or(&[])),
            population: format::population(country.population),
            area: format::area(country.area),
            languages: format::join_or_na(country.language_names()),
            currencies: currencies_label(country),
            timezones: format::join_or_na(country.timezones()),
        }
    }

    /// Sections of label/value rows
    pub fn sections(&self) -> Vec<(&'static str, Vec<(&'static str, &str)>)> {
        vec![
            (
                "General Information",
                vec![
                    ("Official Name", self.official_name.as_str()),
                    ("Native Name", self.native_name.as_str()),
                    ("Region", self.region.as_str()),
                    ("Subregion", self.subregion.as_str()),
                    ("Capital", self.capitals.as_str()),
                    ("Population", self.population.as_str()),
                    ("Area", self.area.as_str()),
                ],
            ),
            (
                "Languages & Currency",
                vec![
                    ("Languages", self.languages.as_str()),
                    ("Currencies", self.currencies.as_str()),
                    ("Timezones", self.timezones.as_str()),
                ],
            ),
        ]
    }
}
