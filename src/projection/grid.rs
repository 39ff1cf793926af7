//! Grid card projection for the paginated countries view

use super::format;
use crate::model::Country;

/// What one card in the countries grid shows
#[derive(Debug, Clone, PartialEq)]
pub struct CountryCard {
    pub name: String,
    pub flag: String,
    pub capital: String,
    pub population: String,
    pub region: String,
    pub area: String,
}

impl CountryCard {
    pub fn from_country(country: &Country) -> Self {
        Self {
            name: country.common_name().to_string(),
            flag: country.flags.png.clone(),
            capital: format::text_or_na(country.first_capital()),
            population: format::population(country.population),
            region: format::text_or_na(Some(country.region.as_str())),
            area: format::area(country.area),
        }
    }
}

pub fn project_cards(visible: &[&Country]) -> Vec<CountryCard> {
    visible.iter().map(|c| CountryCard::from_country(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::country::fixtures::*;

    #[test]
    fn test_card_fields() {
        let brazil = with_area(with_capital(country("Brazil", "Americas", Some(212_559_409)), "Brasília"), 8_515_767.0);
        let card = CountryCard::from_country(&brazil);

        assert_eq!(card.name, "Brazil");
        assert_eq!(card.flag, "https://flagcdn.com/w320/brazil.png");
        assert_eq!(card.capital, "Brasília");
        assert_eq!(card.population, "212,559,409");
        assert_eq!(card.region, "Americas");
        assert_eq!(card.area, "8,515,767 km²");
    }

    #[test]
    fn test_card_placeholders() {
        let card = CountryCard::from_country(&country("Nowhere", "Antarctic", None));
        assert_eq!(card.capital, "N/A");
        assert_eq!(card.population, "N/A");
        assert_eq!(card.area, "N/A");
    }
}
