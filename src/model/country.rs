//! Data models for country records as served by the REST Countries API

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

/// A JSON object decoded into a list of entries, keeping the source order.
///
/// The API returns `languages`, `currencies` and `nativeName` as objects and
/// the dashboard lists their values in the order they appear.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Common and official spelling of a name
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Country naming block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(default, rename = "nativeName")]
    pub native_name: Option<OrderedMap<NativeName>>,
}

/// Flag image references
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Currency entry keyed by its ISO code in [`Country::currencies`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// One country record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Option<OrderedMap<String>>,
    #[serde(default)]
    pub currencies: Option<OrderedMap<Currency>>,
    #[serde(default)]
    pub timezones: Option<Vec<String>>,
    #[serde(default)]
    pub cca3: Option<String>,
}

impl AsRef<Country> for Country {
    fn as_ref(&self) -> &Country {
        self
    }
}

impl Country {
    /// The selection key used throughout the dashboard
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// First listed capital, if any
    pub fn first_capital(&self) -> Option<&str> {
        self.capital
            .as_ref()
            .and_then(|caps| caps.first())
            .map(|s| s.as_str())
    }

    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref().filter(|s| !s.is_empty())
    }

    /// Population used for sorting and aggregation (missing counts as 0)
    pub fn population_or_zero(&self) -> u64 {
        self.population.unwrap_or(0)
    }

    /// Area used for sorting and aggregation (missing counts as 0)
    pub fn area_or_zero(&self) -> f64 {
        self.area.unwrap_or(0.0)
    }

    /// Language display names in source order
    pub fn language_names(&self) -> Vec<&str> {
        self.languages
            .as_ref()
            .map(|langs| langs.values().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    /// First native common name
    pub fn native_common_name(&self) -> Option<&str> {
        self.name
            .native_name
            .as_ref()
            .and_then(|names| names.values().next())
            .map(|n| n.common.as_str())
            .filter(|s| !s.is_empty())
    }

    pub fn timezones(&self) -> &[String] {
        self.timezones.as_deref().unwrap_or(&[])
    }
}
