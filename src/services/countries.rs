//! Country data source
//!
//! Fetches the dataset from the REST Countries API with a blocking client,
//! or reads the same JSON shape from a local file.

use crate::config::Config;
use crate::error::LoadError;
use crate::model::{Country, CountryStore};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Where the records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Api { endpoint: String, timeout: Duration },
    File(String),
}

impl DataSource {
    pub fn from_config(config: &Config) -> Self {
        match &config.data_file {
            Some(path) if !path.trim().is_empty() => DataSource::File(path.clone()),
            _ => DataSource::Api {
                endpoint: config.api_endpoint.clone(),
                timeout: config.request_timeout(),
            },
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Api { endpoint, .. } => endpoint.clone(),
            DataSource::File(path) => format!("file {}", path),
        }
    }
}

/// Load and validate the full dataset from `source`
pub fn load_countries(source: &DataSource) -> Result<CountryStore, LoadError> {
    let countries = match source {
        DataSource::Api { endpoint, timeout } => fetch_countries(endpoint, *timeout)?,
        DataSource::File(path) => read_countries(Path::new(path))?,
    };
    build_store(countries)
}

fn fetch_countries(endpoint: &str, timeout: Duration) -> Result<Vec<Country>, LoadError> {
    debug!(endpoint, "fetching countries");

    let client = Client::builder().timeout(timeout).build()?;
    let response = client
        .get(endpoint)
        .header(USER_AGENT, format!("countries-tui/{}", env!("CARGO_PKG_VERSION")))
        .header(ACCEPT, "application/json")
        .send()?;

    if !response.status().is_success() {
        return Err(LoadError::Status {
            code: response.status().as_u16(),
        });
    }

    let body = response.text()?;
    parse_countries(&body)
}

fn read_countries(path: &Path) -> Result<Vec<Country>, LoadError> {
    debug!(path = %path.display(), "reading countries from file");
    let contents = fs::read_to_string(path)?;
    parse_countries(&contents)
}

/// Decode a JSON array of country records
pub fn parse_countries(json: &str) -> Result<Vec<Country>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

fn build_store(countries: Vec<Country>) -> Result<CountryStore, LoadError> {
    if countries.is_empty() {
        return Err(LoadError::Empty);
    }

    let store = CountryStore::new(countries);
    for name in store.duplicate_names() {
        warn!(name = %name, "duplicate common name; selections resolve to the first record");
    }
    info!(count = store.len(), "loaded countries");
    Ok(store)
}
