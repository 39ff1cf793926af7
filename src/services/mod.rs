//! External service interactions
//!
//! - Country data source (HTTP API or local file)
//! - Background loading of the dataset

pub mod countries;
pub mod loader;

pub use countries::DataSource;
pub use loader::{DataLoader, LoadOutcome};
