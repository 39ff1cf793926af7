//! Model layer - centralized state management
//!
//! This module contains the data and state types:
//! - `Country` / `CountryStore` - The loaded dataset
//! - `QueryState` / `filter_and_sort` - Search, filter and sort
//! - `PageState` / `paginate` - Grid pagination
//! - `DomainState` - Load lifecycle of the dataset
//! - `ModalStack` - Modal overlay management

pub mod collate;
pub mod country;
pub mod domain;
pub mod modal;
pub mod pagination;
pub mod query;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use country::Country;
pub use domain::DomainState;
pub use pagination::{paginate, Page, PageButton, PageState};
pub use query::{filter_and_sort, subregion_options, QueryState, SortKey};
pub use store::CountryStore;
