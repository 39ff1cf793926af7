//! View projections
//!
//! Stateless transforms from the store and controller state into plain
//! view data. Components render these; nothing here touches the terminal.

pub mod charts;
pub mod comparison;
pub mod detail;
pub mod format;
pub mod gallery;
pub mod grid;
pub mod stats;

pub use charts::{region_distribution, top_by_population, PopulationBar, RegionShare};
pub use comparison::{project_comparison, Comparison, ComparisonSelection, ComparisonSlot, CountryDetails};
pub use detail::CountryDetail;
pub use gallery::{project_gallery, FlagGallery, FlagGalleryOptions, FlagGalleryState, FlagItem, FlagViewMode};
pub use grid::{project_cards, CountryCard};
pub use stats::{aggregate, project_country_stats, AggregateStats, CountryStats};
