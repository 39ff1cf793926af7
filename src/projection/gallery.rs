//! Flag gallery projection

use crate::model::collate::contains_ignore_case;
use crate::model::Country;

/// Layout of the flag gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagViewMode {
    #[default]
    Grid,
    List,
}

impl FlagViewMode {
    pub fn toggled(self) -> Self {
        match self {
            FlagViewMode::Grid => FlagViewMode::List,
            FlagViewMode::List => FlagViewMode::Grid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlagViewMode::Grid => "grid",
            FlagViewMode::List => "list",
        }
    }
}

/// How the gallery behaves before the user picks a region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagGalleryOptions {
    /// Region selected when the gallery first opens (empty = all)
    pub default_region: String,
    /// Show a prompt instead of flags while no region is selected
    pub requires_region_selection: bool,
}

/// Current gallery filters and layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagGalleryState {
    /// Empty means every region
    pub region: String,
    pub view_mode: FlagViewMode,
    /// Name filter inside the selected region
    pub search_text: String,
}

impl FlagGalleryState {
    pub fn new(options: &FlagGalleryOptions) -> Self {
        Self {
            region: options.default_region.clone(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagItem {
    pub name: String,
    pub flag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagGallery {
    /// A region has to be chosen first
    RegionRequired,
    /// Filters matched nothing
    NoMatches,
    Items {
        view_mode: FlagViewMode,
        items: Vec<FlagItem>,
    },
}

impl FlagGallery {
    pub fn len(&self) -> usize {
        match self {
            FlagGallery::Items { items, .. } => items.len(),
            _ => 0,
        }
    }
}

/// Filter the full store by the gallery's region and name search
pub fn project_gallery(
    countries: &[Country],
    state: &FlagGalleryState,
    options: &FlagGalleryOptions,
) -> FlagGallery {
    if state.region.is_empty() && options.requires_region_selection {
        return FlagGallery::RegionRequired;
    }

    let needle = state.search_text.trim().to_lowercase();
    let items: Vec<FlagItem> = countries
        .iter()
        .filter(|c| state.region.is_empty() || c.region == state.region)
        .filter(|c| contains_ignore_case(c.common_name(), &needle))
        .map(|c| FlagItem {
            name: c.common_name().to_string(),
            flag: c.flags.svg.clone(),
        })
        .collect();

    if items.is_empty() {
        FlagGallery::NoMatches
    } else {
        FlagGallery::Items {
            view_mode: state.view_mode,
            items,
        }
    }
}
