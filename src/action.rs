//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them by calling into the controller.

use crate::model::modal::PickerKind;
use crate::model::ui::SearchTarget;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick; also polls the background loader
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next tab
    NextTab,
    /// Move to previous tab
    PrevTab,
    /// Move the card cursor forward
    NextItem,
    /// Move the card cursor back
    PrevItem,
    /// Move through the flag gallery by a signed step, stopping at either end
    MoveFlagCursor(isize),

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    NextPage,
    PrevPage,
    /// Jump to a page number
    GoToPage(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Start editing a search box
    EnterSearchMode(SearchTarget),
    /// Stop editing the search box
    ExitSearchMode,
    /// Add character to the active search box
    SearchInput(char),
    /// Remove last character from the active search box
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Open an option picker
    OpenPicker(PickerKind),
    /// Apply a picker choice (empty string clears the value)
    ApplyPicker(PickerKind, String),
    /// Restore default search, filters and sort
    ResetFilters,
    /// Switch the flag gallery between grid and list
    ToggleFlagView,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Open the detail view for the card under the cursor
    OpenCountryDetail,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::MoveFlagCursor(step) => write!(f, "MoveFlagCursor({})", step),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::GoToPage(page) => write!(f, "GoToPage({})", page),
            Action::EnterSearchMode(target) => write!(f, "EnterSearchMode({:?})", target),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::OpenPicker(kind) => write!(f, "OpenPicker({:?})", kind),
            Action::ApplyPicker(kind, value) => write!(f, "ApplyPicker({:?}, {})", kind, value),
            Action::ResetFilters => write!(f, "ResetFilters"),
            Action::ToggleFlagView => write!(f, "ToggleFlagView"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenCountryDetail => write!(f, "OpenCountryDetail"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
