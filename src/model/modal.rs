//! Modal stack for managing overlays
//!
//! Only the top modal receives input events.

/// Which single-select value an option picker edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Region,
    Subregion,
    Sort,
    FlagRegion,
    CompareA,
    CompareB,
    StatsCountry,
}

impl PickerKind {
    pub fn title(&self) -> &'static str {
        match self {
            PickerKind::Region => "Filter by Region",
            PickerKind::Subregion => "Filter by Subregion",
            PickerKind::Sort => "Sort by",
            PickerKind::FlagRegion => "Flag Region",
            PickerKind::CompareA => "First Country",
            PickerKind::CompareB => "Second Country",
            PickerKind::StatsCountry => "Country Statistics",
        }
    }

    /// Label of the leading "no value" entry, if the picker has one
    pub fn clear_label(&self) -> Option<&'static str> {
        match self {
            PickerKind::Region | PickerKind::FlagRegion => Some("All Regions"),
            PickerKind::Subregion => Some("All Subregions"),
            PickerKind::CompareA | PickerKind::CompareB => Some("Choose a country..."),
            PickerKind::Sort | PickerKind::StatsCountry => None,
        }
    }
}

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Single-select option list
    Picker { kind: PickerKind },
    /// Full detail for one country
    CountryDetail { name: String },
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Picker { kind: PickerKind::Region });
        stack.push(Modal::Help);
        assert_eq!(stack.top(), Some(&Modal::Help));

        assert_eq!(stack.pop(), Some(Modal::Help));
        assert_eq!(stack.pop(), Some(Modal::Picker { kind: PickerKind::Region }));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_clear_labels() {
        assert_eq!(PickerKind::Sort.clear_label(), None);
        assert_eq!(PickerKind::Subregion.clear_label(), Some("All Subregions"));
    }
}
