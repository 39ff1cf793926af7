//! UI state - presentation state separate from domain data

/// Panel selection in the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Countries,
    Flags,
    Compare,
    Statistics,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![Tab::Countries, Tab::Flags, Tab::Compare, Tab::Statistics]
    }

    pub fn name(&self) -> &str {
        match self {
            Tab::Countries => "Countries",
            Tab::Flags => "Flags",
            Tab::Compare => "Compare",
            Tab::Statistics => "Statistics",
        }
    }

    pub fn next(self) -> Tab {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self).unwrap_or(0);
        tabs[(idx + 1) % tabs.len()]
    }

    pub fn previous(self) -> Tab {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self).unwrap_or(0);
        tabs[(idx + tabs.len() - 1) % tabs.len()]
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Waiting for the dataset
    Loading,
    Running,
    /// Dataset could not be loaded; terminal until restart
    Failed,
}

/// Which free-text field keystrokes go to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    Countries,
    Flags,
}
