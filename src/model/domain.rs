//! Domain state - the dataset and its load lifecycle

use super::store::CountryStore;
use chrono::{DateTime, Local};

/// Lifecycle of the one-time dataset load
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready {
        store: CountryStore,
        loaded_at: DateTime<Local>,
    },
    /// Persistent; there is no retry
    Failed(String),
}

/// Domain state containing all business data
#[derive(Debug, Default)]
pub struct DomainState {
    load: LoadState,
}

impl DomainState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> Option<&CountryStore> {
        match &self.load {
            LoadState::Ready { store, .. } => Some(store),
            _ => None,
        }
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        match &self.load {
            LoadState::Ready { loaded_at, .. } => Some(*loaded_at),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Install the loaded dataset. Only the first resolution is accepted;
    /// returns false if the load already finished.
    pub fn finish_load(&mut self, store: CountryStore) -> bool {
        if !matches!(self.load, LoadState::Loading) {
            return false;
        }
        self.load = LoadState::Ready {
            store,
            loaded_at: Local::now(),
        };
        true
    }

    /// Record a load failure. Ignored once the load has resolved.
    pub fn fail_load(&mut self, message: String) -> bool {
        if !matches!(self.load, LoadState::Loading) {
            return false;
        }
        self.load = LoadState::Failed(message);
        true
    }
}
