//! Background dataset loader
//!
//! Runs the one-time load on a worker thread and hands the result back over
//! a channel that the main loop polls on every tick.

use crate::error::LoadError;
use crate::model::CountryStore;
use crate::services::countries::{load_countries, DataSource};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Result delivered by the worker
pub type LoadOutcome = Result<CountryStore, LoadError>;

/// A load in progress
struct PendingLoad {
    receiver: Receiver<LoadOutcome>,
    start_instant: Instant,
}

/// Loader service for the country dataset
#[derive(Default)]
pub struct DataLoader {
    pending: Option<PendingLoad>,
}

impl DataLoader {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Start loading from `source` on a background thread
    pub fn spawn(&mut self, source: DataSource) {
        info!(source = %source.describe(), "starting country load");
        self.spawn_with(move || load_countries(&source));
    }

    /// Start a load driven by an arbitrary job
    pub fn spawn_with<F>(&mut self, job: F)
    where
        F: FnOnce() -> LoadOutcome + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(job());
        });

        self.pending = Some(PendingLoad {
            receiver: rx,
            start_instant: Instant::now(),
        });
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Time since the current load started
    pub fn elapsed(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.start_instant.elapsed())
    }

    /// Check for a finished load. Returns the outcome exactly once.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let pending = self.pending.as_ref()?;

        let outcome = match pending.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                Err(LoadError::Internal("worker thread exited without a result".to_string()))
            }
        };

        let elapsed = pending.start_instant.elapsed();
        match &outcome {
            Ok(store) => info!(count = store.len(), ?elapsed, "country load finished"),
            Err(e) => error!(error = %e, ?elapsed, "country load failed"),
        }
        self.pending = None;
        Some(outcome)
    }
}
