//! Per-session wizard state.
//!
//! The reference workflow kept one process-wide mutable blob; here each
//! browser session gets its own [`WizardState`], keyed by a v4 UUID carried
//! in a cookie, so concurrent users never observe each other's edits.

use std::collections::HashMap;

use chrono::NaiveDate;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::{DayWindow, ExperimentConfig};

/// Everything one user has entered across the wizard steps so far.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub config: ExperimentConfig,
    /// Selected days in submitted order, duplicates preserved.
    pub days: Vec<NaiveDate>,
    /// Working window per day, seeded from the configuration defaults.
    pub windows: HashMap<NaiveDate, DayWindow>,
}

impl WizardState {
    /// Replace the day list and reseed every window from the defaults.
    pub fn set_days(&mut self, days: Vec<NaiveDate>) {
        self.windows = days
            .iter()
            .map(|d| (*d, DayWindow::from_defaults(&self.config)))
            .collect();
        self.days = days;
    }
}

/// In-memory session store shared across handlers.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, WizardState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the session's state, creating a fresh one on first use.
    pub fn with<R>(&self, id: Uuid, f: impl FnOnce(&mut WizardState) -> R) -> R {
        let mut sessions = self.sessions.write();
        f(sessions.entry(id).or_default())
    }

    /// Snapshot of the session's state, defaulted when the session is new.
    pub fn snapshot(&self, id: Uuid) -> WizardState {
        self.sessions.read().get(&id).cloned().unwrap_or_default()
    }

    /// Drop a session once its schedule has been generated.
    pub fn remove(&self, id: Uuid) {
        self.sessions.write().remove(&id);
    }
}
