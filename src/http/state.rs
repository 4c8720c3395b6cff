//! Application state for the HTTP server.

use std::sync::Arc;

use crate::session::SessionStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Per-session wizard state
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SessionStore::new()))
    }
}
