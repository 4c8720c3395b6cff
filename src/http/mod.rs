//! Axum HTTP layer for the scheduling wizard.
//!
//! Three form-driven routes make up the whole surface:
//!
//! ```text
//! GET/POST /                 step A: global defaults
//! GET/POST /select_days      step B: day selection
//! GET/POST /verify_schedule  step C: per-day overrides + workbook download
//! ```
//!
//! Handlers parse and validate form input, mutate the caller's session, and
//! hand off to the pure [`scheduler`](crate::scheduler) and
//! [`export`](crate::export) layers.

pub mod error;
pub mod forms;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use router::create_router;
pub use state::AppState;
