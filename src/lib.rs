//! # labslot
//!
//! A three-step web wizard for scheduling experiment trials. Users enter
//! global defaults (trial length, prep time, working hours, lunch window),
//! pick calendar days, fine-tune each day's start and end, and download the
//! resulting timetable as an `.xlsx` spreadsheet.
//!
//! ## Architecture
//!
//! - [`models`]: typed configuration, time-of-day, and schedule row types
//! - [`session`]: per-session wizard state, keyed by a cookie
//! - [`scheduler`]: pure schedule generation
//! - [`export`]: spreadsheet rendering
//! - [`http`]: axum routes, form parsing, and error mapping

pub mod export;
pub mod http;
pub mod models;
pub mod scheduler;
pub mod session;
