pub mod config;
pub mod schedule;
pub mod time;

pub use config::*;
pub use schedule::*;
pub use time::*;
