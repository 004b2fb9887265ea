//! Config module.
//! Provides runtime configuration types, defaults, and validation.

pub mod types;
mod validate;

pub use types::{Config, LogLevel};

/// Delay between progress markers when no override is given.
pub const PROGRESS_INTERVAL_DEFAULT: std::time::Duration = std::time::Duration::from_millis(100);
