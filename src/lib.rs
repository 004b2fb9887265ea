//! Core library for `tidy_move`.
//!
//! Moves files from a base directory into a subdirectory of it, selecting them
//! either by a literal name suffix or by a literal substring. The work runs as
//! a small pipeline: a matcher thread feeds names to the mover while a progress
//! reporter ticks until the mover is done.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod operation;
pub mod output;
pub mod pipeline;
pub mod progress;

pub use config::{Config, LogLevel, PROGRESS_INTERVAL_DEFAULT};
pub use errors::TidyMoveError;
pub use fs_ops::{EntryInfo, MatchRule, Matcher, MoveReport, Mover};
pub use operation::{Operation, OperationRequest};
pub use pipeline::run;
pub use progress::{Completion, ProgressReporter};
