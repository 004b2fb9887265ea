//! Filesystem operations: the scan and the moves.

mod helpers;
mod matcher;
mod mover;

pub use helpers::describe_io_error;
pub use matcher::{EntryInfo, MatchRule, Matcher};
pub use mover::{MoveReport, Mover};
