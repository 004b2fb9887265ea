//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - The request flags are documented single-dash (`-op MoveByExt -ext .pdf -dir pdfs`).
//!   They are rewritten to their `--` form before clap sees them; both spellings work,
//!   as does `-flag=value`.
//! - Empty or unknown `-op` values are accepted here; the dispatcher reports them.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::types::{Config, LogLevel};

/// Request flags that may be spelled with a single dash.
pub const SINGLE_DASH_FLAGS: [&str; 4] = ["op", "dir", "ext", "name"];

/// Move files out of the current directory into a subdirectory.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move files from the current directory into a subdirectory by extension or name"
)]
pub struct Args {
    /// Operation name: MoveByExt or MoveByName.
    #[arg(long = "op", value_name = "NAME", default_value = "")]
    pub op: String,

    /// Directory (relative to the current one) that receives the matched files.
    #[arg(
        long = "dir",
        value_name = "NAME",
        default_value = "",
        value_hint = ValueHint::DirPath
    )]
    pub dir: String,

    /// Literal suffix a file name must end with (MoveByExt). Include the dot if you want one.
    #[arg(
        long = "ext",
        value_name = "SUFFIX",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub ext: String,

    /// Literal substring a file name must contain (MoveByName).
    #[arg(
        long = "name",
        value_name = "SUBSTRING",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub name: String,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Also append logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Milliseconds between progress markers.
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,
}

impl Args {
    /// Parse from an argument list, accepting single-dash request flags.
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_flags(args))
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.json {
            cfg.json = true;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if let Some(ms) = self.tick_ms {
            cfg.progress_interval = Duration::from_millis(ms);
        }
    }
}

/// Rewrite `-op`, `-dir`, `-ext`, `-name` (and their `=value` forms) to `--` flags.
/// Everything else passes through untouched, including non-UTF-8 arguments.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if let Some(rest) = s.strip_prefix('-')
                && !rest.starts_with('-')
            {
                let key = rest.split_once('=').map_or(rest, |(k, _)| k);
                if SINGLE_DASH_FLAGS.contains(&key) {
                    return OsString::from(format!("-{s}"));
                }
            }
            arg
        })
        .collect()
}

pub fn parse() -> Args {
    Args::parse_normalized(std::env::args_os())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rewrites_only_request_flags() {
        let out = normalize_flags([
            "tidy_move", "-op", "MoveByExt", "-ext=.pdf", "--dir", "pdfs", "-d", "-opx",
        ]);
        let out: Vec<_> = out.iter().map(|s| s.to_str().unwrap()).collect();
        assert_eq!(
            out,
            [
                "tidy_move", "--op", "MoveByExt", "--ext=.pdf", "--dir", "pdfs", "-d", "-opx"
            ]
        );
    }
}
