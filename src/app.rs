//! Application orchestrator.
//! Builds the config, initializes logging, selects the operation, validates its
//! parameters, and hands the request to the pipeline.

use anyhow::Result;
use std::io;
use std::path::PathBuf;
use tracing::{debug, error, info};

use tidy_move::cli::Args;
use tidy_move::output as out;
use tidy_move::{Config, LogLevel, Operation, OperationRequest, TidyMoveError, pipeline};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);

    // Initialize logging and hold the guard until the run is over so file logs flush
    let guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    if let Some(lvl) = args.log_level.as_deref()
        && LogLevel::parse(lvl).is_none()
    {
        out::print_warn(&format!(
            "Unknown log level '{lvl}'; using '{}'",
            cfg.log_level
        ));
    }

    debug!("Starting tidy_move: {:?}", args);

    let result = dispatch(&args, &cfg);

    drop(guard);
    result
}

/// Select and run the requested operation.
fn dispatch(args: &Args, cfg: &Config) -> Result<()> {
    let Some(operation) = Operation::lookup(&args.op) else {
        out::print_user("Invalid operation.");
        display_valid_options();
        info!(op = %args.op, "Unrecognized operation; nothing to do");
        return Ok(());
    };

    // The tick interval only matters once a pipeline runs.
    cfg.validate().map_err(fatal)?;

    let pattern = match operation {
        Operation::MoveByExt => &args.ext,
        Operation::MoveByName => &args.name,
    };
    debug!(%operation, dir = %args.dir, pattern = %pattern, "Operation selected");

    let request = OperationRequest::new(operation, pattern.as_str(), args.dir.as_str()).map_err(fatal)?;

    let cwd = current_working_directory().map_err(fatal)?;
    out::print_user(&request.scope_message(&cwd));

    pipeline::run(&request, &cwd, cfg.progress_interval, io::stdout()).map_err(fatal)?;
    Ok(())
}

/// Announce and return the directory the run operates on.
fn current_working_directory() -> Result<PathBuf, TidyMoveError> {
    let cwd = std::env::current_dir().map_err(TidyMoveError::CurrentDir)?;
    out::print_user(&format!(
        "The current working directory is: {}",
        cwd.display()
    ));
    Ok(cwd)
}

fn display_valid_options() {
    out::print_user("Valid operations:");
    for op in Operation::ALL {
        out::print_user(&format!("  -op {op}"));
    }
}

/// Log a run-ending error with its code before handing it up to main.
fn fatal(e: TidyMoveError) -> anyhow::Error {
    error!(code = e.code(), kind = e.kind(), error = %e, "Run aborted");
    e.into()
}
