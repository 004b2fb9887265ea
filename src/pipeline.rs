//! Scan-and-move pipeline.
//!
//! Three threads cooperate for one run:
//! - the matcher lists the base directory and sends matching names,
//! - the mover (the calling thread) creates the destination and drains the names,
//! - the progress reporter ticks until it is told the drain is over.
//!
//! The names travel over a rendezvous channel closed by the matcher dropping
//! its sender. The completion signal is sent only after the drain returns, so
//! every rename has been attempted before the summary can be printed.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::TidyMoveError;
use crate::fs_ops::{Matcher, MoveReport, Mover};
use crate::operation::OperationRequest;
use crate::progress::{Completion, ProgressReporter};

/// Run `request` against `base`, writing progress and the summary to `out`.
///
/// A listing failure is returned as an error once the (empty) drain has
/// finished; no rename happens in that case and no summary is printed.
pub fn run<W: Write + Send>(
    request: &OperationRequest,
    base: &Path,
    interval: Duration,
    out: W,
) -> Result<MoveReport, TidyMoveError> {
    let matcher = Matcher::new(base, request.pattern(), request.operation().rule());
    let mover = Mover::new(base, request.destination());
    let summary = request.summary_message(base);

    let (name_tx, name_rx) = flume::bounded::<OsString>(0);
    let (done_tx, done_rx) = flume::bounded::<Completion>(1);

    thread::scope(|s| {
        let scan = s.spawn(move || matcher.scan(name_tx));

        mover.prepare();

        let reporter = s.spawn(move || ProgressReporter::new(summary, interval, out).run(done_rx));

        let report = mover.drain(&name_rx);

        let scanned = scan
            .join()
            .map_err(|_| TidyMoveError::WorkerPanicked("matcher"))
            .and_then(|res| res);

        let signal = if scanned.is_ok() {
            Completion::Finished
        } else {
            Completion::Aborted
        };
        // The reporter only goes away early if its output failed; nothing to signal then.
        let _ = done_tx.send(signal);

        match reporter.join() {
            Ok(Ok(ticks)) => debug!(ticks, "Progress reporter finished"),
            Ok(Err(e)) => debug!(error = %e, "Progress output failed"),
            Err(_) => return Err(TidyMoveError::WorkerPanicked("progress reporter")),
        }

        let sent = scanned?;
        info!(
            matched = sent,
            moved = report.moved,
            failed = report.failed,
            dest = %mover.destination().display(),
            "Run complete"
        );
        Ok(report)
    })
}
