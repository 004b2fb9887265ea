//! Progress indicator.
//! Prints one marker per tick until the completion signal arrives, then the summary.

use flume::{Receiver, TryRecvError};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Value carried by the completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Every matched file has been attempted.
    Finished,
    /// The scan failed; nothing was moved and no summary is due.
    Aborted,
}

pub const MARKER: &str = ".";

pub struct ProgressReporter<W> {
    summary: String,
    interval: Duration,
    out: W,
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(summary: impl Into<String>, interval: Duration, out: W) -> Self {
        Self {
            summary: summary.into(),
            interval,
            out,
        }
    }

    /// Poll `done` until it yields, then print the summary (only for `Finished`).
    ///
    /// Returns the number of markers printed. A dropped sender ends the loop
    /// without a summary.
    pub fn run(mut self, done: Receiver<Completion>) -> io::Result<usize> {
        let mut ticks = 0usize;
        loop {
            match done.try_recv() {
                Ok(Completion::Finished) => {
                    self.out.write_all(self.summary.as_bytes())?;
                    self.out.flush()?;
                    return Ok(ticks);
                }
                Ok(Completion::Aborted) | Err(TryRecvError::Disconnected) => {
                    self.out.flush()?;
                    return Ok(ticks);
                }
                Err(TryRecvError::Empty) => {
                    self.out.write_all(MARKER.as_bytes())?;
                    self.out.flush()?;
                    ticks += 1;
                    thread::sleep(self.interval);
                }
            }
        }
    }
}
