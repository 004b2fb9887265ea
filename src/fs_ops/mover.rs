//! Consumer side of the pipeline.
//! Creates the destination directory, then renames each received name from the
//! base directory into it, one at a time and in receipt order.

use flume::Receiver;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::output as out;

use super::helpers::describe_io_error;

/// Tally of one drain; kept out of the user-facing summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveReport {
    pub moved: usize,
    pub failed: usize,
}

impl MoveReport {
    pub fn attempted(&self) -> usize {
        self.moved + self.failed
    }
}

#[derive(Debug, Clone)]
pub struct Mover {
    base: PathBuf,
    destination: PathBuf,
}

impl Mover {
    /// `destination` is joined onto `base`, even when it is absolute.
    pub fn new(base: impl Into<PathBuf>, destination: impl AsRef<Path>) -> Self {
        let base = base.into();
        let destination = base.join(relative_to_base(destination.as_ref()));
        Self { base, destination }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Create the destination and any missing parents. An existing directory is fine.
    ///
    /// Failure is reported and swallowed: the renames that follow will fail
    /// individually against whatever exists. Returns whether the directory is ready.
    pub fn prepare(&self) -> bool {
        match fs::create_dir_all(&self.destination) {
            Ok(()) => {
                debug!(path = %self.destination.display(), "Destination directory ready");
                true
            }
            Err(e) => {
                out::print_error(&format!(
                    "Error trying to create the directory {}: {}",
                    self.destination.display(),
                    describe_io_error(&e)
                ));
                debug!(path = %self.destination.display(), error = %e, "mkdir -p failed");
                false
            }
        }
    }

    /// Rename one file from the base into the destination.
    pub fn move_one(&self, name: &OsString) -> bool {
        let old_path = self.base.join(name);
        let new_path = self.destination.join(name);
        match fs::rename(&old_path, &new_path) {
            Ok(()) => {
                debug!(src = %old_path.display(), dest = %new_path.display(), "Moved file");
                true
            }
            Err(e) => {
                out::print_error(&format!(
                    "Error moving {} to new path {}: {}",
                    old_path.display(),
                    new_path.display(),
                    describe_io_error(&e)
                ));
                debug!(src = %old_path.display(), dest = %new_path.display(), error = %e, "Rename failed");
                false
            }
        }
    }

    /// Block on `names` until the producer closes it; a failed move never stops the drain.
    pub fn drain(&self, names: &Receiver<OsString>) -> MoveReport {
        let mut report = MoveReport::default();
        for name in names.iter() {
            if self.move_one(&name) {
                report.moved += 1;
            } else {
                report.failed += 1;
            }
        }
        report
    }
}

/// Drop root and drive prefixes so the join below can never escape `base`.
fn relative_to_base(dest: &Path) -> PathBuf {
    dest.components()
        .filter(|c| {
            matches!(
                c,
                Component::Normal(_) | Component::CurDir | Component::ParentDir
            )
        })
        .collect()
}
