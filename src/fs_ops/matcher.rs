//! Directory scan producing the stream of matching file names.
//!
//! The listing is taken as a snapshot before the first name is sent, so a
//! directory that cannot be read fails the scan before the mover sees anything.
//! Only direct children are considered and symlinks are never followed.

use flume::Sender;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::errors::TidyMoveError;

/// Which literal test a file name must pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Name ends with the pattern. No dot normalization: pass ".pdf", not "pdf".
    HasExtension,
    /// Name contains the pattern anywhere.
    NameContains,
}

impl MatchRule {
    /// Directories never match. Names are compared byte for byte, so a name
    /// that is not valid UTF-8 only matches a pattern it literally contains.
    pub fn matches(self, entry: &EntryInfo, pattern: &str) -> bool {
        if entry.is_dir {
            return false;
        }
        let name = entry.name.as_encoded_bytes();
        let pat = pattern.as_bytes();
        match self {
            MatchRule::HasExtension => name.ends_with(pat),
            MatchRule::NameContains => pat.is_empty() || name.windows(pat.len()).any(|w| w == pat),
        }
    }
}

/// What the matcher knows about one directory child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    name: OsString,
    is_dir: bool,
}

impl EntryInfo {
    pub fn new(name: impl Into<OsString>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }

    fn from_walk(entry: walkdir::DirEntry) -> Self {
        // file_type() comes from lstat here, so a symlink to a directory is not a dir
        Self {
            is_dir: entry.file_type().is_dir(),
            name: entry.file_name().to_os_string(),
        }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// Producer side of the pipeline.
#[derive(Debug, Clone)]
pub struct Matcher {
    dir: PathBuf,
    pattern: String,
    rule: MatchRule,
}

impl Matcher {
    pub fn new(dir: impl Into<PathBuf>, pattern: impl Into<String>, rule: MatchRule) -> Self {
        Self {
            dir: dir.into(),
            pattern: pattern.into(),
            rule,
        }
    }

    /// Snapshot of the direct children, sorted by file name.
    pub fn list(&self) -> Result<Vec<EntryInfo>, TidyMoveError> {
        WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .map(|res| res.map(EntryInfo::from_walk))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| TidyMoveError::ListDir {
                path: self.dir.clone(),
                source,
            })
    }

    /// Names that pass the rule, in listing order.
    pub fn matching(&self) -> Result<Vec<OsString>, TidyMoveError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|e| self.rule.matches(e, &self.pattern))
            .map(|e| e.name)
            .collect())
    }

    /// Send every matching name into `names` and return how many were sent.
    ///
    /// Takes the sender by value: the stream is closed when this returns, on
    /// the success path, the empty path, and the error path alike.
    pub fn scan(&self, names: Sender<OsString>) -> Result<usize, TidyMoveError> {
        let matches = self.matching()?;
        debug!(
            dir = %self.dir.display(),
            pattern = %self.pattern,
            rule = ?self.rule,
            found = matches.len(),
            "Directory scanned"
        );

        let mut sent = 0usize;
        for name in matches {
            trace!(name = %name.to_string_lossy(), "Queueing match");
            if names.send(name).is_err() {
                debug!(sent, "Receiver dropped; stopping scan early");
                break;
            }
            sent += 1;
        }
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn file(name: &str) -> EntryInfo {
        EntryInfo::new(name, false)
    }

    #[test]
    fn has_extension_is_a_literal_suffix() {
        let rule = MatchRule::HasExtension;
        assert!(rule.matches(&file("a.txt"), ".txt"));
        assert!(rule.matches(&file("a.txt"), "txt"));
        assert!(rule.matches(&file("atxt"), "txt"));
        assert!(!rule.matches(&file("a.txt.bak"), ".txt"));
        assert!(!rule.matches(&EntryInfo::new("c.txt", true), ".txt"));
    }

    #[test]
    fn name_contains_is_a_literal_substring() {
        let rule = MatchRule::NameContains;
        assert!(rule.matches(&file("draft_v1.txt"), "draft"));
        assert!(rule.matches(&file("my-draft"), "draft"));
        assert!(!rule.matches(&file("final.txt"), "draft"));
        assert!(!rule.matches(&file("d*t"), "dr*"));
        assert!(!rule.matches(&EntryInfo::new("drafts", true), "draft"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_match_only_literal_bytes() {
        use std::os::unix::ffi::OsStringExt;

        let raw = EntryInfo::new(OsString::from_vec(vec![b'a', 0xff, b'.', b't']), false);
        for rule in [MatchRule::HasExtension, MatchRule::NameContains] {
            assert!(!rule.matches(&raw, "\u{FFFD}"));
            assert!(!rule.matches(&raw, "\u{FFFD}.t"));
            assert!(rule.matches(&raw, ".t"));
        }
        assert!(MatchRule::NameContains.matches(&raw, "a"));
        assert!(MatchRule::NameContains.matches(&raw, ""));
    }

    #[test]
    fn subdirectories_are_never_emitted() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.txt"), b"a").unwrap();
        fs::write(td.path().join("b.log"), b"b").unwrap();
        fs::create_dir(td.path().join("c")).unwrap();
        fs::create_dir(td.path().join("d.txt")).unwrap();

        let by_ext = Matcher::new(td.path(), ".txt", MatchRule::HasExtension);
        assert_eq!(by_ext.matching().unwrap(), vec![OsString::from("a.txt")]);

        let by_name = Matcher::new(td.path(), "c", MatchRule::NameContains);
        assert!(by_name.matching().unwrap().is_empty());
    }

    #[test]
    fn list_reports_every_child_with_its_kind() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("b.txt"), b"").unwrap();
        fs::create_dir(td.path().join("a")).unwrap();

        let listed = Matcher::new(td.path(), "", MatchRule::NameContains).list().unwrap();
        let summary: Vec<(&OsStr, bool)> = listed.iter().map(|e| (e.name(), e.is_dir())).collect();
        assert_eq!(
            summary,
            vec![(OsStr::new("a"), true), (OsStr::new("b.txt"), false)]
        );
    }

    #[test]
    fn emitted_count_equals_matching_files() {
        let td = tempdir().unwrap();
        for name in ["x1.md", "x2.md", "x3.md", "y.md", "x4.txt"] {
            fs::write(td.path().join(name), b"").unwrap();
        }
        fs::create_dir(td.path().join("x5.md")).unwrap();

        let matcher = Matcher::new(td.path(), "x", MatchRule::NameContains);
        let (tx, rx) = flume::unbounded();
        let sent = matcher.scan(tx).unwrap();
        let got: Vec<OsString> = rx.iter().collect();

        assert_eq!(sent, 4);
        assert_eq!(got.len(), 4);
        let mut dedup = got.clone();
        dedup.dedup();
        assert_eq!(dedup, got, "no name should be emitted twice");
    }

    #[test]
    fn stream_closes_on_zero_matches() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("image.png"), b"").unwrap();

        let matcher = Matcher::new(td.path(), ".pdf", MatchRule::HasExtension);
        let (tx, rx) = flume::bounded(0);
        assert_eq!(matcher.scan(tx).unwrap(), 0);
        assert!(rx.recv().is_err(), "stream must be closed");
    }

    #[test]
    fn unreadable_directory_is_a_list_error_and_closes_stream() {
        let td = tempdir().unwrap();
        let missing = td.path().join("does-not-exist");

        let matcher = Matcher::new(&missing, ".txt", MatchRule::HasExtension);
        let (tx, rx) = flume::bounded(0);
        let err = matcher.scan(tx).unwrap_err();

        assert!(matches!(err, TidyMoveError::ListDir { ref path, .. } if *path == missing));
        assert!(rx.recv().is_err(), "stream must be closed after a failed scan");
    }

    #[test]
    fn scan_stops_when_receiver_is_gone() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.txt"), b"").unwrap();
        fs::write(td.path().join("b.txt"), b"").unwrap();

        let matcher = Matcher::new(td.path(), ".txt", MatchRule::HasExtension);
        let (tx, rx) = flume::bounded(0);
        drop(rx);
        assert_eq!(matcher.scan(tx).unwrap(), 0);
    }
}
