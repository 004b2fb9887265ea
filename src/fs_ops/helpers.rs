//! I/O error descriptions.
//!
//! Appends a short, platform-aware remediation hint to an io::Error so the
//! per-item diagnostics printed by the mover say what to check next.
//!
//! Usage:
//!   out::print_error(&format!("Error moving {}: {}", p.display(), describe_io_error(&e)));

use std::io;

/// Hint for a raw OS error code, if one is known.
#[cfg(unix)]
fn os_code_hint(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
        libc::EXDEV => Some("cross-filesystem; rename cannot leave the current filesystem"),
        libc::EBUSY => Some("resource busy; ensure no other process is using it"),
        libc::ENOENT => Some("path not found; verify it exists"),
        libc::EEXIST => Some("already exists; remove it or pick another directory name"),
        libc::ENOTDIR => Some("a path component is not a directory"),
        libc::EISDIR => Some("target is a directory"),
        libc::ENOTEMPTY => Some("target is a non-empty directory"),
        libc::ENOSPC => Some("insufficient space on device"),
        libc::EROFS => Some("read-only filesystem; cannot write here"),
        libc::ENAMETOOLONG => Some("filename or path too long; shorten path segments"),
        _ => None,
    }
}

/// Hint for a raw Win32 error code, if one is known.
#[cfg(windows)]
fn os_code_hint(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("access denied; check permissions"),          // ERROR_ACCESS_DENIED
        17 => Some("not same device; cross-filesystem move"),   // ERROR_NOT_SAME_DEVICE
        32 => Some("sharing violation; file is in use"),        // ERROR_SHARING_VIOLATION
        2 | 3 => Some("path not found; verify it exists"),      // FILE/ PATH NOT FOUND
        80 | 183 => Some("already exists; pick a unique name"), // FILE_EXISTS / ALREADY_EXISTS
        112 => Some("insufficient disk space"),                 // ERROR_DISK_FULL
        206 => Some("filename or path too long"),               // ERROR_FILENAME_EXCED_RANGE
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn os_code_hint(_code: i32) -> Option<&'static str> {
    None
}

/// Fallback hint from the portable error kind.
fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists; remove it or pick another directory name"),
        _ => None,
    }
}

/// Render an io::Error with a hint and, when available, the raw OS code.
pub fn describe_io_error(e: &io::Error) -> String {
    let mut msg = e.to_string();
    match e.raw_os_error() {
        Some(code) => {
            if let Some(hint) = os_code_hint(code) {
                msg.push_str("; ");
                msg.push_str(hint);
            }
            msg.push_str(&format!(" [os code: {code}]"));
        }
        None => {
            if let Some(hint) = kind_hint(e.kind()) {
                msg.push_str("; ");
                msg.push_str(hint);
            }
        }
    }
    msg
}
