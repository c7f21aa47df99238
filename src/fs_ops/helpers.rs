//! I/O error helpers.
//!
//! Wraps io::Error into `FastlinkError::Io`, tagging the failing operation and
//! path and appending a platform-aware hint where the errno is a common one.
//!
//! Usage:
//!   File::open(p).map_err(io_error_with_help("open source file", p))?;

use std::io;
use std::path::Path;

use crate::errors::FastlinkError;

/// Short actionable hint for an io::Error, or an empty string.
fn hint_for(e: &io::Error) -> String {
    let mut hint = String::new();

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    hint.push_str(" (permission denied; check ownership and write permissions)");
                }
                libc::EXDEV => hint.push_str(" (cross-filesystem operation)"),
                libc::EBUSY => hint.push_str(" (resource busy)"),
                libc::ENOENT => hint.push_str(" (path not found; verify it exists)"),
                libc::EEXIST => hint.push_str(" (already exists; remove the target first)"),
                libc::ENOSPC => hint.push_str(" (insufficient space on device)"),
                libc::EROFS => hint.push_str(" (read-only filesystem)"),
                libc::ELOOP => hint.push_str(" (too many symbolic link levels)"),
                libc::ENAMETOOLONG => hint.push_str(" (filename or path too long)"),
                libc::EMFILE | libc::ENFILE => hint.push_str(" (too many open files)"),
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => hint.push_str(" (access denied; check permissions)"),
                2 | 3 => hint.push_str(" (path not found; verify it exists)"),
                80 | 183 => hint.push_str(" (already exists; remove the target first)"),
                112 => hint.push_str(" (insufficient disk space)"),
                1314 => hint.push_str(" (symlink privilege not held; enable Developer Mode)"),
                _ => {}
            }
        }
        hint.push_str(&format!(" [os code: {code}]"));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => hint.push_str(" (permission denied)"),
            io::ErrorKind::NotFound => hint.push_str(" (path not found; verify it exists)"),
            io::ErrorKind::AlreadyExists => hint.push_str(" (already exists)"),
            _ => {}
        }
    }

    hint
}

/// Returns a closure suitable for `.map_err(...)` that converts an io::Error
/// into `FastlinkError::Io` for `op` on `path`.
pub fn io_error_with_help<'a>(
    op: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> FastlinkError + 'a {
    move |e: io::Error| FastlinkError::Io {
        op,
        path: path.to_path_buf(),
        hint: hint_for(&e),
        source: e,
    }
}
