//! Windows implementations of platform helpers (best-effort).
//!
//! Notes:
//! - Windows lacks POSIX mode semantics; directory modes are not applied.
//! - Symlinks need either admin rights or Developer Mode.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Open log file for appending (best-effort; no symlink defense available via std on Windows).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Plain create_dir_all; POSIX-style directory modes are not applicable.
pub fn create_dir_all_0755(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Create a file or directory symlink depending on what `target` is.
pub fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
