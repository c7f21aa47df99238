use std::fs;
use std::io;
use std::path::Path;

/// Remove whatever is at `path`: a directory tree, a file or a symlink (the
/// link itself, never its target). A missing path is not an error.
pub(super) fn remove_all(path: &Path) -> io::Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let res = if meta.file_type().is_dir() {
        fs::remove_dir_all(path)
    } else {
        remove_non_dir(path, &meta)
    };

    match res {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(windows)]
fn remove_non_dir(path: &Path, meta: &fs::Metadata) -> io::Result<()> {
    use std::os::windows::fs::FileTypeExt;
    // Directory symlinks/junctions must go through RemoveDirectory.
    if meta.file_type().is_symlink_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(not(windows))]
fn remove_non_dir(path: &Path, _meta: &fs::Metadata) -> io::Result<()> {
    fs::remove_file(path)
}
