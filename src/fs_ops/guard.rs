//! Path safety checks.
//! - Lexical normalization (no filesystem access).
//! - Containment test used to reject a destination nested inside the source.
//!
//! Notes:
//! - `..` above the root of an absolute path collapses to the root.
//! - Leading `..` segments of a relative path are kept.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::errors::{FastlinkError, Result};

/// Resolve `.` and `..` segments without touching the filesystem.
/// An empty result is returned as `.`.
pub fn normalize_lexical(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Join relative paths onto the current directory, then normalize.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(FastlinkError::PathResolution {
            path: path.to_path_buf(),
            reason: "empty path".into(),
        });
    }
    if path.is_absolute() {
        return Ok(normalize_lexical(path));
    }
    let cwd = env::current_dir().map_err(|e| FastlinkError::PathResolution {
        path: path.to_path_buf(),
        reason: format!("cannot read current directory: {e}"),
    })?;
    Ok(normalize_lexical(&cwd.join(path)))
}

/// True when `child` is `parent` itself or lies beneath it.
///
/// Both sides are normalized first; the answer is whether the relative path
/// from `parent` to `child` starts with a `..` segment. An absolute path is
/// never related to a relative one.
pub fn is_sub_path(parent: &Path, child: &Path) -> bool {
    let parent = normalize_lexical(parent);
    let child = normalize_lexical(child);
    if parent.has_root() != child.has_root() {
        return false;
    }

    let mut child_comps = child.components().filter(|c| *c != Component::CurDir).peekable();

    for p in parent.components().filter(|c| *c != Component::CurDir) {
        match child_comps.next() {
            Some(c) if c == p => {}
            // Diverged: the relative path walks up out of `parent`.
            _ => return false,
        }
    }

    !matches!(child_comps.peek(), Some(Component::ParentDir))
}

/// Refuse a destination root equal to, or nested inside, the source.
pub fn ensure_not_recursive(source: &Path, destination_root: &Path) -> Result<()> {
    if is_sub_path(source, destination_root) {
        return Err(FastlinkError::RecursiveMove {
            source_path: source.to_path_buf(),
            destination: destination_root.to_path_buf(),
        });
    }
    Ok(())
}
