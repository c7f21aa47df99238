//! Replace the original path with a symlink to the relocated copy.
//! Removal and link creation are separate calls so the orchestrator can tell
//! which half failed; neither is retried or undone.

use std::path::Path;
use tracing::info;

use super::helpers::io_error_with_help;
use super::util::remove_all;
use crate::errors::{FastlinkError, Result};
use crate::platform::create_symlink;

/// Remove whatever remains at `original`, whatever its type.
pub fn remove_original(original: &Path) -> Result<()> {
    remove_all(original).map_err(io_error_with_help("remove original path", original))
}

/// Create the symlink `original -> target`.
pub fn create_link(original: &Path, target: &Path) -> Result<()> {
    create_symlink(target, original).map_err(|source| FastlinkError::SymlinkCreation {
        link: original.to_path_buf(),
        target: target.to_path_buf(),
        source,
    })
}

/// Remove `original` and put a symlink to `target` in its place.
///
/// Library shorthand for the `RemoveOriginal` + `Link` steps of `relocate`,
/// which runs the two halves separately to report which one failed.
pub fn install_link(original: &Path, target: &Path) -> Result<()> {
    remove_original(original)?;
    create_link(original, target)?;
    info!(link = %original.display(), target = %target.display(), "installed symlink");
    Ok(())
}
