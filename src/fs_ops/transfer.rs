//! Transfer engine: existence guard, replication and optional source removal.
//!
//! Each stage is exposed on its own so the relocation orchestrator can report
//! which one failed; `transfer` chains them for callers that do not care.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use super::helpers::io_error_with_help;
use super::io_copy::replicate_file;
use super::tree::{ReplicaStats, replicate_tree};
use super::util::remove_all;
use crate::errors::{FastlinkError, Result};

/// Outcome of a completed `transfer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReport {
    pub stats: ReplicaStats,
    pub source_removed: bool,
}

/// Fail with `DestinationExists` when anything (even a dangling link) is at `dst`.
pub fn ensure_destination_absent(dst: &Path) -> Result<()> {
    match fs::symlink_metadata(dst) {
        Ok(_) => Err(FastlinkError::DestinationExists(dst.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error_with_help("stat destination", dst)(e)),
    }
}

/// Copy `src` to `dst`, choosing tree or file replication from the source type.
pub fn replicate_entry(src: &Path, dst: &Path) -> Result<ReplicaStats> {
    let meta = fs::metadata(src).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            FastlinkError::SourceNotFound(src.to_path_buf())
        } else {
            io_error_with_help("stat source", src)(e)
        }
    })?;

    if meta.is_dir() {
        replicate_tree(src, dst)
    } else {
        let bytes = replicate_file(src, dst)?;
        Ok(ReplicaStats {
            files: 1,
            dirs: 0,
            bytes,
        })
    }
}

/// Refuse an occupied `dst`, then replicate `src` into it.
pub fn replicate_fresh(src: &Path, dst: &Path) -> Result<ReplicaStats> {
    ensure_destination_absent(dst)?;
    replicate_entry(src, dst)
}

/// Delete the source subtree after a successful copy.
pub fn remove_source(src: &Path) -> Result<()> {
    remove_all(src).map_err(io_error_with_help("remove source after move", src))?;
    debug!(src = %src.display(), "removed source after move");
    Ok(())
}

/// Replicate `src` to `dst`; with `is_move`, delete `src` afterwards.
///
/// A removal failure is reported even though the copy already succeeded.
pub fn transfer(src: &Path, dst: &Path, is_move: bool) -> Result<TransferReport> {
    let stats = replicate_fresh(src, dst)?;
    if is_move {
        remove_source(src)?;
    }
    info!(
        src = %src.display(),
        dst = %dst.display(),
        is_move,
        files = stats.files,
        bytes = stats.bytes,
        "transfer complete"
    );
    Ok(TransferReport {
        stats,
        source_removed: is_move,
    })
}
