//! Recursive directory replication.
//! Walks the source depth-first in read_dir order, recreating directories and
//! handing every non-directory entry to the file replicator.
//!
//! Notes:
//! - Entry types are taken from the directory entry itself (links are not
//!   followed for the dir/file decision; a link is then opened like a file).
//! - Directory modes are applied after their contents are written so that
//!   read-only source directories can still be duplicated.
//! - The first error aborts the walk; nothing already copied is removed.

use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use super::helpers::io_error_with_help;
use super::io_copy::replicate_file;
use crate::errors::Result;

/// Counters collected while replicating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplicaStats {
    pub files: u64,
    pub dirs: u64,
    pub bytes: u64,
}

/// Duplicate the directory `src` (contents and modes) at `dst`.
pub fn replicate_tree(src: &Path, dst: &Path) -> Result<ReplicaStats> {
    let mut stats = ReplicaStats::default();
    replicate_dir(src, dst, &mut stats)?;
    debug!(
        src = %src.display(),
        dst = %dst.display(),
        files = stats.files,
        dirs = stats.dirs,
        bytes = stats.bytes,
        "replicated directory tree"
    );
    Ok(stats)
}

fn replicate_dir(src: &Path, dst: &Path, stats: &mut ReplicaStats) -> Result<()> {
    let meta = fs::metadata(src).map_err(io_error_with_help("stat source directory", src))?;
    fs::create_dir_all(dst).map_err(io_error_with_help("create directory", dst))?;
    stats.dirs += 1;

    let entries = fs::read_dir(src).map_err(io_error_with_help("read directory", src))?;
    for entry in entries {
        let entry = entry.map_err(io_error_with_help("read directory entry", src))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let ftype = entry
            .file_type()
            .map_err(io_error_with_help("stat directory entry", &src_path))?;

        if ftype.is_dir() {
            replicate_dir(&src_path, &dst_path, stats)?;
        } else {
            stats.bytes += replicate_file(&src_path, &dst_path)?;
            stats.files += 1;
        }
    }

    fs::set_permissions(dst, meta.permissions())
        .map_err(io_error_with_help("set directory permissions", dst))?;
    trace!(dst = %dst.display(), "replicated directory");
    Ok(())
}
