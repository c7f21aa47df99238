//! Streaming single-file copy.
//!
//! - The destination is created with create-new semantics; it never clobbers.
//! - Content goes through fixed 64 KiB buffers so memory use is bounded.
//! - The source permission mode is applied to the destination, then the
//!   destination is fsynced before returning.
//!
//! A failure part-way leaves a truncated destination behind; callers do not
//! roll back.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::trace;

use super::helpers::io_error_with_help;
use crate::errors::Result;

pub const BUF_SIZE: usize = 64 * 1024;

/// Copy `src` -> `dst` (bytes + permission bits), fsync, and return the byte count.
pub fn replicate_file(src: &Path, dst: &Path) -> Result<u64> {
    let src_f = File::open(src).map_err(io_error_with_help("open source file", src))?;
    let src_meta = src_f
        .metadata()
        .map_err(io_error_with_help("stat source file", src))?;

    let dst_f = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dst)
        .map_err(io_error_with_help("create destination file", dst))?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)
        .map_err(io_error_with_help("copy file contents", dst))?;
    writer
        .flush()
        .map_err(io_error_with_help("flush destination file", dst))?;
    let dst_f = writer
        .into_inner()
        .map_err(|e| io_error_with_help("flush destination file", dst)(e.into_error()))?;

    dst_f
        .set_permissions(src_meta.permissions())
        .map_err(io_error_with_help("set destination permissions", dst))?;
    dst_f
        .sync_all()
        .map_err(io_error_with_help("sync destination file", dst))?;

    trace!(src = %src.display(), dst = %dst.display(), bytes, "replicated file");
    Ok(bytes)
}
