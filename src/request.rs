//! Fully resolved input for one relocation.
//!
//! The core never looks at config files or the home directory; the binary
//! builds a `TransferRequest` from CLI + config and hands it to `relocate`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::{FastlinkError, Result};
use crate::fs_ops::guard::{absolutize, ensure_not_recursive};
use crate::fs_ops::io_error_with_help;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Absolute path of the file or directory to relocate.
    pub source: PathBuf,
    /// Absolute directory the source is copied into.
    pub destination_root: PathBuf,
    /// Leave the original in place instead of replacing it with a symlink.
    pub keep_original: bool,
    /// Delete the source right after it has been copied.
    pub move_fast: bool,
}

impl TransferRequest {
    /// Absolutize both paths and validate the result.
    pub fn resolve(
        source: &Path,
        destination_root: &Path,
        keep_original: bool,
        move_fast: bool,
    ) -> Result<Self> {
        let req = Self {
            source: absolutize(source)?,
            destination_root: absolutize(destination_root)?,
            keep_original,
            move_fast,
        };
        req.validate()?;
        Ok(req)
    }

    /// Reject recursive moves, then require the source to exist.
    pub fn validate(&self) -> Result<()> {
        ensure_not_recursive(&self.source, &self.destination_root)?;
        fs::metadata(&self.source).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                FastlinkError::SourceNotFound(self.source.clone())
            } else {
                io_error_with_help("stat source", &self.source)(e)
            }
        })?;
        Ok(())
    }

    /// `destination_root/<source file name>`.
    pub fn final_path(&self) -> Result<PathBuf> {
        let name = self
            .source
            .file_name()
            .ok_or_else(|| FastlinkError::PathResolution {
                path: self.source.clone(),
                reason: "source has no file name".into(),
            })?;
        Ok(self.destination_root.join(name))
    }
}
