//! Typed error definitions for fastlink.
//! Every failure mode of a relocation maps to one variant so callers (and tests)
//! can match on the kind instead of parsing messages.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastlinkError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Cannot resolve path {path}: {reason}")]
    PathResolution { path: PathBuf, reason: String },

    #[error("Recursive move is not allowed: destination {destination} is inside source {source_path}")]
    RecursiveMove {
        source_path: PathBuf,
        destination: PathBuf,
    },

    #[error("Source does not exist: {0}")]
    SourceNotFound(PathBuf),

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Destination not provided and not found in config")]
    MissingDestination,

    #[error("{op} '{path}': {source}{hint}")]
    Io {
        op: &'static str,
        path: PathBuf,
        hint: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create symlink {link} -> {target}: {source}")]
    SymlinkCreation {
        link: PathBuf,
        target: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FastlinkError {
    /// Stable short name used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            FastlinkError::ConfigRead { .. } => "config_read",
            FastlinkError::ConfigParse { .. } => "config_parse",
            FastlinkError::PathResolution { .. } => "path_resolution",
            FastlinkError::RecursiveMove { .. } => "recursive_move",
            FastlinkError::SourceNotFound(_) => "source_not_found",
            FastlinkError::DestinationExists(_) => "destination_exists",
            FastlinkError::MissingDestination => "missing_destination",
            FastlinkError::Io { .. } => "io",
            FastlinkError::SymlinkCreation { .. } => "symlink_creation",
        }
    }
}

pub type Result<T> = std::result::Result<T, FastlinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_display_includes_op_path_and_hint() {
        let err = FastlinkError::Io {
            op: "open source file",
            path: PathBuf::from("/tmp/x"),
            hint: " (path not found)".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("open source file '/tmp/x': gone"));
        assert!(msg.ends_with("(path not found)"));
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn recursive_move_names_both_paths() {
        let err = FastlinkError::RecursiveMove {
            source_path: PathBuf::from("/home/u/data"),
            destination: PathBuf::from("/home/u/data/sub"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/home/u/data/sub"));
        assert!(msg.contains("Recursive move"));
    }
}
