//! Core configuration types.
//! - Config holds the merged settings (file + CLI) with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::{FastlinkError, Result};
use crate::request::TransferRequest;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default)
    #[default]
    Normal,
    /// Progress of each step
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration: config file values with CLI overrides applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Directory items are relocated into
    pub destination: Option<PathBuf>,
    /// Keep the original instead of replacing it with a symlink
    pub keep: bool,
    /// Delete the source right after copying it
    pub move_fast: bool,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, report the plan but do not modify the filesystem
    pub dry_run: bool,
}

impl Config {
    /// Build the request for `source`; fails when no destination is known.
    pub fn transfer_request(&self, source: &Path) -> Result<TransferRequest> {
        let destination = self
            .destination
            .as_deref()
            .ok_or(FastlinkError::MissingDestination)?;
        TransferRequest::resolve(source, destination, self.keep, self.move_fast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parsing() {
        assert_eq!(LogLevel::parse("QUIET"), Some(LogLevel::Quiet));
        assert_eq!(LogLevel::parse(" info "), Some(LogLevel::Info));
        assert_eq!("trace".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::default().to_string(), "normal");
    }

    #[test]
    fn missing_destination() {
        let cfg = Config::default();
        let err = cfg.transfer_request(Path::new("/tmp/whatever")).unwrap_err();
        assert!(matches!(err, FastlinkError::MissingDestination));
    }
}
