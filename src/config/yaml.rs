//! YAML configuration support.
//!
//! ```yaml
//! destination: /mnt/archive
//! keep: false
//! move: true
//! log_level: info
//! log_file: /var/log/fastlink.log
//! ```
//!
//! Notes:
//! - Every field is optional; unknown fields are ignored.
//! - An empty file (or a bare `~`) means all defaults.
//! - The file is never written.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{ConfigLocation, config_location};
use super::types::{Config, LogLevel};
use crate::errors::{FastlinkError, Result};

/// Struct mirroring the YAML document for deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct YamlConfig {
    destination: Option<String>,
    keep: bool,
    #[serde(rename = "move")]
    move_fast: bool,
    log_level: Option<String>,
    log_file: Option<String>,
}

fn non_empty_path(s: Option<String>) -> Option<PathBuf> {
    s.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    })
}

// Map YamlConfig -> Config
fn yaml_to_config(path: &Path, parsed: YamlConfig) -> Result<Config> {
    let log_level = match parsed.log_level.as_deref() {
        Some(s) => s.parse::<LogLevel>().map_err(|message| FastlinkError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?,
        None => LogLevel::default(),
    };

    Ok(Config {
        destination: non_empty_path(parsed.destination),
        keep: parsed.keep,
        move_fast: parsed.move_fast,
        log_level,
        log_file: non_empty_path(parsed.log_file),
        dry_run: false,
    })
}

/// Parse YAML text that was read from `path`.
pub fn parse_config_str(path: &Path, contents: &str) -> Result<Config> {
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let parsed: Option<YamlConfig> =
        serde_yaml::from_str(contents).map_err(|e| FastlinkError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    yaml_to_config(path, parsed.unwrap_or_default())
}

/// Load a Config from a specific YAML file; a missing file is an error here.
pub fn load_config_from_yaml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|source| FastlinkError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(path, &contents)
}

/// Resolve the config location and load it.
/// A missing file at the default location yields `Config::default()`.
pub fn load_config(flag: Option<&Path>) -> Result<(ConfigLocation, Config)> {
    let location = config_location(flag)?;
    let path = location.path();

    match fs::read_to_string(path) {
        Ok(contents) => {
            debug!(path = %path.display(), "loaded config file");
            let cfg = parse_config_str(path, &contents)?;
            Ok((location, cfg))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound && location.is_optional() => {
            debug!(path = %path.display(), "no config file; using defaults");
            Ok((location, Config::default()))
        }
        Err(source) => Err(FastlinkError::ConfigRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}
