//! Config file location and symlink checks.
//! The default location is fixed per user: `<home>/.config/fastlink/config.yaml`.

use dirs::home_dir;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_ENV;
use crate::errors::{FastlinkError, Result};

/// Where the config file was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// `--config <PATH>`
    Flag(PathBuf),
    /// `$FASTLINK_CONFIG`
    Env(PathBuf),
    /// Per-user default; a missing file here just means "no config".
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Flag(p) | ConfigLocation::Env(p) | ConfigLocation::Default(p) => p,
        }
    }

    /// Only the default location may be absent without an error.
    pub fn is_optional(&self) -> bool {
        matches!(self, ConfigLocation::Default(_))
    }
}

/// `<home>/.config/fastlink/config.yaml`.
pub fn default_config_path() -> Result<PathBuf> {
    let home = home_dir().ok_or_else(|| FastlinkError::PathResolution {
        path: PathBuf::from("~"),
        reason: "unable to determine the user home directory".into(),
    })?;
    Ok(home.join(".config").join("fastlink").join("config.yaml"))
}

/// Precedence: `--config` flag, then `$FASTLINK_CONFIG`, then the default.
pub fn config_location(flag: Option<&Path>) -> Result<ConfigLocation> {
    if let Some(p) = flag {
        return Ok(ConfigLocation::Flag(p.to_path_buf()));
    }
    if let Some(p) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Ok(ConfigLocation::Env(PathBuf::from(p)));
    }
    default_config_path().map(ConfigLocation::Default)
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
