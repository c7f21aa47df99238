//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - With a positional DESTINATION the config file only supplies logging
//!   settings, and an unreadable or malformed file is skipped.
//! - Without one, destination/keep/move come from the config file and
//!   --keep/--move only override it when given.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::types::{Config, LogLevel};
use crate::config::yaml::load_config;
use crate::errors::{FastlinkError, Result};

/// CLI wrapper for the fastlink library.
/// CLI flags override config values (which are loaded from YAML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Quickly move files/directories to a certain location and create soft links at the original location"
)]
pub struct Args {
    /// File or directory to relocate.
    #[arg(
        value_name = "SOURCE",
        value_hint = ValueHint::AnyPath,
        required_unless_present = "print_config"
    )]
    pub source: Option<PathBuf>,

    /// Directory to relocate into (defaults to `destination` from the config file).
    #[arg(value_name = "DESTINATION", value_hint = ValueHint::DirPath)]
    pub destination: Option<PathBuf>,

    /// Quick move mode: delete the source right after copying it.
    #[arg(short = 'm', long = "move")]
    pub move_fast: bool,

    /// Keep original file mode: do not replace the source with a symlink.
    #[arg(short = 'k', long)]
    pub keep: bool,

    /// Read configuration from this YAML file instead of the default location.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Print where fastlink will look for the config file, then exit.
    #[arg(long, help = "Print the config file location used by fastlink and exit")]
    pub print_config: bool,

    /// Dry-run: validate and print the plan but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be done, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

/// Merged settings for this invocation, plus the config error that was
/// skipped because DESTINATION was given on the command line.
pub struct Settings {
    pub config: Config,
    pub skipped: Option<FastlinkError>,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(dest) = &self.destination {
            cfg.destination = Some(dest.clone());
        }
        if self.keep {
            cfg.keep = true;
        }
        if self.move_fast {
            cfg.move_fast = true;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }

    /// Load the config file and apply CLI flags over it.
    pub fn load_settings(&self) -> Result<Settings> {
        let (mut config, skipped) = if self.destination.is_some() {
            match load_config(self.config.as_deref()) {
                Ok((_, file)) => (
                    Config {
                        log_level: file.log_level,
                        log_file: file.log_file,
                        ..Config::default()
                    },
                    None,
                ),
                Err(e) => (Config::default(), Some(e)),
            }
        } else {
            (load_config(self.config.as_deref())?.1, None)
        };
        self.apply_overrides(&mut config);
        Ok(Settings { config, skipped })
    }
}

/// Parse argv. Usage errors map to exit status 1; --help/--version to 0.
pub fn parse() -> std::result::Result<Args, ExitCode> {
    Args::try_parse().map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn short_and_long_flags() {
        let a = Args::try_parse_from(["fastlink", "-m", "-k", "src", "dst"]).unwrap();
        assert!(a.move_fast && a.keep);
        assert_eq!(a.source.as_deref(), Some(Path::new("src")));
        assert_eq!(a.destination.as_deref(), Some(Path::new("dst")));

        let a = Args::try_parse_from(["fastlink", "--move", "--keep", "src"]).unwrap();
        assert!(a.move_fast && a.keep);
        assert_eq!(a.destination, None);
    }

    #[test]
    fn source_is_required_and_extra_args_rejected() {
        assert!(Args::try_parse_from(["fastlink"]).is_err());
        assert!(Args::try_parse_from(["fastlink", "a", "b", "c"]).is_err());
        assert!(Args::try_parse_from(["fastlink", "--log-level", "loud", "a"]).is_err());
        assert!(Args::try_parse_from(["fastlink", "--print-config"]).is_ok());
    }

    #[test]
    fn overrides_only_when_set() {
        let mut cfg = Config {
            destination: Some(PathBuf::from("/from/config")),
            keep: true,
            move_fast: true,
            ..Config::default()
        };
        let a = Args::try_parse_from(["fastlink", "src"]).unwrap();
        a.apply_overrides(&mut cfg);
        assert_eq!(cfg.destination.as_deref(), Some(Path::new("/from/config")));
        assert!(cfg.keep && cfg.move_fast);

        let a = Args::try_parse_from(["fastlink", "-d", "src", "/from/cli"]).unwrap();
        let mut cfg = Config::default();
        a.apply_overrides(&mut cfg);
        assert_eq!(cfg.destination.as_deref(), Some(Path::new("/from/cli")));
        assert!(!cfg.keep && !cfg.move_fast);
        assert_eq!(cfg.log_level, LogLevel::Debug);
    }

    #[test]
    fn positional_destination_ignores_config_transfer_fields() {
        let td = tempdir().unwrap();
        let cfg_path = td.path().join("config.yaml");
        fs::write(
            &cfg_path,
            "destination: /from/config\nkeep: true\nmove: true\nlog_level: info\n",
        )
        .unwrap();
        let cfg_arg = cfg_path.to_str().unwrap();

        let a = Args::try_parse_from(["fastlink", "--config", cfg_arg, "src", "/from/cli"]).unwrap();
        let settings = a.load_settings().unwrap();
        assert!(settings.skipped.is_none());
        assert_eq!(settings.config.destination.as_deref(), Some(Path::new("/from/cli")));
        assert!(!settings.config.keep && !settings.config.move_fast);
        assert_eq!(settings.config.log_level, LogLevel::Info);

        let a = Args::try_parse_from(["fastlink", "--config", cfg_arg, "src"]).unwrap();
        let settings = a.load_settings().unwrap();
        assert_eq!(settings.config.destination.as_deref(), Some(Path::new("/from/config")));
        assert!(settings.config.keep && settings.config.move_fast);
    }

    #[test]
    fn bad_config_is_skipped_only_with_positional_destination() {
        let td = tempdir().unwrap();
        let cfg_path = td.path().join("config.yaml");
        fs::write(&cfg_path, "invalid: yaml: content: [").unwrap();
        let cfg_arg = cfg_path.to_str().unwrap();

        let a = Args::try_parse_from(["fastlink", "--config", cfg_arg, "-k", "src", "/out"]).unwrap();
        let settings = a.load_settings().unwrap();
        assert_eq!(settings.skipped.map(|e| e.kind()), Some("config_parse"));
        assert!(settings.config.keep);
        assert_eq!(settings.config.log_level, LogLevel::Normal);

        let a = Args::try_parse_from(["fastlink", "--config", cfg_arg, "src"]).unwrap();
        let err = a.load_settings().err().unwrap();
        assert_eq!(err.kind(), "config_parse");
    }
}
