//! Config module.
//! Provides configuration types, the config file location and YAML loading.
//! None of this is visible to the transfer core, which only sees a resolved
//! `TransferRequest`.

pub mod paths;
pub mod types;
pub mod yaml;

pub use paths::{ConfigLocation, config_location, default_config_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use yaml::{load_config, load_config_from_yaml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FASTLINK_CONFIG";
