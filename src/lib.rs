//! Core library for `fastlink`.
//!
//! Relocates a file or directory into a destination directory and, unless
//! asked to keep it, replaces the original with a symlink to the copy.
//!
//! The entry point is [`fs_ops::relocate`], which takes a fully resolved
//! [`TransferRequest`]. Config files and CLI parsing only exist to build that
//! request.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;
pub mod request;

pub use config::{Config, LogLevel, default_config_path, path_has_symlink_ancestor};
pub use errors::{FastlinkError, Result};
pub use fs_ops::{
    Step, StepFailure, TransferPlan, TransferResult, is_sub_path, plan, relocate, transfer,
};
pub use request::TransferRequest;

/// Convenient re-exports for downstream users.
pub mod prelude {
    pub use crate::config::{Config, LogLevel};
    pub use crate::errors::{FastlinkError as Error, Result as FLResult};
    pub use crate::fs_ops::{Step, StepFailure, TransferResult, plan, relocate, transfer};
    pub use crate::request::TransferRequest;
}
