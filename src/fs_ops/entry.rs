//! Relocation state machine.
//!
//! Validate -> PrepareDestination -> Replicate -> [RemoveSource]
//!   -> [RemoveOriginal -> Link | KeepBoth]
//!
//! Every step runs once, in order. The first failure stops the run and is
//! returned as a `StepFailure` naming the failed step and the completed ones;
//! nothing is rolled back.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use super::helpers::io_error_with_help;
use super::link::{create_link, remove_original};
use super::transfer::{ensure_destination_absent, remove_source, replicate_fresh};
use super::tree::ReplicaStats;
use crate::errors::{FastlinkError, Result};
use crate::platform::create_dir_all_0755;
use crate::request::TransferRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Validate,
    PrepareDestination,
    Replicate,
    RemoveSource,
    RemoveOriginal,
    Link,
    KeepBoth,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::Validate => "validate",
            Step::PrepareDestination => "prepare destination",
            Step::Replicate => "replicate",
            Step::RemoveSource => "remove source",
            Step::RemoveOriginal => "remove original",
            Step::Link => "link",
            Step::KeepBoth => "keep both",
        };
        f.write_str(s)
    }
}

/// A step failed; `completed` lists what had already happened on disk.
#[derive(Debug, Error)]
#[error("{step} failed: {error}")]
pub struct StepFailure {
    pub step: Step,
    pub completed: Vec<Step>,
    #[source]
    pub error: FastlinkError,
}

/// Outcome of a successful relocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferResult {
    /// Absolute path of the replicated artifact.
    pub final_path: PathBuf,
    /// Whether the original path now is a symlink to `final_path`.
    pub linked: bool,
    pub steps: Vec<Step>,
    pub stats: ReplicaStats,
}

/// What `relocate` would do for a request, computed without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    pub final_path: PathBuf,
    pub steps: Vec<Step>,
}

#[derive(Default)]
struct StepLog {
    completed: Vec<Step>,
}

impl StepLog {
    fn run<T>(
        &mut self,
        step: Step,
        f: impl FnOnce() -> Result<T>,
    ) -> std::result::Result<T, StepFailure> {
        debug!(%step, "step start");
        match f() {
            Ok(v) => {
                self.completed.push(step);
                Ok(v)
            }
            Err(error) => {
                debug!(%step, kind = error.kind(), completed = ?self.completed, "step failed");
                Err(StepFailure {
                    step,
                    completed: self.completed.clone(),
                    error,
                })
            }
        }
    }
}

fn planned_steps(request: &TransferRequest) -> Vec<Step> {
    let mut steps = vec![Step::Validate, Step::PrepareDestination, Step::Replicate];
    if request.move_fast {
        steps.push(Step::RemoveSource);
    }
    if request.keep_original {
        steps.push(Step::KeepBoth);
    } else {
        steps.push(Step::RemoveOriginal);
        steps.push(Step::Link);
    }
    steps
}

/// Validate the request and report the final path and steps; touches nothing.
pub fn plan(request: &TransferRequest) -> Result<TransferPlan> {
    request.validate()?;
    let final_path = request.final_path()?;
    ensure_destination_absent(&final_path)?;
    Ok(TransferPlan {
        final_path,
        steps: planned_steps(request),
    })
}

/// Run the full relocation for `request`.
pub fn relocate(request: &TransferRequest) -> std::result::Result<TransferResult, StepFailure> {
    let mut log = StepLog::default();
    let src = &request.source;
    let root = &request.destination_root;

    let final_path = log.run(Step::Validate, || {
        request.validate()?;
        request.final_path()
    })?;

    log.run(Step::PrepareDestination, || {
        create_dir_all_0755(root).map_err(io_error_with_help("create destination directory", root))
    })?;

    let stats = log.run(Step::Replicate, || replicate_fresh(src, &final_path))?;

    if request.move_fast {
        log.run(Step::RemoveSource, || remove_source(src))?;
    }

    let linked = if request.keep_original {
        log.run(Step::KeepBoth, || Ok(()))?;
        false
    } else {
        log.run(Step::RemoveOriginal, || remove_original(src))?;
        log.run(Step::Link, || create_link(src, &final_path))?;
        true
    };

    info!(
        src = %src.display(),
        dest = %final_path.display(),
        linked,
        files = stats.files,
        bytes = stats.bytes,
        "relocation complete"
    );

    Ok(TransferResult {
        final_path,
        linked,
        steps: log.completed,
        stats,
    })
}
