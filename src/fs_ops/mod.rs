//! Filesystem operations: path guard, replicators, transfer engine, link
//! installer and the relocation state machine that ties them together.

mod entry;
pub mod guard;
mod helpers;
mod io_copy;
mod link;
mod transfer;
mod tree;
mod util;

pub use entry::{Step, StepFailure, TransferPlan, TransferResult, plan, relocate};
pub use guard::{absolutize, ensure_not_recursive, is_sub_path, normalize_lexical};
pub use helpers::io_error_with_help;
pub use io_copy::replicate_file;
pub use link::{create_link, install_link, remove_original};
pub use transfer::{
    TransferReport, ensure_destination_absent, remove_source, replicate_entry, replicate_fresh,
    transfer,
};
pub use tree::{ReplicaStats, replicate_tree};
