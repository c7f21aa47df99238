//! User-facing terminal output.
//! Colored prefixes are used only when stdout is a TTY; result lines carry
//! no prefix so scripts can parse them.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::fs_ops::{TransferPlan, TransferResult};

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: impl Display) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {msg}");
    }
}

pub fn print_warn(msg: impl Display) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {msg}");
    }
}

pub fn print_error(msg: impl Display) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {msg}");
    }
}

/// Print a plain line (no prefix).
pub fn print_user(msg: impl Display) {
    println!("{msg}");
}

/// The one-line summary of a finished relocation.
pub fn result_line(source: &std::path::Path, result: &TransferResult) -> String {
    if result.linked {
        format!(
            "Moved {} to {} and created symlink",
            source.display(),
            result.final_path.display()
        )
    } else {
        format!(
            "Copied {} to {} (keeping original)",
            source.display(),
            result.final_path.display()
        )
    }
}

/// Describe a dry-run plan, one step per line.
pub fn print_plan(source: &std::path::Path, plan: &TransferPlan) {
    print_info(format!(
        "Dry-run: would relocate '{}' -> '{}'",
        source.display(),
        plan.final_path.display()
    ));
    for (i, step) in plan.steps.iter().enumerate() {
        print_user(format!("  {}. {step}", i + 1));
    }
}
