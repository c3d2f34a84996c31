//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::path::Path;

use colored::Colorize;

use crate::application::services::MaterializeReport;
use crate::domain::{BaselineWarning, Structure};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print every baseline warning, one per line.
pub fn baseline_warnings(warnings: &[BaselineWarning]) {
    for w in warnings {
        warning(w);
    }
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Summary of a `create` run: target, then folder and file counts.
pub fn materialize_report(target: &Path, report: &MaterializeReport) {
    action("Target", &target.display());
    detail(&format!(
        "folders: {} created, {} existing",
        report.dirs_created, report.dirs_existing
    ));
    if report.files_skipped > 0 {
        detail(&format!("files: {} skipped (folders only)", report.files_skipped));
    } else {
        detail(&format!(
            "files: {} created, {} existing",
            report.files_created, report.files_existing
        ));
    }
    if report.entries_rejected > 0 {
        warning(&format!(
            "{} entries skipped: names must stay inside the target",
            report.entries_rejected
        ));
    }
}

/// Print a structure as a tree listing, or one relative path per line.
pub fn structure(structure: &Structure, flat: bool) {
    if flat {
        for path in structure.paths() {
            info(&path);
        }
    } else {
        print!("{structure}");
    }
}
