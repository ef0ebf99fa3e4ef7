//! User interface module - progress reporting for a release run.
//!
//! - `formatter` - Line formatting and the primitive display functions
//! - This module - Composite reports built from the primitives

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_status, display_success,
    display_version_change,
};

use crate::patcher::{PatchOutcome, PatchReport};

/// Report the outcome of patching one file.
///
/// Skipped files are reported as warnings, updated files as successes.
pub fn display_patch_report(report: &PatchReport, new_version: &str) {
    if let Some(warning) = report.warning() {
        display_boundary_warning(&warning);
        return;
    }
    match report.outcome {
        PatchOutcome::Updated => display_success(&format!(
            "Updated {} to version {}",
            report.path.display(),
            new_version
        )),
        _ => display_status(&format!(
            "No version placeholder in {}, left unchanged",
            report.path.display()
        )),
    }
}

/// Describe a release without performing it.
///
/// # Arguments
/// * `reports` - Files that would be rewritten (outcome as seen on disk now)
/// * `commit_message` - Message of the release commit
/// * `tag` - Tag name
/// * `remote` / `branch` - Push destination
pub fn display_dry_run_plan(
    reports: &[PatchReport],
    commit_message: &str,
    tag: &str,
    remote: &str,
    branch: &str,
) {
    display_status("Dry run, nothing will be changed:");
    for report in reports {
        let action = match report.outcome {
            PatchOutcome::Updated => "rewrite",
            PatchOutcome::Unchanged => "unchanged (no version found)",
            PatchOutcome::Skipped => "skip (not found)",
        };
        println!("  {}: {}", action, report.path.display());
    }
    println!("  commit: {}", commit_message);
    println!("  tag:    {}", tag);
    println!("  push:   {} {} and {} {}", remote, branch, remote, tag);
}

/// Announce a published release.
pub fn display_release_complete(version: &str, tag: &str) {
    println!("\n{}\n", formatter::format_release_complete(version, tag));
    display_status("CI will now build and publish the release.");
}
