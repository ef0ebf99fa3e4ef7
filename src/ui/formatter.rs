//! Pure formatting functions for console output.
//!
//! Each `format_*` function builds a line without printing so it can be
//! tested; the matching `display_*` function prints it.

use console::style;

use crate::boundary::BoundaryWarning;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn format_warning(message: &str) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), message)
}

pub fn format_release_complete(version: &str, tag: &str) -> String {
    format_success(&format!(
        "Successfully bumped version to {} and pushed tag {}!",
        version, tag
    ))
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_warning(&warning.to_string()));
}

/// Display the version change about to be released.
pub fn display_version_change(current: &str, new: &str, bump: &str) {
    println!("\n{}", style("Version:").bold());
    println!("  Current: {}", style(current).red());
    println!("  New:     {} ({} bump)", style(new).green(), bump);
}
