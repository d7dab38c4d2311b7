//! Styled display helpers for build-log output.
//!
//! All user-facing output goes through these helpers so the status line,
//! success, and error texture stays uniform across invocation modes.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Log the resolved compact version string.
pub fn display_resolved_version(compact: &str) {
    display_status(&format!("Firmware version: {}", style(compact).bold()));
}
