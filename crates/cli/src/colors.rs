// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for shell output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use hmc_core::Status;

/// ANSI 256-color codes used by the shell
pub mod codes {
    /// Banner and section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Pending status: amber
    pub const PENDING: u8 = 178;
    /// Assigned status: steel blue
    pub const ASSIGNED: u8 = 74;
    /// Completed status: green
    pub const COMPLETED: u8 = 71;

    /// Pre-formatted ANSI escape sequences for use in tests
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const PENDING_START: &str = "\x1b[38;5;178m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    // NO_COLOR=1 disables colors
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }

    // COLOR=1 forces colors even without TTY
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }

    // Default: enable colors only if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Apply header color (banner, section titles) to text.
pub fn header(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    format!("{}{}{}", fg256(codes::HEADER), text, RESET)
}

/// Colorize a status label for display.
pub fn status(status: Status) -> String {
    if !should_colorize() {
        return status.to_string();
    }
    let code = match status {
        Status::Pending => codes::PENDING,
        Status::Assigned => codes::ASSIGNED,
        Status::Completed => codes::COMPLETED,
    };
    format!("{}{}{}", fg256(code), status, RESET)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
