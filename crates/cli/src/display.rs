// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of complaints for the shell.

use hmc_core::Complaint;

use crate::colors;
use crate::session::Role;

/// Format a complaint as a numbered card.
///
/// Output format:
/// ```text
/// #1 cmp-ab12cd34 [water] pending  2026-08-25 10:30
///     Leaking tap in room 12
///     assigned to: Mr. Silva
/// ```
///
/// The assigned-to line only appears once a staff member is on it.
pub fn format_complaint(position: usize, complaint: &Complaint) -> String {
    let mut lines = vec![format!(
        "#{} {} [{}] {}  {}",
        position,
        complaint.id,
        complaint.category,
        colors::status(complaint.status),
        complaint.created_at.format("%Y-%m-%d %H:%M"),
    )];
    lines.push(format!("    {}", complaint.description));
    if let Some(ref staff) = complaint.assigned_to {
        lines.push(format!("    assigned to: {}", staff));
    }
    lines.join("\n")
}

/// Empty-state message per role, matching the app's dashboards.
pub fn empty_message(role: Role) -> &'static str {
    match role {
        Role::Student => "No complaints submitted yet.",
        Role::Warden => "No complaints received yet.",
        Role::Staff => "No tasks assigned yet.",
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
