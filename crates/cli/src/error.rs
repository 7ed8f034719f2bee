// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the hmc shell.

use thiserror::Error;

/// All possible errors surfaced by the shell.
///
/// Core workflow errors pass through transparently; the rest are
/// shell-level failures (bad command lines, role gating, IO). None of
/// them terminate the read-eval loop.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] hmc_core::Error),

    #[error("invalid role: '{0}'\n  hint: valid roles are: student, warden, staff")]
    InvalidRole(String),

    #[error("unknown command: '{0}'\n  hint: type 'help' to see available commands")]
    UnknownCommand(String),

    #[error("{role}s cannot {command}\n  hint: log out and log back in with the right role")]
    NotPermitted { role: String, command: String },

    #[error("ambiguous reference: '{0}' matches more than one complaint")]
    AmbiguousReference(String),

    #[error("{0}")]
    Usage(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for shell operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
