// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hmc-core operations.

use thiserror::Error;

/// All possible errors that can occur in hmc-core operations.
///
/// Every variant is recoverable and local to a single workflow invocation:
/// the rule either fully succeeds and produces a new collection, or fails
/// and leaves the caller's store untouched. Variants fall into two classes:
/// validation failures (empty or unparseable input, to be corrected and
/// retried) and not-found failures (missing id or wrong workflow state).
#[derive(Debug, Error)]
pub enum Error {
    #[error("complaint not found: {0}")]
    NotFound(String),

    #[error("cannot assign {id}: status is {status}\n  hint: only pending complaints can be assigned")]
    NotPending { id: String, status: String },

    #[error("cannot complete {id}: status is {status}\n  hint: a complaint must be assigned before it can be completed")]
    NotAssigned { id: String, status: String },

    #[error("cannot edit {0}: complaint is completed")]
    AlreadyCompleted(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("invalid category: '{0}'\n  hint: valid categories are: water, electricity, furniture, cleanliness, other")]
    InvalidCategory(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: pending, assigned, completed")]
    InvalidStatus(String),
}

/// A specialized Result type for hmc-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
