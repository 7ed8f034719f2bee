// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::{Error, Result};

/// Validate and trim a description (must be non-empty after trimming).
pub fn validate_and_trim_description(description: &str) -> Result<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty {
            field: "Description",
        });
    }
    Ok(trimmed.to_string())
}

/// Validate and trim a staff name (must be non-empty after trimming).
pub fn validate_and_trim_staff_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty {
            field: "Staff name",
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
