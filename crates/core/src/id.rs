// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Prefix shared by every complaint id.
pub const ID_PREFIX: &str = "cmp";

/// Generate a complaint ID from description and submission timestamp.
/// Format: cmp-{hash} where hash is first 8 hex chars of SHA256(description + timestamp)
pub fn generate_id(description: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", description, created_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    let short_hash = hex::encode(&hash[..4]); // First 8 hex chars (4 bytes)
    format!("{}-{}", ID_PREFIX, short_hash)
}

/// Generate a unique ID, handling collisions by appending incrementing suffix.
/// Identical submissions in the same instant still get distinct ids.
pub fn generate_unique_id<F>(description: &str, created_at: &DateTime<Utc>, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base_id = generate_id(description, created_at);

    if !exists(&base_id) {
        return base_id;
    }

    // Handle collision with incrementing suffix
    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
