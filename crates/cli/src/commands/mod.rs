// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command implementations.
//!
//! Each module is one operation: it reads the store's current snapshot,
//! derives the next collection through a workflow rule, and swaps it in
//! with `replace_all`. Nothing here touches complaint records directly.

use hmc_core::ComplaintStore;

use crate::error::{Error, Result};

pub mod assign;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod submit;

/// Resolve a complaint reference to an id.
///
/// Accepts a 1-based list position, a full id, or a unique id prefix.
pub(crate) fn resolve_id(store: &ComplaintStore, reference: &str) -> Result<String> {
    if let Ok(position) = reference.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| store.all().get(index))
            .map(|c| c.id.clone())
            .ok_or_else(|| Error::Core(hmc_core::Error::NotFound(reference.to_string())));
    }

    if let Some(complaint) = store.get(reference) {
        return Ok(complaint.id.clone());
    }

    let mut matches = store.all().iter().filter(|c| c.id.starts_with(reference));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Ok(only.id.clone()),
        (Some(_), Some(_)) => Err(Error::AmbiguousReference(reference.to_string())),
        (None, _) => Err(Error::Core(hmc_core::Error::NotFound(
            reference.to_string(),
        ))),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
