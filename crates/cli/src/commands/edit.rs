// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hmc_core::{workflow, Category, ComplaintStore, EditPatch};

use crate::error::Result;

/// Rewrite the category and description of an existing complaint,
/// like the edit modal of the app: both fields are saved together.
pub fn run(
    store: &mut ComplaintStore,
    reference: &str,
    category: &str,
    description: &str,
) -> Result<()> {
    let id = super::resolve_id(store, reference)?;
    let category: Category = category.parse()?;
    let patch = EditPatch {
        category: Some(category),
        description: Some(description.to_string()),
    };

    let next = workflow::edit(store.all(), &id, patch)?;
    store.replace_all(next);
    println!("Updated {}", id);
    Ok(())
}
