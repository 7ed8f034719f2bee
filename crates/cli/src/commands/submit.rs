// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hmc_core::{workflow, Category, ComplaintStore};

use crate::error::Result;

/// Submit a new complaint and report its id.
pub fn run(store: &mut ComplaintStore, category: &str, description: &str) -> Result<()> {
    let category: Category = category.parse()?;
    let next = workflow::submit(store.all(), category, description)?;

    if let Some(complaint) = next.first() {
        tracing::info!(id = %complaint.id, category = %complaint.category, "submitted");
        println!("Submitted {} [{}]", complaint.id, complaint.category);
    }
    store.replace_all(next);
    Ok(())
}
