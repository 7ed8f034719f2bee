// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hmc_core::{workflow, ComplaintStore};

use crate::error::Result;

/// Mark an assigned complaint as completed.
pub fn run(store: &mut ComplaintStore, reference: &str) -> Result<()> {
    let id = super::resolve_id(store, reference)?;
    let next = workflow::complete(store.all(), &id)?;
    store.replace_all(next);
    tracing::info!(%id, "completed");
    println!("Completed {}", id);
    Ok(())
}
