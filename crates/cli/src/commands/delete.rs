// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hmc_core::{workflow, ComplaintStore};

use crate::error::Result;

/// Withdraw a complaint. The underlying rule is idempotent, but the
/// shell resolves the reference first, so a stale reference still gets
/// a not-found message instead of silently doing nothing.
pub fn run(store: &mut ComplaintStore, reference: &str) -> Result<()> {
    let id = super::resolve_id(store, reference)?;
    let next = workflow::delete(store.all(), &id);
    store.replace_all(next);
    println!("Deleted {}", id);
    Ok(())
}
