// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hmc_core::{workflow, ComplaintStore};

use crate::error::Result;

/// Hand a pending complaint to a staff member.
pub fn run(store: &mut ComplaintStore, reference: &str, staff_name: &str) -> Result<()> {
    let id = super::resolve_id(store, reference)?;
    let next = workflow::assign(store.all(), &id, staff_name)?;

    if let Some(staff) = next
        .iter()
        .find(|c| c.id == id)
        .and_then(|c| c.assigned_to.as_deref())
    {
        tracing::info!(%id, staff, "assigned");
        println!("Assigned {} to {}", id, staff);
    }
    store.replace_all(next);
    Ok(())
}
