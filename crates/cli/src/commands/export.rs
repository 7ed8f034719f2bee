// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hmc_core::ComplaintStore;

use crate::error::Result;

/// Print the current collection as pretty JSON, newest first.
pub fn run(store: &ComplaintStore) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(store.all())?);
    Ok(())
}
