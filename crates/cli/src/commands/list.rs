// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hmc_core::ComplaintStore;

use crate::display;
use crate::error::Result;
use crate::session::{Role, Session};

/// List complaints for the current role.
///
/// Staff only see complaints a warden has handed out, like the staff
/// dashboard. Positions are store-wide so references stay stable across
/// roles.
pub fn run(store: &ComplaintStore, session: &Session) -> Result<()> {
    let mut shown = 0;
    for (index, complaint) in store.all().iter().enumerate() {
        if session.role == Role::Staff && complaint.assigned_to.is_none() {
            continue;
        }
        println!("{}", display::format_complaint(index + 1, complaint));
        shown += 1;
    }

    if shown == 0 {
        println!("{}", display::empty_message(session.role));
    }
    Ok(())
}
