// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow rules: pure transformations over the complaint collection.
//!
//! Each rule takes the current collection plus user-supplied fields and
//! returns a new collection or a typed error; none of them mutate in
//! place. On failure the input is untouched, so the caller's store stays
//! exactly as it was.
//!
//! Ordering policy: [`submit`] prepends (newest-first); every other rule
//! preserves existing order.

use chrono::Utc;

use crate::complaint::{Category, Complaint, Status};
use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::validate::{validate_and_trim_description, validate_and_trim_staff_name};

/// Fields an edit may change. Everything else stays untouched.
#[derive(Debug, Clone, Default)]
pub struct EditPatch {
    pub category: Option<Category>,
    pub description: Option<String>,
}

/// Submit a new complaint.
///
/// Returns the collection with a fresh pending complaint prepended.
/// Fails with `FieldEmpty` if the description trims to empty; in that
/// case no record is created.
pub fn submit(
    current: &[Complaint],
    category: Category,
    description: &str,
) -> Result<Vec<Complaint>> {
    let description = validate_and_trim_description(description)?;
    let created_at = Utc::now();
    let id = generate_unique_id(&description, &created_at, |candidate| {
        current.iter().any(|c| c.id == candidate)
    });

    let mut next = Vec::with_capacity(current.len() + 1);
    next.push(Complaint::new(id, category, description, created_at));
    next.extend_from_slice(current);
    Ok(next)
}

/// Edit the category and/or description of an existing complaint.
///
/// `id`, `status`, `assigned_to`, and `created_at` are never touched.
/// Completed complaints are locked against edits.
pub fn edit(current: &[Complaint], id: &str, patch: EditPatch) -> Result<Vec<Complaint>> {
    let target = find(current, id)?;
    if target.status.is_terminal() {
        return Err(Error::AlreadyCompleted(id.to_string()));
    }
    let description = match patch.description {
        Some(d) => Some(validate_and_trim_description(&d)?),
        None => None,
    };

    Ok(current
        .iter()
        .map(|c| {
            if c.id == id {
                let mut updated = c.clone();
                if let Some(category) = patch.category {
                    updated.category = category;
                }
                if let Some(ref d) = description {
                    updated.description = d.clone();
                }
                updated
            } else {
                c.clone()
            }
        })
        .collect())
}

/// Remove a complaint. Idempotent: an absent id is a no-op, not an error.
pub fn delete(current: &[Complaint], id: &str) -> Vec<Complaint> {
    current.iter().filter(|c| c.id != id).cloned().collect()
}

/// Assign a pending complaint to a staff member.
///
/// Sets `status` to assigned and `assigned_to` to the trimmed staff name.
/// Only valid from pending; reassignment is not modeled.
pub fn assign(current: &[Complaint], id: &str, staff_name: &str) -> Result<Vec<Complaint>> {
    let staff_name = validate_and_trim_staff_name(staff_name)?;
    let target = find(current, id)?;
    if target.status != Status::Pending {
        return Err(Error::NotPending {
            id: id.to_string(),
            status: target.status.to_string(),
        });
    }

    Ok(current
        .iter()
        .map(|c| {
            if c.id == id {
                let mut updated = c.clone();
                updated.status = Status::Assigned;
                updated.assigned_to = Some(staff_name.clone());
                updated
            } else {
                c.clone()
            }
        })
        .collect())
}

/// Mark an assigned complaint completed.
///
/// Only valid from assigned, keeping the status chain monotonic.
pub fn complete(current: &[Complaint], id: &str) -> Result<Vec<Complaint>> {
    let target = find(current, id)?;
    if target.status != Status::Assigned {
        return Err(Error::NotAssigned {
            id: id.to_string(),
            status: target.status.to_string(),
        });
    }

    Ok(current
        .iter()
        .map(|c| {
            if c.id == id {
                let mut updated = c.clone();
                updated.status = Status::Completed;
                updated
            } else {
                c.clone()
            }
        })
        .collect())
}

fn find<'a>(current: &'a [Complaint], id: &str) -> Result<&'a Complaint> {
    current
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| Error::NotFound(id.to_string()))
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
