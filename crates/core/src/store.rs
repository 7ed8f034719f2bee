// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory complaint store.
//!
//! The store owns the authoritative collection for the lifetime of the
//! process. Every mutation path reads the current snapshot, derives a full
//! replacement collection via a workflow rule, and swaps it in with
//! [`ComplaintStore::replace_all`]. There is no per-record locking and no
//! partial update.
//!
//! Single-writer by construction: the shell serializes user actions, so no
//! locking is needed here. A multi-threaded port must wrap the store in a
//! mutex or funnel writes through a single-owner task, since `replace_all`
//! is not atomic across threads on its own.

use crate::complaint::Complaint;

/// Process-wide holder of the current complaint collection.
///
/// Handed to consumers by explicit parameter passing; there is no global
/// instance and no other component keeps a mutable alias across updates.
#[derive(Debug, Default)]
pub struct ComplaintStore {
    complaints: Vec<Complaint>,
}

impl ComplaintStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, in whatever order the last write produced.
    /// Submission prepends, so the convention is newest-first.
    pub fn all(&self) -> &[Complaint] {
        &self.complaints
    }

    /// Replaces the whole collection in a single assignment. Readers
    /// observe either the old or the new collection, never a mix.
    pub fn replace_all(&mut self, next: Vec<Complaint>) {
        self.complaints = next;
    }

    /// Look up a complaint by exact id.
    pub fn get(&self, id: &str) -> Option<&Complaint> {
        self.complaints.iter().find(|c| c.id == id)
    }

    /// Number of complaints currently held.
    pub fn len(&self) -> usize {
        self.complaints.len()
    }

    /// Returns true if no complaints are held.
    pub fn is_empty(&self) -> bool {
        self.complaints.is_empty()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
