// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the full student -> warden -> staff lifecycle in one process.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

#[test]
fn store_survives_logout() {
    run_script(&[
        "student asha",
        "submit water Leaking tap",
        "logout",
        "warden",
        "list",
    ])
    .success()
    .stdout(predicate::str::contains("[water] pending"))
    .stdout(predicate::str::contains("Leaking tap"));
}

#[test]
fn full_lifecycle_across_roles() {
    run_script(&[
        "student asha",
        "submit water Leaking tap",
        "logout",
        "warden",
        "assign 1 Mr. Silva",
        "logout",
        "staff",
        "complete 1",
        "list",
    ])
    .success()
    .stdout(predicate::str::contains("to Mr. Silva"))
    .stdout(predicate::str::contains("Completed cmp-"))
    .stdout(predicate::str::contains("[water] completed"))
    .stdout(predicate::str::contains("assigned to: Mr. Silva"));
}

#[test]
fn staff_list_only_shows_assigned_complaints() {
    run_script(&[
        "student asha",
        "submit water Leaking tap",
        "submit furniture Broken chair",
        "logout",
        "warden",
        "assign 1 Mr. Silva",
        "logout",
        "staff",
        "list",
    ])
    .success()
    // newest-first: position 1 is the chair
    .stdout(predicate::str::contains("Broken chair"))
    .stdout(predicate::str::contains("Leaking tap").not());
}

#[test]
fn staff_sees_empty_dashboard_before_any_assignment() {
    run_script(&[
        "student asha",
        "submit water Leaking tap",
        "logout",
        "staff",
        "list",
    ])
    .success()
    .stdout(predicate::str::contains("No tasks assigned yet."));
}

#[test]
fn complaints_can_be_referenced_by_id_prefix() {
    run_script(&[
        "student asha",
        "submit water Leaking tap",
        "logout",
        "warden",
        "assign cmp- Mr. Silva",
    ])
    .success()
    .stdout(predicate::str::contains("Assigned cmp-"));
}
