// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the JSON export command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

#[test]
fn empty_store_exports_an_empty_array() {
    run_session("student", &["export"])
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn export_includes_complaint_fields() {
    run_session("student", &["submit water Leaking tap", "export"])
        .success()
        .stdout(predicate::str::contains("\"id\": \"cmp-"))
        .stdout(predicate::str::contains("\"category\": \"water\""))
        .stdout(predicate::str::contains("\"description\": \"Leaking tap\""))
        .stdout(predicate::str::contains("\"status\": \"pending\""));
}

#[test]
fn unassigned_complaints_omit_the_assignee_field() {
    run_session("student", &["submit water Leaking tap", "export"])
        .success()
        .stdout(predicate::str::contains("assigned_to").not());
}

#[test]
fn export_shows_assignee_after_assignment() {
    run_script(&[
        "student asha",
        "submit water Leaking tap",
        "logout",
        "warden",
        "assign 1 Mr. Silva",
        "export",
    ])
    .success()
    .stdout(predicate::str::contains("\"assigned_to\": \"Mr. Silva\""))
    .stdout(predicate::str::contains("\"status\": \"assigned\""));
}

#[test]
fn every_role_may_export() {
    for role in ["student", "warden", "staff"] {
        run_session(role, &["export"]).success();
    }
}
