// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the student commands: submit, edit, delete, list.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

#[test]
fn submit_reports_id_and_category() {
    run_session("student", &["submit water Leaking tap in room 12"])
        .success()
        .stdout(predicate::str::contains("Submitted cmp-"))
        .stdout(predicate::str::contains("[water]"));
}

#[test]
fn list_shows_pending_complaint() {
    run_session("student", &["submit water Leaking tap in room 12", "list"])
        .success()
        .stdout(predicate::str::contains("[water] pending"))
        .stdout(predicate::str::contains("Leaking tap in room 12"));
}

#[test]
fn list_is_newest_first() {
    run_session(
        "student",
        &["submit water Leaking tap", "submit furniture Broken chair", "list"],
    )
    .success()
    .stdout(predicate::str::contains("#1 cmp-").and(predicate::str::contains("#2 cmp-")))
    .stdout(predicate::str::is_match(r"(?s)Broken chair.*Leaking tap").unwrap());
}

#[test]
fn empty_list_shows_dashboard_message() {
    run_session("student", &["list"])
        .success()
        .stdout(predicate::str::contains("No complaints submitted yet."));
}

#[test]
fn edit_rewrites_category_and_description() {
    run_session(
        "student",
        &["submit water Leaking tap", "edit 1 furniture Broken bed frame", "list"],
    )
    .success()
    .stdout(predicate::str::contains("Updated cmp-"))
    .stdout(predicate::str::contains("[furniture] pending"))
    .stdout(predicate::str::contains("Broken bed frame"));
}

#[test]
fn delete_removes_the_complaint() {
    run_session("student", &["submit water Leaking tap", "delete 1", "list"])
        .success()
        .stdout(predicate::str::contains("Deleted cmp-"))
        .stdout(predicate::str::contains("No complaints submitted yet."));
}

#[test]
fn bad_category_is_rejected() {
    run_session("student", &["submit plumbing Leaking tap"])
        .success()
        .stderr(predicate::str::contains("invalid category: 'plumbing'"));
}

#[test]
fn missing_description_is_a_usage_error() {
    run_session("student", &["submit water"])
        .success()
        .stderr(predicate::str::contains("usage: submit <category> <description>"));
}

#[test]
fn unknown_command_is_reported() {
    run_session("student", &["frobnicate"])
        .success()
        .stderr(predicate::str::contains("unknown command: 'frobnicate'"));
}

#[test]
fn help_lists_student_commands() {
    run_session("student", &["help"])
        .success()
        .stdout(predicate::str::contains("submit <category> <description>"))
        .stdout(predicate::str::contains("Categories: water, electricity"));
}
