// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the login prompt and direct-login flags.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;

#[test]
fn login_prompt_appears_without_role_flag() {
    run_script(&[])
        .success()
        .stdout(predicate::str::contains("login>"));
}

#[test]
fn role_name_logs_in() {
    run_script(&["student"])
        .success()
        .stdout(predicate::str::contains("Logged in as student (student)"));
}

#[test]
fn login_keyword_with_name_logs_in() {
    run_script(&["login warden Mrs. Perera"])
        .success()
        .stdout(predicate::str::contains("Logged in as Mrs. Perera (warden)"));
}

#[test]
fn bad_role_is_rejected_and_prompt_returns() {
    run_script(&["admin", "staff"])
        .success()
        .stderr(predicate::str::contains("invalid role: 'admin'"))
        .stdout(predicate::str::contains("Logged in as staff (staff)"));
}

#[test]
fn direct_login_flags_set_the_prompt() {
    run_session("staff", &[])
        .success()
        .stdout(predicate::str::contains("staff@staff>"));
}

#[test]
fn user_flag_overrides_the_name() {
    hmc()
        .arg("--role")
        .arg("warden")
        .arg("--user")
        .arg("Mrs. Perera")
        .env("NO_COLOR", "1")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mrs. Perera@warden>"));
}

#[test]
fn logout_returns_to_login_prompt() {
    run_session("student", &["logout", "warden"])
        .success()
        .stdout(predicate::str::contains("Logged in as warden (warden)"));
}

#[test]
fn banner_mentions_state_is_discarded() {
    run_script(&[])
        .success()
        .stdout(predicate::str::contains("quitting discards everything"));
}
