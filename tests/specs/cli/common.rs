// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;

pub use predicates::prelude::*;

pub fn hmc() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("hmc").unwrap()
}

/// Run a scripted session: log in directly with the given role and feed
/// one command per line. A trailing `quit` is appended so the process
/// always terminates.
pub fn run_session(role: &str, script: &[&str]) -> assert_cmd::assert::Assert {
    hmc()
        .arg("--role")
        .arg(role)
        .env("NO_COLOR", "1")
        .write_stdin(join_lines(script))
        .assert()
}

/// Run a raw script starting at the login prompt (no --role flag).
pub fn run_script(script: &[&str]) -> assert_cmd::assert::Assert {
    hmc()
        .env("NO_COLOR", "1")
        .write_stdin(join_lines(script))
        .assert()
}

fn join_lines(script: &[&str]) -> String {
    let mut input = String::new();
    for line in script {
        input.push_str(line);
        input.push('\n');
    }
    input.push_str("quit\n");
    input
}
