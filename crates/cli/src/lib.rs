// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hmcrs - hostel maintenance complaint tracker shell.
//!
//! This crate provides the presentation layer for the `hmc` binary: an
//! interactive, role-based shell over the in-memory complaint store from
//! [`hmc_core`]. One store lives for the lifetime of the process; quitting
//! discards everything.
//!
//! # Main Components
//!
//! - [`Cli`] - Startup flags (direct login, verbosity)
//! - [`session`] - Login sessions and per-role command gating
//! - [`run`] - The read-eval loop dispatching commands against the store

mod cli;
pub mod colors;
mod commands;
pub mod display;
pub mod error;
pub mod session;
mod shell;

pub use cli::Cli;
pub use error::{Error, Result};

/// Run the shell. This is the main entry point for library users and
/// provides a testable way to run the shell without process execution.
pub fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        init_tracing();
    }
    shell::run(cli)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
