// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use crate::session::Role;

#[derive(Parser)]
#[command(name = "hmc")]
#[command(about = "An in-memory hostel maintenance complaint tracker with role-based workflows")]
#[command(
    long_about = "An in-memory hostel maintenance complaint tracker.\n\n\
    Students submit complaints, wardens assign them to staff, staff mark them\n\
    completed. State lives only in this process; quitting discards everything."
)]
pub struct Cli {
    /// Log in directly with this role, skipping the login prompt
    #[arg(long, short, value_enum)]
    pub role: Option<Role>,

    /// Name to log in as (defaults to the role name)
    #[arg(long, short)]
    pub user: Option<String>,

    /// Enable tracing output on stderr (filter with RUST_LOG)
    #[arg(long, short)]
    pub verbose: bool,
}
