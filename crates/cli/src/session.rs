// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Login sessions and role gating.
//!
//! Roles mirror the three dashboards of the app: students file and manage
//! their complaints, wardens hand them to staff, staff close them out.
//! The core is deliberately role-agnostic; every capability check lives
//! here in the presentation layer.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::Error;

/// Who is logged in. Authentication is mock, like the app's login screen:
/// the role picker is the whole credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Student,
    Warden,
    Staff,
}

impl Role {
    /// Returns the string representation used in prompts and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Warden => "warden",
            Role::Staff => "staff",
        }
    }

    /// Whether this role may run the given shell command.
    ///
    /// Mirrors the buttons each dashboard offers: submit/edit/delete are
    /// student actions, assign is the warden's, complete is the staff's.
    /// Everything else (list, export, help, ...) is open to all roles.
    pub fn allows(&self, command: &str) -> bool {
        match command {
            "submit" | "edit" | "delete" => matches!(self, Role::Student),
            "assign" => matches!(self, Role::Warden),
            "complete" => matches!(self, Role::Staff),
            _ => true,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "warden" => Ok(Role::Warden),
            "staff" => Ok(Role::Staff),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

/// A logged-in user.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: String,
    pub role: Role,
}

impl Session {
    pub fn new(user: String, role: Role) -> Self {
        Session { user, role }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
