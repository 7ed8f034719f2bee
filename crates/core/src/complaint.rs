// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core complaint types for the hmc tracker.
//!
//! This module contains the fundamental data types: Complaint, Category,
//! and Status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Maintenance area a complaint is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Plumbing, leaks, water supply.
    Water,
    /// Wiring, lights, power sockets.
    Electricity,
    /// Broken beds, desks, chairs, cupboards.
    Furniture,
    /// Dirty rooms, corridors, common areas.
    Cleanliness,
    /// Anything that doesn't fit the categories above.
    Other,
}

impl Category {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Water => "water",
            Category::Electricity => "electricity",
            Category::Furniture => "furniture",
            Category::Cleanliness => "cleanliness",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "water" => Ok(Category::Water),
            "electricity" => Ok(Category::Electricity),
            "furniture" => Ok(Category::Furniture),
            "cleanliness" => Ok(Category::Cleanliness),
            "other" => Ok(Category::Other),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// Workflow status of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Submitted, waiting for a warden to assign it. Initial state.
    Pending,
    /// Handed to a staff member.
    Assigned,
    /// Resolved by the assigned staff member. Terminal.
    Completed,
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Assigned => "assigned",
            Status::Completed => "completed",
        }
    }

    /// Check if a transition from this status to target is valid.
    ///
    /// Transitions are monotonic: pending -> assigned -> completed, with
    /// no regression and no skipping.
    pub fn can_transition_to(&self, target: Status) -> bool {
        matches!(
            (self, target),
            (Status::Pending, Status::Assigned) | (Status::Assigned, Status::Completed)
        )
    }

    /// Get valid transition targets as a formatted string.
    pub fn valid_targets(&self) -> &'static str {
        match self {
            Status::Pending => "assigned",
            Status::Assigned => "completed",
            Status::Completed => "none (completed is terminal)",
        }
    }

    /// Returns true if this is the terminal state (completed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "assigned" => Ok(Status::Assigned),
            "completed" => Ok(Status::Completed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// A single reported maintenance issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    /// Unique identifier (format: `cmp-{hash}`). Never reused.
    pub id: String,
    /// Maintenance area the complaint falls under.
    pub category: Category,
    /// Free-form description of the problem. Never empty.
    pub description: String,
    /// Current workflow state.
    pub status: Status,
    /// Staff member handling the complaint. Present iff the complaint is
    /// assigned or completed; set once at assignment, immutable after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// When the complaint was submitted.
    pub created_at: DateTime<Utc>,
}

impl Complaint {
    /// Creates a new pending, unassigned complaint.
    pub fn new(
        id: String,
        category: Category,
        description: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Complaint {
            id,
            category,
            description,
            status: Status::Pending,
            assigned_to: None,
            created_at,
        }
    }
}

#[cfg(test)]
#[path = "complaint_tests.rs"]
mod tests;
