// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hmc-core: Shared library for the hmc complaint tracker
//!
//! This crate provides the complaint data model, the in-memory store, and
//! the pure workflow rules consumed by the hmc shell.
//!
//! # Main Components
//!
//! - [`Complaint`] - A single reported maintenance issue
//! - [`ComplaintStore`] - Owner of the authoritative in-memory collection
//! - [`workflow`] - Pure rules computing the next collection from an action
//! - [`Error`] - Error types for all operations

pub mod complaint;
pub mod error;
pub mod id;
pub mod store;
pub mod validate;
pub mod workflow;

pub use complaint::{Category, Complaint, Status};
pub use error::{Error, Result};
pub use store::ComplaintStore;
pub use workflow::EditPatch;
