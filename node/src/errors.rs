// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Workflow error taxonomy.
//!
//! Everything here is fatal for the run and surfaces as HTTP 500.
//! Per-record validation failures are reportable outcomes, not errors, and
//! never appear in this enum.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The profile table returned zero rows. Nothing is generated.
    #[error("no users found")]
    NoActors,

    /// One of the mandatory reads (profiles, contests) failed.
    #[error("store read failed: {0}")]
    Store(StoreError),

    /// The batch insert was rejected. No events are considered committed.
    #[error("event insert rejected: {0}")]
    Persistence(StoreError),
}
