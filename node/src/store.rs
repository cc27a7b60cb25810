// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Data-store access.
//!
//! The workflow makes exactly four round trips per run: two reads (profiles,
//! contests) and two writes (event batch, audit row). No retries; the audit
//! write is the only call whose failure the caller is allowed to swallow.

pub mod mock;
pub mod rest;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use onemil_backfill::event::{Actor, Contest, EventRecord, InsertedEvent};

pub use rest::RestStore;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("store response could not be decoded: {0}")]
    Decode(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Audit-log row written at the end of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    pub event_name: String,
    pub project_id: String,
    pub payload: Value,
    pub created_at: DateTime<Utc>,
}

/// Interface to the hosted store.
///
/// Implementations:
/// - `RestStore`: the hosted relational store's REST surface
/// - `MockStore`: in-memory double for tests
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Read up to `limit` user profiles. Order is not significant.
    async fn fetch_actors(&self, limit: usize) -> Result<Vec<Actor>>;

    /// Read every contest row.
    async fn fetch_contests(&self) -> Result<Vec<Contest>>;

    /// Insert the whole batch in one call, returning the stored rows with
    /// their assigned ids. The store commits all rows or rejects the call.
    async fn insert_events(&self, events: &[EventRecord]) -> Result<Vec<InsertedEvent>>;

    /// Append one audit-log row.
    async fn insert_audit(&self, record: &AuditRecord) -> Result<()>;
}
