//! In-memory store double used by the test suites.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use onemil_backfill::event::{Actor, Contest, EventRecord, InsertedEvent};

use super::{AuditRecord, EventStore, Result, StoreError};

/// Store double with controllable rows and failure toggles.
#[derive(Default)]
pub struct MockStore {
    pub actors: Vec<Actor>,
    pub contests: Vec<Contest>,
    pub fail_insert: bool,
    pub fail_audit: bool,
    /// Every record handed to `insert_events`, across all calls.
    pub inserted: Mutex<Vec<EventRecord>>,
    pub audits: Mutex<Vec<AuditRecord>>,
    pub insert_calls: AtomicU64,
}

impl MockStore {
    pub fn with_actors(count: usize) -> Self {
        Self {
            actors: (0..count)
                .map(|_| Actor {
                    id: Uuid::new_v4().to_string(),
                })
                .collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl EventStore for MockStore {
    async fn fetch_actors(&self, limit: usize) -> Result<Vec<Actor>> {
        Ok(self.actors.iter().take(limit).cloned().collect())
    }

    async fn fetch_contests(&self) -> Result<Vec<Contest>> {
        Ok(self.contests.clone())
    }

    async fn insert_events(&self, events: &[EventRecord]) -> Result<Vec<InsertedEvent>> {
        self.insert_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_insert {
            return Err(StoreError::Unavailable("insert rejected".to_string()));
        }
        self.inserted.lock().await.extend(events.iter().cloned());
        Ok(events
            .iter()
            .map(|event| InsertedEvent {
                id: Uuid::new_v4().to_string(),
                event_name: event.event_name,
                metadata: event.metadata.clone(),
            })
            .collect())
    }

    async fn insert_audit(&self, record: &AuditRecord) -> Result<()> {
        if self.fail_audit {
            return Err(StoreError::Unavailable("audit log unavailable".to_string()));
        }
        self.audits.lock().await.push(record.clone());
        Ok(())
    }
}
