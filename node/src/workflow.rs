// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The missing-events backfill pass.
//!
//! One invocation is a single synchronous-style pass:
//! 1. Read up to 10 user profiles (zero profiles is fatal)
//! 2. Resolve the grouping contest (sentinel when the table is empty)
//! 3. Generate the 7-day synthetic batch
//! 4. One batch insert
//! 5. Validate every stored row
//! 6. Best-effort audit write
//!
//! No retries, no partial-success handling. Every run inserts a fresh random
//! batch: calling it twice duplicates history, which is intended for a
//! seeding tool.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use onemil_backfill::event::{FALLBACK_CONTEST_ID, PROJECT_ID};
use onemil_backfill::generate::generate_events;
use onemil_backfill::report::WorkflowReport;
use onemil_backfill::validate::validate_event;

use crate::errors::WorkflowError;
use crate::store::{AuditRecord, EventStore};

/// Profiles read per run.
pub const ACTOR_LIMIT: usize = 10;

/// Audit-log entry written after a successful run.
pub const AUDIT_EVENT_NAME: &str = "missing_events_workflow_completed";

pub struct MissingEventsWorkflow {
    store: Arc<dyn EventStore>,
    rng_seed: Option<u64>,
}

impl MissingEventsWorkflow {
    pub fn new(store: Arc<dyn EventStore>, rng_seed: Option<u64>) -> Self {
        Self { store, rng_seed }
    }

    /// Run one backfill pass.
    ///
    /// Fatal errors surface immediately; the audit write is the only call
    /// whose failure is swallowed (logged, run still reported as success).
    pub async fn run(&self) -> Result<WorkflowReport, WorkflowError> {
        let started = Instant::now();

        let actors = self
            .store
            .fetch_actors(ACTOR_LIMIT)
            .await
            .map_err(WorkflowError::Store)?;
        if actors.is_empty() {
            return Err(WorkflowError::NoActors);
        }

        let contests = self
            .store
            .fetch_contests()
            .await
            .map_err(WorkflowError::Store)?;
        let contest_id = contests
            .first()
            .map(|contest| contest.id.clone())
            .unwrap_or_else(|| FALLBACK_CONTEST_ID.to_string());

        let mut rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let records = generate_events(&mut rng, &actors, &contest_id, Utc::now());

        let inserted = self
            .store
            .insert_events(&records)
            .await
            .map_err(WorkflowError::Persistence)?;
        tracing::info!(
            count = inserted.len(),
            contest_id = %contest_id,
            "inserted synthetic event batch"
        );

        let mut events_by_type: BTreeMap<String, usize> = BTreeMap::new();
        for row in &inserted {
            *events_by_type
                .entry(row.event_name.as_str().to_string())
                .or_insert(0) += 1;
        }

        let validation_results: Vec<_> = inserted
            .iter()
            .map(|row| validate_event(row.event_name, &row.id, &row.metadata))
            .collect();
        let total_validation_errors = validation_results
            .iter()
            .filter(|result| !result.is_valid)
            .count();

        let report = WorkflowReport {
            total_events_generated: inserted.len(),
            events_by_type,
            validation_results,
            total_validation_errors,
            execution_time_ms: started.elapsed().as_millis() as u64,
        };

        metrics::counter!("onemil_backfill_runs_total", 1);
        metrics::counter!(
            "onemil_backfill_events_generated_total",
            report.total_events_generated as u64
        );
        metrics::counter!(
            "onemil_backfill_invalid_events_total",
            report.total_validation_errors as u64
        );
        metrics::histogram!(
            "onemil_backfill_run_duration_seconds",
            started.elapsed().as_secs_f64()
        );

        let audit = AuditRecord {
            event_name: AUDIT_EVENT_NAME.to_string(),
            project_id: PROJECT_ID.to_string(),
            payload: serde_json::to_value(&report).unwrap_or(serde_json::Value::Null),
            created_at: Utc::now(),
        };
        if let Err(err) = self.store.insert_audit(&audit).await {
            tracing::warn!("audit write failed, run still reported as success: {err}");
        }

        Ok(report)
    }
}
