// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Run report types, serialized verbatim into the HTTP response and the
//! audit-log payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Validation outcome for one stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub event_name: String,
    pub event_id: String,
    pub is_valid: bool,
    pub validation_errors: Vec<String>,
    pub metadata_keys: Vec<String>,
}

/// Aggregate result of one backfill run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowReport {
    pub total_events_generated: usize,
    pub events_by_type: BTreeMap<String, usize>,
    pub validation_results: Vec<ValidationResult>,
    /// Count of records that failed validation.
    pub total_validation_errors: usize,
    pub execution_time_ms: u64,
}
