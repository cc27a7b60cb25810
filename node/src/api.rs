// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Wire types for the workflow endpoint.

use serde::{Deserialize, Serialize};

use onemil_backfill::report::WorkflowReport;

pub const WORKFLOW_SUCCESS_MESSAGE: &str = "Missing events workflow completed successfully";

/// HTTP 200 body.
#[derive(Serialize, Deserialize, Debug)]
pub struct WorkflowSuccess {
    pub success: bool,
    pub message: String,
    pub results: WorkflowReport,
}

/// HTTP 500 body. `details` carries the underlying error message;
/// `execution_time_ms` is the elapsed time up to the failure.
#[derive(Serialize, Deserialize, Debug)]
pub struct WorkflowFailure {
    pub success: bool,
    pub error: String,
    pub details: String,
    pub execution_time_ms: u64,
}
