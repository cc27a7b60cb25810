// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! HTTP surface of the backfill node.
//!
//! One workflow route plus the observability endpoint. The workflow route
//! accepts POST only (anything else is a 405 from the method router) and
//! answers OPTIONS with an empty 204; CORS is permissive across the router.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{WorkflowFailure, WorkflowSuccess, WORKFLOW_SUCCESS_MESSAGE};
use crate::workflow::MissingEventsWorkflow;

pub const WORKFLOW_PATH: &str = "/v1/workflows/missing-events";

#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<MissingEventsWorkflow>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(WORKFLOW_PATH, post(run_missing_events).options(preflight))
        .route("/metrics", get(metrics_handler))
        .layer(cors)
        .with_state(state)
}

/// The request body is never read; the run takes no parameters.
async fn run_missing_events(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    match state.workflow.run().await {
        Ok(report) => (
            StatusCode::OK,
            Json(WorkflowSuccess {
                success: true,
                message: WORKFLOW_SUCCESS_MESSAGE.to_string(),
                results: report,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("missing-events workflow failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(WorkflowFailure {
                    success: false,
                    error: "Internal server error".to_string(),
                    details: err.to_string(),
                    execution_time_ms: started.elapsed().as_millis() as u64,
                }),
            )
                .into_response()
        }
    }
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}
