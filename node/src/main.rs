// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::sync::Arc;

use tokio::net::TcpListener;

use onemil_node::config::NodeConfig;
use onemil_node::server::{build_router, AppState, WORKFLOW_PATH};
use onemil_node::store::RestStore;
use onemil_node::telemetry::init_telemetry;
use onemil_node::workflow::MissingEventsWorkflow;

#[tokio::main]
async fn main() {
    init_telemetry();

    let cfg = match NodeConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::error!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    tracing::info!(store_url = %cfg.store_url, "initializing OneMil backfill node");

    let store = Arc::new(RestStore::new(
        cfg.store_url.clone(),
        cfg.service_key.clone(),
    ));
    let workflow = Arc::new(MissingEventsWorkflow::new(store, cfg.rng_seed));
    let app = build_router(AppState { workflow });

    tracing::info!("Listening on {} (workflow at {})", cfg.bind_addr, WORKFLOW_PATH);
    let listener = TcpListener::bind(cfg.bind_addr)
        .await
        .expect("bind node address");
    axum::serve(listener, app).await.expect("serve HTTP");
}
