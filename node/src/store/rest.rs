//! REST client for the hosted store.
//!
//! Speaks the store's PostgREST-style surface: table reads via query
//! parameters, batch inserts as a single JSON array `POST` with
//! `Prefer: return=representation` so the assigned ids come back in the same
//! round trip.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use onemil_backfill::event::{Actor, Contest, EventRecord, InsertedEvent};

use super::{AuditRecord, EventStore, Result, StoreError};

#[derive(Debug, Clone)]
pub struct RestStore {
    base_url: String,
    service_key: String,
    client: Client,
}

impl RestStore {
    pub fn new(base_url: String, service_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl EventStore for RestStore {
    async fn fetch_actors(&self, limit: usize) -> Result<Vec<Actor>> {
        let url = format!("{}?select=id&limit={}", self.table_url("profiles"), limit);
        let resp = self.authed(self.client.get(&url)).send().await?;
        Self::read_json(resp).await
    }

    async fn fetch_contests(&self) -> Result<Vec<Contest>> {
        let url = format!("{}?select=id", self.table_url("contests"));
        let resp = self.authed(self.client.get(&url)).send().await?;
        Self::read_json(resp).await
    }

    async fn insert_events(&self, events: &[EventRecord]) -> Result<Vec<InsertedEvent>> {
        let resp = self
            .authed(self.client.post(self.table_url("events")))
            .header("Prefer", "return=representation")
            .json(&events)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    async fn insert_audit(&self, record: &AuditRecord) -> Result<()> {
        let resp = self
            .authed(self.client.post(self.table_url("audit_log")))
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
