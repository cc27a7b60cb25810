// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Event model shared by the generator, the validator and the store client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Owning tenant written into every row this pipeline produces.
pub const PROJECT_ID: &str = "onemil";

/// Contest id used when the contest table has no rows.
///
/// This is a documented sentinel, not a dynamically created row.
pub const FALLBACK_CONTEST_ID: &str = "00000000-0000-0000-0000-000000000000";

/// The six event types the backfill synthesizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    UserRegistered,
    VoucherPurchased,
    CoinRedeemed,
    ContestClosed,
    PrizeWon,
    NotificationSent,
}

impl EventName {
    /// Every template, in generation order.
    pub const ALL: [EventName; 6] = [
        EventName::UserRegistered,
        EventName::VoucherPurchased,
        EventName::CoinRedeemed,
        EventName::ContestClosed,
        EventName::PrizeWon,
        EventName::NotificationSent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::UserRegistered => "user_registered",
            EventName::VoucherPurchased => "voucher_purchased",
            EventName::CoinRedeemed => "coin_redeemed",
            EventName::ContestClosed => "contest_closed",
            EventName::PrizeWon => "prize_won",
            EventName::NotificationSent => "notification_sent",
        }
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user profile row. Read-only input; only the id is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
}

/// A contest row used as the grouping context for generated events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    pub id: String,
}

/// One synthesized event, ready for the batch insert.
///
/// Field names match the store's `events` table columns. `metadata` is always
/// a JSON object for rows this pipeline writes.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub event_name: EventName,
    pub user_id: String,
    pub contest_id: String,
    pub project_id: String,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
}

/// The store's echo of an inserted row: the store-assigned id plus the fields
/// the validator inspects.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertedEvent {
    pub id: String,
    pub event_name: EventName,
    pub metadata: Value,
}
