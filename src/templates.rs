// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The six synthetic metadata templates.
//!
//! Each generator produces a realistic-looking random payload for one event
//! type. All randomness comes from the caller's `Rng`, so seeded runs are
//! reproducible. The `contest_id` key is written literally by every
//! contest-bearing template; the validator's required-field table depends on
//! that exact key name.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde_json::{json, Value};

use crate::event::EventName;

/// Inputs shared by every generator for one event instance.
#[derive(Debug, Clone, Copy)]
pub struct TemplateInput<'a> {
    pub contest_id: &'a str,
    pub event_time: DateTime<Utc>,
}

const REGISTRATION_METHODS: [&str; 2] = ["email", "social"];
const DEVICE_TYPES: [&str; 2] = ["mobile", "desktop"];
const REFERRAL_SOURCES: [&str; 5] = ["google", "facebook", "instagram", "direct", "friend_invite"];
const VOUCHER_TYPES: [&str; 3] = ["discount", "cashback", "bonus"];
const PAYMENT_METHODS: [&str; 3] = ["card", "bank_transfer", "paypal"];
const REWARD_TYPES: [&str; 3] = ["discount", "product", "service"];
const PRIZE_TYPES: [&str; 4] = ["cash", "voucher", "product", "experience"];
const NOTIFICATION_TYPES: [&str; 3] = ["email", "push", "sms"];

/// Fixed user agent stamped on registration events.
const USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 13; Mobile) OneMilApp/2.4";

/// Subject line stamped on notification events.
pub const NOTIFICATION_SUBJECT: &str = "OneMil Notification";

/// Render the metadata payload for one event of the given type.
pub fn metadata_for<R: Rng + ?Sized>(
    name: EventName,
    rng: &mut R,
    input: &TemplateInput<'_>,
) -> Value {
    match name {
        EventName::UserRegistered => user_registered(rng, input),
        EventName::VoucherPurchased => voucher_purchased(rng, input),
        EventName::CoinRedeemed => coin_redeemed(rng, input),
        EventName::ContestClosed => contest_closed(rng, input),
        EventName::PrizeWon => prize_won(rng, input),
        EventName::NotificationSent => notification_sent(rng, input),
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

fn token<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> String {
    format!("{prefix}_{:08x}", rng.random::<u32>())
}

fn user_registered<R: Rng + ?Sized>(rng: &mut R, input: &TemplateInput<'_>) -> Value {
    json!({
        "registration_method": pick(rng, &REGISTRATION_METHODS),
        "device_type": pick(rng, &DEVICE_TYPES),
        "referral_source": pick(rng, &REFERRAL_SOURCES),
        "ip_address": format!("192.168.{}.{}", rng.random_range(0..256), rng.random_range(1..255)),
        "user_agent": USER_AGENT,
        "timestamp": input.event_time.to_rfc3339(),
        "welcome_email_sent": true,
    })
}

fn voucher_purchased<R: Rng + ?Sized>(rng: &mut R, input: &TemplateInput<'_>) -> Value {
    json!({
        "voucher_id": token(rng, "voucher"),
        "voucher_type": pick(rng, &VOUCHER_TYPES),
        "amount": rng.random_range(50..550),
        "currency": "CZK",
        "payment_method": pick(rng, &PAYMENT_METHODS),
        "contest_id": input.contest_id,
        "purchase_channel": "web",
        "transaction_id": token(rng, "txn"),
    })
}

fn coin_redeemed<R: Rng + ?Sized>(rng: &mut R, input: &TemplateInput<'_>) -> Value {
    json!({
        "coins_amount": rng.random_range(100..1100),
        "reward_type": pick(rng, &REWARD_TYPES),
        "reward_value": rng.random_range(25..225),
        "contest_id": input.contest_id,
        "redemption_method": "app",
        "remaining_balance": rng.random_range(0..5000),
        "redemption_id": token(rng, "redemption"),
    })
}

fn contest_closed<R: Rng + ?Sized>(rng: &mut R, input: &TemplateInput<'_>) -> Value {
    json!({
        "contest_id": input.contest_id,
        "total_participants": rng.random_range(50..550),
        "total_prizes_awarded": rng.random_range(5..25),
        "contest_duration_days": rng.random_range(7..37),
        "winning_criteria": "highest_score",
        "closure_reason": "completed",
        "final_statistics": {
            "total_entries": rng.random_range(100..1100),
            "unique_participants": rng.random_range(40..540),
        },
    })
}

fn prize_won<R: Rng + ?Sized>(rng: &mut R, input: &TemplateInput<'_>) -> Value {
    json!({
        "prize_id": token(rng, "prize"),
        "prize_type": pick(rng, &PRIZE_TYPES),
        "prize_value": rng.random_range(100..4100),
        "contest_id": input.contest_id,
        "winning_position": rng.random_range(1..11),
        "prize_status": "pending_delivery",
        "notification_sent": true,
        "delivery_address_required": rng.random_bool(0.5),
    })
}

fn notification_sent<R: Rng + ?Sized>(rng: &mut R, input: &TemplateInput<'_>) -> Value {
    json!({
        "notification_type": pick(rng, &NOTIFICATION_TYPES),
        "template_id": format!("template_{}", rng.random_range(1..11)),
        "subject": NOTIFICATION_SUBJECT,
        "delivery_status": if rng.random_bool(0.9) { "delivered" } else { "failed" },
        "contest_id": input.contest_id,
        "channel_preference": "automatic",
        "read_status": if rng.random_bool(0.6) { "read" } else { "unread" },
        "click_through": rng.random_bool(0.3),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_event;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn input(contest_id: &str) -> TemplateInput<'_> {
        TemplateInput {
            contest_id,
            event_time: Utc.with_ymd_and_hms(2025, 6, 1, 14, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_generated_records_validate_clean() {
        // The generators and the required-field table must never disagree
        // for payloads this pipeline itself produces.
        let mut rng = StdRng::seed_from_u64(42);
        for name in EventName::ALL {
            for _ in 0..50 {
                let metadata = metadata_for(name, &mut rng, &input("contest-1"));
                let result = validate_event(name, "evt-1", &metadata);
                assert!(
                    result.is_valid,
                    "{name} failed validation: {:?}",
                    result.validation_errors
                );
            }
        }
    }

    #[test]
    fn test_voucher_amount_is_numeric_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let metadata = metadata_for(EventName::VoucherPurchased, &mut rng, &input("c"));
            let amount = metadata["amount"].as_i64().expect("amount must be a number");
            assert!((50..550).contains(&amount));
            assert_eq!(metadata["currency"], "CZK");
        }
    }

    #[test]
    fn test_registration_timestamp_is_rfc3339_string() {
        let mut rng = StdRng::seed_from_u64(7);
        let metadata = metadata_for(EventName::UserRegistered, &mut rng, &input("c"));
        let ts = metadata["timestamp"].as_str().expect("timestamp must be a string");
        chrono::DateTime::parse_from_rfc3339(ts).expect("timestamp must parse");
        assert_eq!(metadata["welcome_email_sent"], true);
    }

    #[test]
    fn test_contest_bearing_templates_carry_the_literal_key() {
        let mut rng = StdRng::seed_from_u64(7);
        let contest_bearing = [
            EventName::VoucherPurchased,
            EventName::CoinRedeemed,
            EventName::ContestClosed,
            EventName::PrizeWon,
            EventName::NotificationSent,
        ];
        for name in contest_bearing {
            let metadata = metadata_for(name, &mut rng, &input("contest-xyz"));
            assert_eq!(metadata["contest_id"], "contest-xyz", "{name}");
        }
    }

    #[test]
    fn test_notification_fields() {
        let mut rng = StdRng::seed_from_u64(9);
        let metadata = metadata_for(EventName::NotificationSent, &mut rng, &input("c"));
        assert_eq!(metadata["subject"], NOTIFICATION_SUBJECT);
        assert_eq!(metadata["channel_preference"], "automatic");
        let template = metadata["template_id"].as_str().unwrap();
        assert!(template.starts_with("template_"));
        let status = metadata["delivery_status"].as_str().unwrap();
        assert!(status == "delivered" || status == "failed");
        let read = metadata["read_status"].as_str().unwrap();
        assert!(read == "read" || read == "unread");
    }

    #[test]
    fn test_contest_closed_nested_statistics() {
        let mut rng = StdRng::seed_from_u64(11);
        let metadata = metadata_for(EventName::ContestClosed, &mut rng, &input("c"));
        let stats = metadata["final_statistics"]
            .as_object()
            .expect("final_statistics must be an object");
        assert!(stats.contains_key("total_entries"));
        assert!(stats.contains_key("unique_participants"));
        assert_eq!(metadata["winning_criteria"], "highest_score");
        assert_eq!(metadata["closure_reason"], "completed");
    }
}
