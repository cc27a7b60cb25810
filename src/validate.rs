// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Post-insert metadata validation.
//!
//! Validation is presence-checking against a fixed per-type field table, plus
//! two cross-type checks: `timestamp` must be a string and `amount` must be a
//! number whenever either key is present. Failures are reportable outcomes,
//! never workflow errors.

use serde_json::Value;

use crate::event::EventName;
use crate::report::ValidationResult;

/// Required metadata keys per event type.
///
/// `contest_closed` and `prize_won` demand the literal key `contest_id`; the
/// generators write the grouping identifier under that exact name.
pub fn required_fields(name: EventName) -> &'static [&'static str] {
    match name {
        EventName::UserRegistered => &["registration_method", "device_type", "timestamp"],
        EventName::VoucherPurchased => &["voucher_id", "amount", "currency", "payment_method"],
        EventName::CoinRedeemed => &["coins_amount", "reward_type", "reward_value"],
        EventName::ContestClosed => &["contest_id", "total_participants", "closure_reason"],
        EventName::PrizeWon => &["prize_id", "prize_type", "prize_value", "contest_id"],
        EventName::NotificationSent => &["notification_type", "template_id", "delivery_status"],
    }
}

/// Validate one stored record's metadata.
pub fn validate_event(name: EventName, event_id: &str, metadata: &Value) -> ValidationResult {
    let map = match metadata.as_object() {
        Some(map) => map,
        None => {
            // Non-object metadata short-circuits the remaining checks.
            return ValidationResult {
                event_name: name.as_str().to_string(),
                event_id: event_id.to_string(),
                is_valid: false,
                validation_errors: vec!["Metadata is not a valid JSON object".to_string()],
                metadata_keys: Vec::new(),
            };
        }
    };

    let mut errors = Vec::new();
    for field in required_fields(name) {
        if !map.contains_key(*field) {
            errors.push(format!("Missing required field: {field}"));
        }
    }
    if let Some(timestamp) = map.get("timestamp") {
        if !timestamp.is_string() {
            errors.push("timestamp must be a string".to_string());
        }
    }
    if let Some(amount) = map.get("amount") {
        if !amount.is_number() {
            errors.push("amount must be a number".to_string());
        }
    }

    ValidationResult {
        event_name: name.as_str().to_string(),
        event_id: event_id.to_string(),
        is_valid: errors.is_empty(),
        validation_errors: errors,
        metadata_keys: map.keys().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_produce_one_error_each() {
        let metadata = json!({ "voucher_id": "voucher_1" });
        let result = validate_event(EventName::VoucherPurchased, "evt-1", &metadata);
        assert!(!result.is_valid);
        assert_eq!(
            result.validation_errors,
            vec![
                "Missing required field: amount".to_string(),
                "Missing required field: currency".to_string(),
                "Missing required field: payment_method".to_string(),
            ]
        );
        assert_eq!(result.metadata_keys, vec!["voucher_id".to_string()]);
    }

    #[test]
    fn test_string_amount_is_rejected_even_when_fields_are_present() {
        let metadata = json!({
            "voucher_id": "voucher_1",
            "amount": "50",
            "currency": "CZK",
            "payment_method": "card",
        });
        let result = validate_event(EventName::VoucherPurchased, "evt-1", &metadata);
        assert!(!result.is_valid);
        assert_eq!(result.validation_errors, vec!["amount must be a number".to_string()]);
    }

    #[test]
    fn test_numeric_timestamp_is_rejected() {
        let metadata = json!({
            "registration_method": "email",
            "device_type": "mobile",
            "timestamp": 1717200000,
        });
        let result = validate_event(EventName::UserRegistered, "evt-1", &metadata);
        assert!(!result.is_valid);
        assert_eq!(result.validation_errors, vec!["timestamp must be a string".to_string()]);
    }

    #[test]
    fn test_non_object_metadata_short_circuits() {
        for metadata in [Value::Null, json!("text"), json!(42), json!([1, 2])] {
            let result = validate_event(EventName::CoinRedeemed, "evt-1", &metadata);
            assert!(!result.is_valid);
            assert_eq!(
                result.validation_errors,
                vec!["Metadata is not a valid JSON object".to_string()]
            );
            assert!(result.metadata_keys.is_empty());
        }
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        let metadata = json!({
            "coins_amount": 500,
            "reward_type": "discount",
            "reward_value": 100,
        });
        let result = validate_event(EventName::CoinRedeemed, "evt-9", &metadata);
        assert!(result.is_valid);
        assert!(result.validation_errors.is_empty());
        assert_eq!(result.event_name, "coin_redeemed");
        assert_eq!(result.event_id, "evt-9");
    }

    #[test]
    fn test_contest_tables_require_the_literal_contest_key() {
        assert!(required_fields(EventName::ContestClosed).contains(&"contest_id"));
        assert!(required_fields(EventName::PrizeWon).contains(&"contest_id"));
    }
}
