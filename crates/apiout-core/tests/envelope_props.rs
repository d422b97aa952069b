// Rust guideline compliant 2026-10-16

//! Property-based tests for envelope construction and the explicit send path.

use apiout_core::{Dispatcher, Envelope, ErrorDetail, MemoryWriter, MessageType, SendError};
use chrono::NaiveDateTime;
use http::StatusCode;
use proptest::prelude::*;
use serde_json::Value;

/// Generates arbitrary topics, including blank ones.
fn arb_message_type() -> impl Strategy<Value = MessageType> {
    prop_oneof![
        Just(MessageType::ERROR),
        Just(MessageType::INSERT_OK),
        Just(MessageType::DATA_FOUND),
        Just(MessageType::default()),
        prop::string::string_regex("[a-zA-Z]{1,20}")
            .unwrap()
            .prop_map(MessageType::from),
    ]
}

/// Generates error details, roughly half of them empty.
fn arb_error_detail() -> impl Strategy<Value = ErrorDetail> {
    prop_oneof![
        Just(ErrorDetail::default()),
        ("[a-z ]{0,20}", "[A-Za-z .]{0,40}")
            .prop_map(|(error, message)| ErrorDetail { error, message }),
    ]
}

/// Generates optional JSON payloads.
fn arb_data() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        any::<i64>().prop_map(|n| Some(Value::from(n))),
        "[a-z]{0,10}".prop_map(|s| Some(Value::from(s))),
        Just(Some(serde_json::json!({"key": "value"}))),
    ]
}

/// Generates valid status codes.
fn arb_status() -> impl Strategy<Value = StatusCode> {
    (100u16..=599u16).prop_map(|code| StatusCode::from_u16(code).unwrap())
}

fn is_envelope_timestamp(ts: &str) -> bool {
    ts.len() == 24
        && ts.ends_with('Z')
        && NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.3fZ").is_ok()
}

proptest! {
    /// Every built envelope carries a millisecond UTC timestamp ending in `Z`.
    #[test]
    fn prop_build_stamps_timestamp(
        ok in any::<bool>(),
        msg_type in arb_message_type(),
        data in arb_data(),
        error_data in arb_error_detail(),
    ) {
        let env = Envelope::build(ok, msg_type, data, error_data);
        prop_assert!(is_envelope_timestamp(&env.datetime), "bad timestamp {}", env.datetime);
    }

    /// `Data` and `ErrorData` appear in JSON exactly when they hold something.
    #[test]
    fn prop_empty_fields_omitted(
        ok in any::<bool>(),
        msg_type in arb_message_type(),
        data in arb_data(),
        error_data in arb_error_detail(),
    ) {
        let env = Envelope::build(ok, msg_type, data.clone(), error_data.clone());
        let json: Value = serde_json::from_slice(&env.to_json().unwrap()).unwrap();
        let obj = json.as_object().unwrap();

        let has_payload = data.as_ref().is_some_and(|value| !value.is_null());
        prop_assert_eq!(obj.contains_key("Data"), has_payload);
        prop_assert_eq!(obj.contains_key("ErrorData"), !error_data.is_empty());
        prop_assert!(obj.contains_key("OK"));
        prop_assert!(obj.contains_key("Type"));
        prop_assert!(obj.contains_key("Datetime"));
    }

    /// Normalizing an already normalized envelope changes nothing.
    #[test]
    fn prop_normalize_idempotent(
        ok in any::<bool>(),
        msg_type in arb_message_type(),
        data in arb_data(),
        error_data in arb_error_detail(),
        blank_datetime in any::<bool>(),
        status in arb_status(),
    ) {
        let mut env = Envelope::build(ok, msg_type, data, error_data);
        if blank_datetime {
            env.datetime.clear();
        }

        env.normalize(status);
        let once = env.clone();
        let corrections = env.normalize(status);

        prop_assert!(corrections.is_empty());
        prop_assert_eq!(env, once);
    }

    /// Error data always leaves the dispatcher with `OK` false.
    #[test]
    fn prop_error_data_forces_not_ok(
        ok in any::<bool>(),
        msg_type in arb_message_type(),
        data in arb_data(),
        error in "[a-z]{1,20}",
        status in arb_status(),
    ) {
        let env = Envelope::build(ok, msg_type, data, ErrorDetail { error, message: String::new() });
        let mut w = MemoryWriter::new();
        Dispatcher::with_debug(false).send(&mut w, env, status).unwrap();

        let body = w.body_json().unwrap();
        prop_assert_eq!(&body["OK"], &Value::Bool(false));
        prop_assert_eq!(w.status, Some(status));
    }

    /// Codes below the lowest status class are rejected and nothing is written.
    #[test]
    fn prop_low_codes_rejected(code in 0u16..100u16, data in arb_data()) {
        let env = Envelope::success(MessageType::DATA_FOUND, data);
        let mut w = MemoryWriter::new();
        let result = Dispatcher::with_debug(false).send(&mut w, env, code);

        prop_assert!(matches!(result, Err(SendError::InvalidResponseCode(c)) if c == code));
        prop_assert!(w.is_untouched());
        prop_assert!(w.body.is_empty());
    }

    /// A written envelope never has a blank topic.
    #[test]
    fn prop_type_never_blank(msg_type in arb_message_type(), status in arb_status()) {
        let env: Envelope = Envelope::success(msg_type, None);
        let mut w = MemoryWriter::new();
        Dispatcher::with_debug(false).send(&mut w, env, status).unwrap();

        let body = w.body_json().unwrap();
        let written = body["Type"].as_str().unwrap();
        prop_assert!(!written.trim().is_empty());
    }
}
