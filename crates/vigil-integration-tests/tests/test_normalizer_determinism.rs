//! Normalization determinism and totality, end to end: identical raw
//! telemetry must classify identically, and no input can fail.

mod common;

use std::collections::BTreeMap;

use proptest::prelude::*;

use vigil_core::{RawTelemetryEvent, SystemId, Timestamp};
use vigil_normalizer::Normalizer;

fn fixed_event(
    event_type: String,
    metric: String,
    hint: Option<String>,
    payload: BTreeMap<String, serde_json::Value>,
) -> RawTelemetryEvent {
    RawTelemetryEvent {
        source_platform: "datadog".to_string(),
        raw_event_type: event_type,
        raw_metric: metric,
        severity_hint: hint,
        payload,
        // Deterministic identity so two constructions are identical.
        system_id: SystemId::from_uuid(uuid::Uuid::nil()),
        observed_at: Timestamp::from_datetime(
            chrono::DateTime::from_timestamp(1_754_000_000, 0).unwrap(),
        ),
    }
}

proptest! {
    /// Idempotence across independently constructed identical events.
    #[test]
    fn identical_raw_events_normalize_identically(
        event_type in "[a-z_ ]{0,32}",
        metric in "[a-z_ ]{0,32}",
        hint in proptest::option::of("[a-z]{0,12}"),
        values in proptest::collection::btree_map("[a-zA-Z_]{1,20}", -1e6..1e6f64, 0..8),
    ) {
        let payload: BTreeMap<String, serde_json::Value> = values
            .into_iter()
            .map(|(k, v)| (k, serde_json::json!(v)))
            .collect();

        let a = fixed_event(event_type.clone(), metric.clone(), hint.clone(), payload.clone());
        let b = fixed_event(event_type, metric, hint, payload);

        let normalizer = Normalizer::new();
        let na = normalizer.normalize(&a);
        let nb = normalizer.normalize(&b);
        prop_assert_eq!(
            serde_json::to_value(&na).unwrap(),
            serde_json::to_value(&nb).unwrap()
        );
    }

    /// Totality: arbitrary junk yields a classification, never a panic,
    /// with confidence inside [0, 1]; unmatched junk stays below 0.5.
    #[test]
    fn arbitrary_input_yields_bounded_confidence(
        event_type in "\\PC{0,40}",
        metric in "\\PC{0,40}",
    ) {
        let event = fixed_event(event_type, metric, None, BTreeMap::new());
        let normalized = Normalizer::new().normalize(&event);
        prop_assert!((0.0..=1.0).contains(&normalized.confidence));
        if normalized.event_type == vigil_core::EventType::UnclassifiedAnomaly {
            prop_assert!(normalized.confidence < 0.5);
        }
    }
}

/// Metrics extracted once survive re-normalization byte for byte.
#[test]
fn metric_extraction_is_stable() {
    let mut payload = BTreeMap::new();
    payload.insert("accuracyDrop".to_string(), serde_json::json!(0.12));
    payload.insert("psi".to_string(), serde_json::json!("0.44"));
    let event = fixed_event("model_drift".to_string(), "psi".to_string(), None, payload);

    let normalizer = Normalizer::new();
    let first = normalizer.normalize(&event);
    let second = normalizer.normalize(&event);

    assert_eq!(first.metric("accuracy_drop"), Some(0.12));
    assert_eq!(first.metric("drift_score"), Some(0.44));
    assert_eq!(first.metrics, second.metrics);
}
