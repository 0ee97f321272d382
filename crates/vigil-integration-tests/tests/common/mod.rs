//! Shared builders for cross-crate integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use vigil_core::{
    AISystemContext, HealthSystemId, RawTelemetryEvent, RiskTier, StateCode, SystemId, Timestamp,
    VendorId,
};
use vigil_engine::{InMemorySystemRegistry, TranslationEngine};
use vigil_mapper::StaticThresholds;
use vigil_policy::{InMemoryPolicyStore, PolicyLoader};

/// Install a fmt subscriber so `RUST_LOG`-filtered runs show pipeline
/// stages. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A registered system context with the given department and state.
pub fn context(system_id: SystemId, department: &str, state: &str) -> AISystemContext {
    AISystemContext {
        system_id,
        name: format!("{department} Assistant"),
        department: department.to_string(),
        vendor_id: VendorId::new(),
        health_system_id: HealthSystemId::new(),
        jurisdiction: StateCode::new(state).unwrap(),
        risk_tier: RiskTier::Moderate,
    }
}

/// A raw telemetry event with numeric payload entries.
pub fn raw_event(
    system_id: SystemId,
    raw_event_type: &str,
    payload: &[(&str, f64)],
) -> RawTelemetryEvent {
    RawTelemetryEvent {
        source_platform: "arize".to_string(),
        raw_event_type: raw_event_type.to_string(),
        raw_metric: String::new(),
        severity_hint: None,
        payload: payload
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
            .collect::<BTreeMap<_, _>>(),
        system_id,
        observed_at: Timestamp::now(),
    }
}

/// An engine over an empty policy store (every resolution falls back to
/// the static rules) and the given registry.
pub fn engine_with_registry(registry: Arc<InMemorySystemRegistry>) -> TranslationEngine {
    TranslationEngine::new(
        registry,
        Arc::new(StaticThresholds::default()),
        Arc::new(PolicyLoader::new(Arc::new(InMemoryPolicyStore::new()))),
    )
}

/// An engine over a seeded policy store.
pub fn engine_with_store(
    registry: Arc<InMemorySystemRegistry>,
    store: InMemoryPolicyStore,
) -> TranslationEngine {
    TranslationEngine::new(
        registry,
        Arc::new(StaticThresholds::default()),
        Arc::new(PolicyLoader::new(Arc::new(store))),
    )
}
