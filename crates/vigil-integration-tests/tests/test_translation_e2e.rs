//! End-to-end translation scenarios through the full pipeline:
//! raw telemetry in, translated event out.

mod common;

use std::sync::Arc;

use common::{context, engine_with_registry, init_tracing, raw_event};
use vigil_core::{metric, EventType, Framework, RiskLevel, Severity, SystemId};
use vigil_engine::{EscalationRole, InMemorySystemRegistry};

/// The PHI breach scenario: 50 exposed entities on a non-FDA,
/// non-California system.
#[test]
fn phi_exposure_end_to_end() {
    init_tracing();
    let registry = Arc::new(InMemorySystemRegistry::new());
    let system_id = SystemId::new();
    registry.insert(context(system_id, "Care Coordination", "TX"));
    let engine = engine_with_registry(registry);

    let event = raw_event(
        system_id,
        "phi_exposure",
        &[(metric::PHI_EXPOSURE_COUNT, 50.0)],
    );
    let translated = engine.translate(&event).unwrap();

    // Classification.
    assert_eq!(translated.normalized.event_type, EventType::PhiExposure);
    assert_eq!(translated.normalized.severity, Severity::Critical);
    assert_eq!(
        translated.normalized.metric(metric::PHI_EXPOSURE_COUNT),
        Some(50.0)
    );

    // Exactly two HIPAA violations: breach notification + security
    // management review.
    let hipaa: Vec<_> = translated
        .violations
        .iter()
        .filter(|v| v.framework == Framework::Hipaa)
        .collect();
    assert_eq!(hipaa.len(), 2);
    assert!(hipaa.iter().any(|v| v.control_id == "164.402"));
    assert!(hipaa.iter().any(|v| v.control_id == "164.308(a)(1)"));

    // At least one NIST AI RMF violation rides along.
    assert!(translated
        .violations
        .iter()
        .any(|v| v.framework == Framework::NistAiRmf));

    // Non-California system: no state breach law.
    assert!(translated
        .violations
        .iter()
        .all(|v| v.framework != Framework::CaliforniaBreach));

    // Breach notification reporting window.
    let breach = translated
        .violations
        .iter()
        .find(|v| v.control_id == "164.402")
        .unwrap();
    assert!(breach.requires_reporting);
    let deadline = breach.reporting_deadline.unwrap();
    assert!(deadline <= event.observed_at.plus_days(60));

    // Risk and escalation.
    assert_eq!(translated.risk.level, RiskLevel::Critical);
    assert!(translated.risk.score >= 10);
    assert!(translated.escalation_required);
    assert_eq!(
        translated.escalation_path.first(),
        Some(&EscalationRole::PrivacyOfficer)
    );
}

/// The within-tolerance drift scenario: accuracy drop below the medium
/// breakpoint yields a clean translation.
#[test]
fn tolerable_drift_end_to_end() {
    init_tracing();
    let registry = Arc::new(InMemorySystemRegistry::new());
    let system_id = SystemId::new();
    registry.insert(context(system_id, "Oncology", "TX"));
    let engine = engine_with_registry(registry);

    let event = raw_event(system_id, "model_drift", &[(metric::ACCURACY_DROP, 0.04)]);
    let translated = engine.translate(&event).unwrap();

    assert_eq!(translated.normalized.event_type, EventType::ModelDrift);
    assert!(translated.violations.is_empty());
    assert_eq!(translated.risk.level, RiskLevel::Low);
    assert_eq!(translated.risk.score, 0);
    assert!(!translated.escalation_required);
    assert!(translated.actions.is_empty());
}

/// FDA gating: the same accuracy drop produces an FDA violation on an
/// imaging system and none on a billing system.
#[test]
fn fda_violation_gated_on_regulated_context() {
    init_tracing();
    let registry = Arc::new(InMemorySystemRegistry::new());
    let imaging_id = SystemId::new();
    let billing_id = SystemId::new();
    registry.insert(context(imaging_id, "Imaging", "TX"));
    registry.insert(context(billing_id, "Billing", "TX"));
    let engine = engine_with_registry(registry);

    let payload = [(metric::ACCURACY_DROP, 0.08)];

    let imaging = engine
        .translate(&raw_event(imaging_id, "accuracy_degradation", &payload))
        .unwrap();
    let fda = imaging
        .violations
        .iter()
        .find(|v| v.framework == Framework::FdaSamd)
        .expect("imaging system must carry an FDA violation");
    assert!(fda.requires_reporting);
    assert!(fda.reporting_deadline.unwrap() <= imaging.normalized.observed_at.plus_days(30));
    // FDA in the set (with no PHI breach): compliance-led escalation path.
    assert_eq!(
        imaging.escalation_path.first(),
        Some(&EscalationRole::ChiefComplianceOfficer)
    );

    let billing = engine
        .translate(&raw_event(billing_id, "accuracy_degradation", &payload))
        .unwrap();
    assert!(billing
        .violations
        .iter()
        .all(|v| v.framework != Framework::FdaSamd));
}

/// California systems pick up the state breach law on PHI exposure.
#[test]
fn california_breach_law_applies_by_jurisdiction() {
    init_tracing();
    let registry = Arc::new(InMemorySystemRegistry::new());
    let system_id = SystemId::new();
    registry.insert(context(system_id, "Care Coordination", "CA"));
    let engine = engine_with_registry(registry);

    let event = raw_event(
        system_id,
        "phi_exposure",
        &[(metric::PHI_EXPOSURE_COUNT, 3.0)],
    );
    let translated = engine.translate(&event).unwrap();

    let ca = translated
        .violations
        .iter()
        .find(|v| v.framework == Framework::CaliforniaBreach)
        .expect("California system must carry the state breach violation");
    assert!(ca.reporting_deadline.unwrap() <= event.observed_at.plus_days(30));
}

/// Reporting actions never outrun their violation's reporting deadline.
#[test]
fn notify_deadlines_bounded_by_reporting_deadlines() {
    init_tracing();
    let registry = Arc::new(InMemorySystemRegistry::new());
    let system_id = SystemId::new();
    registry.insert(context(system_id, "Imaging", "CA"));
    let engine = engine_with_registry(registry);

    let event = raw_event(
        system_id,
        "phi_exposure",
        &[(metric::PHI_EXPOSURE_COUNT, 12.0)],
    );
    let translated = engine.translate(&event).unwrap();

    for violation in translated
        .violations
        .iter()
        .filter(|v| v.requires_reporting)
    {
        let actions = translated
            .action_plan
            .actions_for(violation.violation_id)
            .unwrap();
        let notify = actions
            .iter()
            .find(|a| a.action_type == vigil_core::ActionType::Notify)
            .expect("reporting violation must yield a notify action");
        assert!(
            notify.deadline <= violation.reporting_deadline.unwrap(),
            "notify deadline exceeds the reporting window for {}",
            violation.control_id
        );
    }
}

/// A legacy connector name lands on the canonical event type end to end.
#[test]
fn legacy_event_names_translate_identically() {
    init_tracing();
    let registry = Arc::new(InMemorySystemRegistry::new());
    let system_id = SystemId::new();
    registry.insert(context(system_id, "Care Coordination", "TX"));
    let engine = engine_with_registry(registry);

    let canonical = engine
        .translate(&raw_event(
            system_id,
            "phi_exposure",
            &[(metric::PHI_EXPOSURE_COUNT, 5.0)],
        ))
        .unwrap();
    let legacy = engine
        .translate(&raw_event(
            system_id,
            "phi_leak",
            &[(metric::PHI_EXPOSURE_COUNT, 5.0)],
        ))
        .unwrap();

    assert_eq!(
        canonical.normalized.event_type,
        legacy.normalized.event_type
    );
    assert_eq!(canonical.violations.len(), legacy.violations.len());
}
