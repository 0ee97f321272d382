//! # Handler Registry & Shared Handler Machinery
//!
//! One handler per standardized event type, registered in a single lookup
//! table so taxonomy coverage is testable in isolation. Handlers are pure
//! functions of the [`MapCtx`]: they hold no state and perform no I/O
//! beyond policy resolution through the injected loader.

pub mod fairness;
pub mod performance;
pub mod privacy;
pub mod quality;
pub mod safety;
pub mod security;

use std::collections::HashMap;

use vigil_core::{
    AISystemContext, ComplianceViolation, EventType, Framework, NormalizedEvent, RuleSource,
    Severity, ViolationId,
};
use vigil_policy::{PolicyLoader, PolicyOutcome};

use crate::rules::StaticControl;
use crate::thresholds::ThresholdSet;

/// Everything a handler may consult while mapping one event.
pub struct MapCtx<'a> {
    /// The normalized event being mapped.
    pub event: &'a NormalizedEvent,
    /// Context snapshot of the monitored system.
    pub system: &'a AISystemContext,
    /// The owning health system's threshold configuration.
    pub thresholds: &'a ThresholdSet,
    /// Policy resolution (two-tier: versioned store, then static rules).
    pub loader: &'a PolicyLoader,
}

/// A compliance handler for one event type.
pub type Handler = for<'a> fn(&MapCtx<'a>) -> Vec<ComplianceViolation>;

/// One framework emission from a handler.
///
/// `severity_override` carries a threshold-derived tier; it replaces the
/// static rule's baseline severity but never a resolved policy's severity
/// (policy fields are used verbatim). `escalate_floor` is applied on both
/// paths as a lower bound — PHI and clinical-accuracy violations are
/// always critical regardless of magnitude.
pub struct Emit<'a> {
    /// Target framework.
    pub framework: Framework,
    /// Static fallback controls for this framework and event type.
    pub statics: &'a [StaticControl],
    /// Event-specific description substituted into each violation.
    pub description: String,
    /// Threshold-derived severity for the static path.
    pub severity_override: Option<Severity>,
    /// Minimum severity applied on both resolution paths.
    pub escalate_floor: Option<Severity>,
}

impl<'a> Emit<'a> {
    /// An emission with no severity adjustments.
    pub fn plain(
        framework: Framework,
        statics: &'a [StaticControl],
        description: String,
    ) -> Self {
        Self {
            framework,
            statics,
            description,
            severity_override: None,
            escalate_floor: None,
        }
    }
}

/// Resolve one framework emission into violations.
///
/// Two-tier strategy: if the loader yields an active versioned policy,
/// its control entries are used verbatim (only the description and the
/// affected-system summary are event-specific). Otherwise the embedded
/// static controls are used, tagged with the fallback reason.
pub fn resolve(ctx: &MapCtx<'_>, emit: Emit<'_>) -> Vec<ComplianceViolation> {
    let apply_floor = |severity: Severity| match emit.escalate_floor {
        Some(floor) => severity.max(floor),
        None => severity,
    };

    match ctx.loader.get_policy(ctx.event.event_type, emit.framework) {
        PolicyOutcome::Loaded(bundle) => {
            let source = RuleSource::Policy {
                version: bundle.version.clone(),
            };
            bundle
                .controls
                .iter()
                .map(|control| ComplianceViolation {
                    violation_id: ViolationId::new(),
                    framework: emit.framework,
                    control_id: control.control_id.clone(),
                    control_name: control.control_name.clone(),
                    violation_type: control.violation_type,
                    severity: apply_floor(control.severity),
                    requires_reporting: control.requires_reporting,
                    reporting_deadline: control
                        .reporting_deadline_days
                        .map(|days| ctx.event.observed_at.plus_days(days)),
                    description: emit.description.clone(),
                    affected_system: ctx.system.summary(),
                    system_id: ctx.system.system_id,
                    detected_at: ctx.event.observed_at,
                    rule_source: source.clone(),
                })
                .collect()
        }
        PolicyOutcome::Absent(reason) => emit
            .statics
            .iter()
            .map(|control| ComplianceViolation {
                violation_id: ViolationId::new(),
                framework: emit.framework,
                control_id: control.control_id.to_string(),
                control_name: control.control_name.to_string(),
                violation_type: control.violation_type,
                severity: apply_floor(
                    emit.severity_override.unwrap_or(control.severity),
                ),
                requires_reporting: control.requires_reporting,
                reporting_deadline: control
                    .reporting_deadline_days
                    .map(|days| ctx.event.observed_at.plus_days(days)),
                description: emit.description.clone(),
                affected_system: ctx.system.summary(),
                system_id: ctx.system.system_id,
                detected_at: ctx.event.observed_at,
                rule_source: RuleSource::StaticFallback { reason },
            })
            .collect(),
    }
}

/// The handler lookup table covering all 20 event types.
///
/// Built in one place so a single test can verify taxonomy coverage.
pub struct HandlerRegistry {
    handlers: HashMap<EventType, Handler>,
}

impl HandlerRegistry {
    /// The standard registry: every event type mapped to its handler.
    pub fn standard() -> Self {
        let mut handlers: HashMap<EventType, Handler> = HashMap::new();
        // Privacy
        handlers.insert(EventType::PhiExposure, privacy::phi_exposure as Handler);
        handlers.insert(
            EventType::DataRetentionViolation,
            privacy::data_retention_violation as Handler,
        );
        handlers.insert(
            EventType::ConsentViolation,
            privacy::consent_violation as Handler,
        );
        // Security
        handlers.insert(
            EventType::UnauthorizedAccess,
            security::unauthorized_access as Handler,
        );
        handlers.insert(
            EventType::PromptInjection,
            security::prompt_injection as Handler,
        );
        handlers.insert(
            EventType::CredentialMisuse,
            security::credential_misuse as Handler,
        );
        // Performance
        handlers.insert(EventType::ModelDrift, performance::model_drift as Handler);
        handlers.insert(
            EventType::AccuracyDegradation,
            performance::accuracy_degradation as Handler,
        );
        handlers.insert(EventType::LatencySpike, performance::latency_spike as Handler);
        handlers.insert(
            EventType::ErrorRateSpike,
            performance::error_rate_spike as Handler,
        );
        // Safety
        handlers.insert(
            EventType::HallucinationDetected,
            safety::hallucination_detected as Handler,
        );
        handlers.insert(
            EventType::UnsafeRecommendation,
            safety::unsafe_recommendation as Handler,
        );
        handlers.insert(EventType::DiagnosticError, safety::diagnostic_error as Handler);
        handlers.insert(
            EventType::MissedCriticalFinding,
            safety::missed_critical_finding as Handler,
        );
        // Fairness
        handlers.insert(
            EventType::DemographicDisparity,
            fairness::demographic_disparity as Handler,
        );
        handlers.insert(
            EventType::EqualizedOddsViolation,
            fairness::equalized_odds_violation as Handler,
        );
        handlers.insert(
            EventType::EmploymentScreeningBias,
            fairness::employment_screening_bias as Handler,
        );
        // Quality
        handlers.insert(
            EventType::DataQualityIssue,
            quality::data_quality_issue as Handler,
        );
        handlers.insert(
            EventType::OutputFormatAnomaly,
            quality::output_format_anomaly as Handler,
        );
        handlers.insert(
            EventType::UnclassifiedAnomaly,
            quality::unclassified_anomaly as Handler,
        );
        Self { handlers }
    }

    /// Look up the handler for an event type.
    pub fn handler_for(&self, event_type: EventType) -> Option<Handler> {
        self.handlers.get(&event_type).copied()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
