//! # Standardized Event Taxonomy — Single Source of Truth
//!
//! Defines the [`EventType`] enum with all 20 variants across the 6
//! monitoring categories, plus [`Severity`] and the raw/normalized event
//! records. This is the single taxonomy used by every crate in the
//! workspace. The Rust compiler enforces exhaustive `match` — adding a new
//! event type forces every mapper handler registration and every
//! classification path to address it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identity::SystemId;
use crate::temporal::Timestamp;

// ---------------------------------------------------------------------------
// EventCategory
// ---------------------------------------------------------------------------

/// The monitoring category a standardized event type belongs to.
///
/// Categories are ordered by classification precedence: when a raw event
/// matches patterns in more than one category, the earlier category wins
/// (privacy first, quality last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Protected health information handling (exposure, retention, consent).
    Privacy,
    /// Access control and input integrity (unauthorized use, injection).
    Security,
    /// Model performance regressions (drift, accuracy, latency, errors).
    Performance,
    /// Patient-safety-relevant output failures.
    Safety,
    /// Demographic fairness and bias findings.
    Fairness,
    /// Data and output quality issues, including the unclassified fallback.
    Quality,
}

impl EventCategory {
    /// Return all categories in classification precedence order.
    pub fn all() -> &'static [EventCategory] {
        &[
            Self::Privacy,
            Self::Security,
            Self::Performance,
            Self::Safety,
            Self::Fairness,
            Self::Quality,
        ]
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Privacy => "privacy",
            Self::Security => "security",
            Self::Performance => "performance",
            Self::Safety => "safety",
            Self::Fairness => "fairness",
            Self::Quality => "quality",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// EventType
// ---------------------------------------------------------------------------

/// A standardized AI-monitoring event type.
///
/// All 20 types from the translation taxonomy are included. Every `match`
/// on this enum must be exhaustive — no event type can be accidentally
/// ignored by a compliance handler.
///
/// Serde aliases carry the legacy connector names (e.g. `phi_leak`,
/// `model_degradation`) so historical telemetry deserializes onto the
/// same variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    // ─── Privacy ────────────────────────────────────────────────────
    /// Protected health information surfaced in model inputs or outputs.
    #[serde(alias = "phi_leak", alias = "phi_breach")]
    PhiExposure,
    /// Training or inference data retained beyond its permitted window.
    DataRetentionViolation,
    /// Patient data processed without a matching consent record.
    ConsentViolation,

    // ─── Security ───────────────────────────────────────────────────
    /// Access to the AI system outside granted roles or scopes.
    #[serde(alias = "access_violation")]
    UnauthorizedAccess,
    /// Adversarial prompt content detected in model input.
    PromptInjection,
    /// Service credentials used from an unexpected context.
    CredentialMisuse,

    // ─── Performance ────────────────────────────────────────────────
    /// Statistical drift between training and serving distributions.
    #[serde(alias = "data_drift", alias = "concept_drift")]
    ModelDrift,
    /// Drop in model accuracy against the validation baseline.
    #[serde(alias = "model_degradation")]
    AccuracyDegradation,
    /// Inference latency above the service objective.
    LatencySpike,
    /// Elevated inference error or timeout rate.
    ErrorRateSpike,

    // ─── Safety ─────────────────────────────────────────────────────
    /// Fabricated clinical content in generated output.
    HallucinationDetected,
    /// Output recommending a contraindicated or unsafe intervention.
    UnsafeRecommendation,
    /// Diagnostic output contradicted by ground-truth review.
    DiagnosticError,
    /// A critical finding present in the input was not surfaced.
    MissedCriticalFinding,

    // ─── Fairness ───────────────────────────────────────────────────
    /// Outcome variance across demographic groups above tolerance.
    #[serde(alias = "bias_detected")]
    DemographicDisparity,
    /// Equalized-odds difference above tolerance.
    EqualizedOddsViolation,
    /// Bias finding in an employment-screening AI system.
    EmploymentScreeningBias,

    // ─── Quality ────────────────────────────────────────────────────
    /// Input data quality below the accepted profile.
    DataQualityIssue,
    /// Model output failed schema or format validation.
    OutputFormatAnomaly,
    /// Telemetry that matched no known classification pattern.
    #[serde(alias = "unknown")]
    UnclassifiedAnomaly,
}

impl EventType {
    /// Return all event types as a slice, grouped by category in
    /// classification precedence order.
    ///
    /// Useful when exhaustive coverage across the taxonomy is required
    /// (e.g. handler registration, cache warming).
    pub fn all() -> &'static [EventType] {
        &[
            Self::PhiExposure,
            Self::DataRetentionViolation,
            Self::ConsentViolation,
            Self::UnauthorizedAccess,
            Self::PromptInjection,
            Self::CredentialMisuse,
            Self::ModelDrift,
            Self::AccuracyDegradation,
            Self::LatencySpike,
            Self::ErrorRateSpike,
            Self::HallucinationDetected,
            Self::UnsafeRecommendation,
            Self::DiagnosticError,
            Self::MissedCriticalFinding,
            Self::DemographicDisparity,
            Self::EqualizedOddsViolation,
            Self::EmploymentScreeningBias,
            Self::DataQualityIssue,
            Self::OutputFormatAnomaly,
            Self::UnclassifiedAnomaly,
        ]
    }

    /// The total number of standardized event types.
    pub const COUNT: usize = 20;

    /// The category this event type belongs to.
    pub fn category(self) -> EventCategory {
        match self {
            Self::PhiExposure | Self::DataRetentionViolation | Self::ConsentViolation => {
                EventCategory::Privacy
            }
            Self::UnauthorizedAccess | Self::PromptInjection | Self::CredentialMisuse => {
                EventCategory::Security
            }
            Self::ModelDrift
            | Self::AccuracyDegradation
            | Self::LatencySpike
            | Self::ErrorRateSpike => EventCategory::Performance,
            Self::HallucinationDetected
            | Self::UnsafeRecommendation
            | Self::DiagnosticError
            | Self::MissedCriticalFinding => EventCategory::Safety,
            Self::DemographicDisparity
            | Self::EqualizedOddsViolation
            | Self::EmploymentScreeningBias => EventCategory::Fairness,
            Self::DataQualityIssue | Self::OutputFormatAnomaly | Self::UnclassifiedAnomaly => {
                EventCategory::Quality
            }
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PhiExposure => "phi_exposure",
            Self::DataRetentionViolation => "data_retention_violation",
            Self::ConsentViolation => "consent_violation",
            Self::UnauthorizedAccess => "unauthorized_access",
            Self::PromptInjection => "prompt_injection",
            Self::CredentialMisuse => "credential_misuse",
            Self::ModelDrift => "model_drift",
            Self::AccuracyDegradation => "accuracy_degradation",
            Self::LatencySpike => "latency_spike",
            Self::ErrorRateSpike => "error_rate_spike",
            Self::HallucinationDetected => "hallucination_detected",
            Self::UnsafeRecommendation => "unsafe_recommendation",
            Self::DiagnosticError => "diagnostic_error",
            Self::MissedCriticalFinding => "missed_critical_finding",
            Self::DemographicDisparity => "demographic_disparity",
            Self::EqualizedOddsViolation => "equalized_odds_violation",
            Self::EmploymentScreeningBias => "employment_screening_bias",
            Self::DataQualityIssue => "data_quality_issue",
            Self::OutputFormatAnomaly => "output_format_anomaly",
            Self::UnclassifiedAnomaly => "unclassified_anomaly",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Event and violation severity.
///
/// Ordered from least to most severe, so `Severity::High > Severity::Low`
/// holds and severity escalation can use `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational only; no compliance impact by itself.
    Info,
    /// Minor deviation within operating tolerance.
    Low,
    /// Deviation requiring review.
    Medium,
    /// Material deviation requiring investigation.
    High,
    /// Direct breach or patient-safety risk.
    Critical,
}

impl Severity {
    /// Parse a free-text severity hint from a telemetry connector.
    ///
    /// Returns `None` for unrecognized hints; callers supply their own
    /// default rather than guessing here.
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint.trim().to_ascii_lowercase().as_str() {
            "info" | "informational" => Some(Self::Info),
            "low" | "minor" => Some(Self::Low),
            "medium" | "moderate" | "warning" => Some(Self::Medium),
            "high" | "major" => Some(Self::High),
            "critical" | "severe" | "emergency" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// RawTelemetryEvent
// ---------------------------------------------------------------------------

/// An immutable raw telemetry event as emitted by a monitoring connector.
///
/// The event type and metric name are vendor free text; the payload is an
/// arbitrary JSON map. Raw events are never mutated — normalization derives
/// a [`NormalizedEvent`] once and the raw record is kept for audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTelemetryEvent {
    /// Identifier of the source monitoring platform (e.g. `arize`,
    /// `fiddler`, `datadog`, `custom_webhook`).
    pub source_platform: String,
    /// Vendor-specific event type string, uninterpreted.
    pub raw_event_type: String,
    /// Vendor-specific metric name string, uninterpreted.
    pub raw_metric: String,
    /// Optional severity hint supplied by the connector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity_hint: Option<String>,
    /// Arbitrary vendor payload.
    pub payload: BTreeMap<String, serde_json::Value>,
    /// The monitored AI system this event concerns.
    pub system_id: SystemId,
    /// When the source platform observed the event.
    pub observed_at: Timestamp,
}

// ---------------------------------------------------------------------------
// NormalizedEvent
// ---------------------------------------------------------------------------

/// The standardized classification of a [`RawTelemetryEvent`].
///
/// Derived exactly once per raw event. Normalization is a pure function of
/// the raw event: identical input produces an identical `NormalizedEvent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// The standardized event type.
    pub event_type: EventType,
    /// Derived severity.
    pub severity: Severity,
    /// Classification confidence in `[0, 1]`. Pattern matches score
    /// 0.83–0.96; the unmatched fallback scores below 0.5.
    pub confidence: f64,
    /// Numeric metrics extracted from the raw payload. Absent metrics are
    /// absent from the map — never defaulted to zero, since zero is a
    /// valid and different signal.
    pub metrics: BTreeMap<String, f64>,
    /// The monitored AI system this event concerns.
    pub system_id: SystemId,
    /// Observation time carried over from the raw event.
    pub observed_at: Timestamp,
}

impl NormalizedEvent {
    /// Look up an extracted metric by name.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_20_event_types() {
        assert_eq!(EventType::all().len(), EventType::COUNT);
    }

    #[test]
    fn all_event_types_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for &t in EventType::all() {
            assert!(seen.insert(t), "duplicate event type {t}");
        }
    }

    #[test]
    fn every_category_has_at_least_three_types() {
        for &cat in EventCategory::all() {
            let count = EventType::all()
                .iter()
                .filter(|t| t.category() == cat)
                .count();
            assert!(count >= 3, "category {cat} has only {count} types");
        }
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert!(Severity::Low > Severity::Info);
    }

    #[test]
    fn severity_hint_parsing() {
        assert_eq!(Severity::from_hint("CRITICAL"), Some(Severity::Critical));
        assert_eq!(Severity::from_hint(" warning "), Some(Severity::Medium));
        assert_eq!(Severity::from_hint("p1"), None);
        assert_eq!(Severity::from_hint(""), None);
    }

    #[test]
    fn serde_snake_case_and_aliases() {
        let t: EventType = serde_json::from_str("\"phi_exposure\"").unwrap();
        assert_eq!(t, EventType::PhiExposure);
        // Legacy connector name lands on the same variant.
        let legacy: EventType = serde_json::from_str("\"phi_leak\"").unwrap();
        assert_eq!(legacy, EventType::PhiExposure);
        let drift: EventType = serde_json::from_str("\"data_drift\"").unwrap();
        assert_eq!(drift, EventType::ModelDrift);
    }

    #[test]
    fn display_matches_serde_name() {
        for &t in EventType::all() {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{t}\""));
        }
    }

    #[test]
    fn serde_roundtrip_all_types() {
        for &t in EventType::all() {
            let json = serde_json::to_string(&t).unwrap();
            let back: EventType = serde_json::from_str(&json).unwrap();
            assert_eq!(t, back);
        }
    }
}
