//! # vigil-normalizer — Event Normalizer
//!
//! Maps raw vendor telemetry onto the standardized 20-type taxonomy.
//! Normalization never fails: unmatched input yields a low-confidence
//! [`EventType::UnclassifiedAnomaly`] rather than an error, keeping the
//! translation pipeline total.
//!
//! ## Determinism
//!
//! [`Normalizer::normalize`] is a pure function of its input — no I/O, no
//! history, no clock reads. Identical raw events produce identical
//! normalized events, so re-delivered telemetry classifies identically.

pub mod metrics;
pub mod patterns;

use tracing::debug;

use vigil_core::{EventCategory, EventType, NormalizedEvent, RawTelemetryEvent, Severity};

use crate::patterns::classify;

/// Confidence assigned to the unmatched fallback classification.
/// Kept below 0.5 so downstream consumers can distinguish pattern-backed
/// classifications from guesses.
pub const FALLBACK_CONFIDENCE: f64 = 0.42;

/// The Event Normalizer.
///
/// Stateless; constructed explicitly and injected into the translation
/// engine rather than living as module state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Create a normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize a raw telemetry event. Total: never fails.
    ///
    /// 1. Classify `(raw_event_type, raw_metric)` against the ordered
    ///    pattern table; first match fixes the type, default severity,
    ///    and confidence tier.
    /// 2. Extract standard numeric metrics from the payload.
    /// 3. For performance-category events, derive severity from the
    ///    extracted metric via fixed breakpoints, overriding the pattern
    ///    default when the metric is available.
    /// 4. On no match: fallback type, severity from the raw hint (else
    ///    `medium`), confidence below 0.5.
    pub fn normalize(&self, raw: &RawTelemetryEvent) -> NormalizedEvent {
        let extracted = metrics::extract_metrics(&raw.payload);

        let (event_type, severity, confidence) =
            match classify(&raw.raw_event_type, &raw.raw_metric) {
                Some(m) => {
                    let mut severity = m.rule.default_severity;
                    if m.rule.event_type.category() == EventCategory::Performance {
                        if let Some(derived) =
                            performance_severity(m.rule.event_type, &extracted)
                        {
                            severity = derived;
                        }
                    }
                    (m.rule.event_type, severity, m.confidence)
                }
                None => {
                    debug!(
                        source = %raw.source_platform,
                        raw_event_type = %raw.raw_event_type,
                        raw_metric = %raw.raw_metric,
                        "no classification pattern matched; using fallback"
                    );
                    let severity = raw
                        .severity_hint
                        .as_deref()
                        .and_then(Severity::from_hint)
                        .unwrap_or(Severity::Medium);
                    (EventType::UnclassifiedAnomaly, severity, FALLBACK_CONFIDENCE)
                }
            };

        NormalizedEvent {
            event_type,
            severity,
            confidence,
            metrics: extracted,
            system_id: raw.system_id,
            observed_at: raw.observed_at,
        }
    }
}

/// Severity breakpoints for performance events, keyed off the extracted
/// metric. Returns `None` when the relevant metric is absent, in which
/// case the pattern default stands.
fn performance_severity(
    event_type: EventType,
    extracted: &std::collections::BTreeMap<String, f64>,
) -> Option<Severity> {
    let tier = |value: f64, medium: f64, high: f64, critical: f64| {
        if value > critical {
            Severity::Critical
        } else if value > high {
            Severity::High
        } else if value > medium {
            Severity::Medium
        } else {
            Severity::Low
        }
    };

    match event_type {
        EventType::ModelDrift => {
            let drift = extracted.get(metrics::DRIFT_SCORE)?;
            Some(tier(*drift, 0.3, 0.5, 0.7))
        }
        EventType::AccuracyDegradation => {
            let drop = extracted.get(metrics::ACCURACY_DROP)?;
            Some(tier(*drop, 0.05, 0.10, 0.15))
        }
        EventType::LatencySpike => {
            let pct = extracted.get(metrics::LATENCY_INCREASE_PCT)?;
            Some(tier(*pct, 25.0, 75.0, 150.0))
        }
        EventType::ErrorRateSpike => {
            let rate = extracted.get(metrics::ERROR_RATE)?;
            Some(tier(*rate, 0.05, 0.10, 0.25))
        }
        _ => None,
    }
}
