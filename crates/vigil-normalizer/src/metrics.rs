//! # Metric Extraction
//!
//! Pulls standardized numeric metrics out of vendor payloads. Each
//! standard metric name has an ordered candidate-key list; the first key
//! present with a parseable numeric value wins. Vendors disagree on
//! casing and naming, so both snake_case and camelCase spellings appear,
//! plus the metric names emitted by the fairness and PHI scanning
//! services.
//!
//! Absent metrics stay absent — never defaulted to zero. A zero value is
//! a valid, different signal (e.g. `accuracy_drop: 0.0` means "measured,
//! no drop", while absence means "not measured").

use std::collections::BTreeMap;

use serde_json::Value;

// The standard names live in vigil-core (shared with the mapper's
// threshold handlers); re-exported here next to the extraction logic.
pub use vigil_core::metric::{
    ACCURACY_DROP, DEMOGRAPHIC_VARIANCE, DRIFT_SCORE, EQUALIZED_ODDS_DIFFERENCE, ERROR_RATE,
    LATENCY_INCREASE_PCT, LATENCY_MS, PHI_EXPOSURE_COUNT, RISK_SCORE,
};

/// Ordered candidate payload keys per standard metric name.
const METRIC_CANDIDATES: &[(&str, &[&str])] = &[
    (
        ACCURACY_DROP,
        &["accuracy_drop", "accuracyDrop", "delta_accuracy", "accuracy_delta"],
    ),
    (
        DRIFT_SCORE,
        &["drift_score", "driftScore", "psi", "population_stability_index"],
    ),
    (
        LATENCY_INCREASE_PCT,
        &["latency_increase_pct", "latencyIncreasePct", "latency_delta_pct"],
    ),
    (LATENCY_MS, &["latency_ms", "latencyMs", "p99_latency_ms"]),
    (ERROR_RATE, &["error_rate", "errorRate", "failure_rate"]),
    (
        DEMOGRAPHIC_VARIANCE,
        &[
            "demographic_variance",
            "demographicVariance",
            "demographic_parity_difference",
        ],
    ),
    (
        EQUALIZED_ODDS_DIFFERENCE,
        &["equalized_odds_difference", "equalizedOddsDifference"],
    ),
    (
        PHI_EXPOSURE_COUNT,
        &["phi_exposure_count", "phiExposureCount", "phi_count"],
    ),
    (RISK_SCORE, &["risk_score", "riskScore"]),
];

/// Parse a payload value as a finite f64.
///
/// Accepts JSON numbers and numeric strings (connectors frequently stringify
/// metrics). Non-finite values are rejected.
fn parse_numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Extract all standard metrics present in a vendor payload.
///
/// For each standard metric, the candidate keys are tried in order and the
/// first parseable numeric value is taken. Metrics with no present
/// candidate are simply not in the returned map.
pub fn extract_metrics(payload: &BTreeMap<String, Value>) -> BTreeMap<String, f64> {
    let mut metrics = BTreeMap::new();
    for (standard_name, candidates) in METRIC_CANDIDATES {
        for key in *candidates {
            if let Some(value) = payload.get(*key).and_then(parse_numeric) {
                metrics.insert((*standard_name).to_string(), value);
                break;
            }
        }
    }
    metrics
}
