//! # Standard Metric Names
//!
//! The shared vocabulary for keys in [`NormalizedEvent::metrics`]
//! (see [`crate::event::NormalizedEvent`]). The normalizer writes these
//! keys; the mapper's threshold-gated handlers read them. One definition
//! so the two sides cannot drift apart.

/// Accuracy drop against the validation baseline.
pub const ACCURACY_DROP: &str = "accuracy_drop";
/// Drift score (PSI or vendor equivalent).
pub const DRIFT_SCORE: &str = "drift_score";
/// Latency increase percentage over the service objective.
pub const LATENCY_INCREASE_PCT: &str = "latency_increase_pct";
/// Absolute latency in milliseconds.
pub const LATENCY_MS: &str = "latency_ms";
/// Inference error rate.
pub const ERROR_RATE: &str = "error_rate";
/// Outcome variance across demographic groups.
pub const DEMOGRAPHIC_VARIANCE: &str = "demographic_variance";
/// Equalized-odds difference.
pub const EQUALIZED_ODDS_DIFFERENCE: &str = "equalized_odds_difference";
/// Count of PHI entities exposed.
pub const PHI_EXPOSURE_COUNT: &str = "phi_exposure_count";
/// Scanner-reported risk score.
pub const RISK_SCORE: &str = "risk_score";
