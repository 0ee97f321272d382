//! # Configurable Thresholds
//!
//! Per-health-system numeric breakpoints for threshold-gated handlers.
//! The defaults here are the reference breakpoints; health systems
//! override them through the external threshold source.
//!
//! A metric at or below the `medium` breakpoint fires no violation at
//! all — breakpoints are strict lower bounds, so `accuracy_drop == 0.05`
//! with a 0.05 medium breakpoint is still within tolerance.

use serde::{Deserialize, Serialize};

use vigil_core::{HealthSystemId, Severity};

/// Strict lower-bound breakpoints for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Above this: medium severity.
    pub medium: f64,
    /// Above this: high severity.
    pub high: f64,
    /// Above this: critical severity.
    pub critical: f64,
}

impl TierThresholds {
    /// Classify a metric value. `None` means within tolerance — no
    /// violation fires.
    pub fn tier(&self, value: f64) -> Option<Severity> {
        if value > self.critical {
            Some(Severity::Critical)
        } else if value > self.high {
            Some(Severity::High)
        } else if value > self.medium {
            Some(Severity::Medium)
        } else {
            None
        }
    }
}

/// The full threshold configuration for one health system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// Accuracy drop against validation baseline.
    pub accuracy_drop: TierThresholds,
    /// Drift score (PSI or vendor equivalent).
    pub drift_score: TierThresholds,
    /// Latency increase percentage over the service objective.
    pub latency_increase_pct: TierThresholds,
    /// Inference error rate.
    pub error_rate: TierThresholds,
    /// Outcome variance across demographic groups.
    pub demographic_variance: TierThresholds,
    /// Equalized-odds difference.
    pub equalized_odds_difference: TierThresholds,
    /// Accuracy drop above which an FDA-regulated system must file a
    /// device report (strict lower bound).
    pub fda_accuracy_drop: f64,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            accuracy_drop: TierThresholds {
                medium: 0.05,
                high: 0.10,
                critical: 0.15,
            },
            drift_score: TierThresholds {
                medium: 0.3,
                high: 0.5,
                critical: 0.7,
            },
            latency_increase_pct: TierThresholds {
                medium: 25.0,
                high: 75.0,
                critical: 150.0,
            },
            error_rate: TierThresholds {
                medium: 0.05,
                high: 0.10,
                critical: 0.25,
            },
            demographic_variance: TierThresholds {
                medium: 0.10,
                high: 0.20,
                critical: 0.30,
            },
            equalized_odds_difference: TierThresholds {
                medium: 0.10,
                high: 0.20,
                critical: 0.30,
            },
            fda_accuracy_drop: 0.05,
        }
    }
}

/// The external per-health-system threshold configuration source.
///
/// Infallible by contract: implementations return the built-in defaults
/// for unknown health systems rather than failing the translation.
pub trait ThresholdSource: Send + Sync {
    /// Thresholds for the given health system.
    fn get_thresholds(&self, health_system_id: &HealthSystemId) -> ThresholdSet;
}

/// A threshold source that returns one fixed set for every health system.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticThresholds(
    /// The set returned for every health system.
    pub ThresholdSet,
);

impl ThresholdSource for StaticThresholds {
    fn get_thresholds(&self, _health_system_id: &HealthSystemId) -> ThresholdSet {
        self.0
    }
}
