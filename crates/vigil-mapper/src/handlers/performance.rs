//! Performance handlers: drift, accuracy, latency, error rate.
//!
//! These are the threshold-gated handlers: whether a violation fires, and
//! at what severity, is decided by the owning health system's configured
//! breakpoints against the extracted metric. A missing metric fires
//! nothing — exceedance cannot be established without a measurement.

use vigil_core::{metric, ComplianceViolation, Framework, Severity};

use crate::handlers::{resolve, Emit, MapCtx};
use crate::rules;

/// Statistical drift between training and serving distributions.
///
/// Fires on the worse of the drift-score tier and the accuracy-drop tier.
/// FDA-regulated systems additionally owe a device report when the
/// accuracy drop crosses the FDA breakpoint or the drift tier reaches
/// high.
pub fn model_drift(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let drift = ctx.event.metric(metric::DRIFT_SCORE);
    let drop = ctx.event.metric(metric::ACCURACY_DROP);

    let drift_tier = drift.and_then(|v| ctx.thresholds.drift_score.tier(v));
    let drop_tier = drop.and_then(|v| ctx.thresholds.accuracy_drop.tier(v));
    let tier = match (drift_tier, drop_tier) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (tier, None) | (None, tier) => tier,
    };
    let Some(tier) = tier else {
        return Vec::new();
    };

    let description = match (drift, drop) {
        (Some(score), Some(d)) => format!(
            "Model drift detected: drift score {score:.2}, accuracy drop {d:.3}"
        ),
        (Some(score), None) => format!("Model drift detected: drift score {score:.2}"),
        (None, Some(d)) => format!("Model drift detected: accuracy drop {d:.3}"),
        (None, None) => unreachable!("tier requires at least one metric"),
    };

    let mut violations = resolve(
        ctx,
        Emit {
            framework: Framework::NistAiRmf,
            statics: &[rules::NIST_DRIFT_MONITORING],
            description: description.clone(),
            severity_override: Some(tier),
            escalate_floor: None,
        },
    );

    if fda_report_due(ctx, drop, tier) {
        violations.extend(resolve(
            ctx,
            Emit::plain(
                Framework::FdaSamd,
                &[rules::FDA_DEVICE_REPORTING],
                description,
            ),
        ));
    }
    violations
}

/// Drop in model accuracy against the validation baseline.
pub fn accuracy_degradation(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let drop = ctx.event.metric(metric::ACCURACY_DROP);
    let Some(tier) = drop.and_then(|v| ctx.thresholds.accuracy_drop.tier(v)) else {
        return Vec::new();
    };
    // drop is present whenever a tier exists
    let drop_value = drop.unwrap_or_default();

    let description = format!("Accuracy dropped {drop_value:.3} below the validation baseline");

    let mut violations = resolve(
        ctx,
        Emit {
            framework: Framework::NistAiRmf,
            statics: &[rules::NIST_VALIDITY],
            description: description.clone(),
            severity_override: Some(tier),
            escalate_floor: None,
        },
    );

    if fda_report_due(ctx, drop, tier) {
        violations.extend(resolve(
            ctx,
            Emit::plain(
                Framework::FdaSamd,
                &[rules::FDA_DEVICE_REPORTING],
                description,
            ),
        ));
    }
    violations
}

/// Inference latency above the service objective.
pub fn latency_spike(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let pct = ctx.event.metric(metric::LATENCY_INCREASE_PCT);
    let Some(tier) = pct.and_then(|v| ctx.thresholds.latency_increase_pct.tier(v)) else {
        return Vec::new();
    };
    let pct_value = pct.unwrap_or_default();

    resolve(
        ctx,
        Emit {
            framework: Framework::Iso42001,
            statics: &[rules::ISO_OPERATIONAL_CONTROL],
            description: format!("Inference latency up {pct_value:.0}% over the service objective"),
            severity_override: Some(tier),
            escalate_floor: None,
        },
    )
}

/// Elevated inference error or timeout rate.
pub fn error_rate_spike(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let rate = ctx.event.metric(metric::ERROR_RATE);
    let Some(tier) = rate.and_then(|v| ctx.thresholds.error_rate.tier(v)) else {
        return Vec::new();
    };
    let rate_value = rate.unwrap_or_default();
    let description = format!("Inference error rate at {:.1}%", rate_value * 100.0);

    let mut violations = resolve(
        ctx,
        Emit {
            framework: Framework::NistAiRmf,
            statics: &[rules::NIST_INCIDENT_RESPONSE],
            description: description.clone(),
            severity_override: Some(tier),
            escalate_floor: None,
        },
    );

    if ctx.system.is_fda_regulated() && tier >= Severity::High {
        violations.extend(resolve(
            ctx,
            Emit::plain(
                Framework::FdaSamd,
                &[rules::FDA_DEVICE_REPORTING],
                description,
            ),
        ));
    }
    violations
}

/// Whether an FDA device report is due for a performance change.
fn fda_report_due(ctx: &MapCtx<'_>, accuracy_drop: Option<f64>, tier: Severity) -> bool {
    ctx.system.is_fda_regulated()
        && (accuracy_drop.is_some_and(|d| d > ctx.thresholds.fda_accuracy_drop)
            || tier >= Severity::High)
}
