//! Quality handlers: data quality, output format, and the unclassified
//! fallback.

use tracing::debug;

use vigil_core::{ComplianceViolation, Framework};

use crate::handlers::{resolve, Emit, MapCtx};
use crate::rules;

/// Input data quality below the accepted profile.
pub fn data_quality_issue(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    resolve(
        ctx,
        Emit::plain(
            Framework::Iso42001,
            &[rules::ISO_DATA_QUALITY],
            format!(
                "Input data quality below the accepted profile for {}",
                ctx.system.summary()
            ),
        ),
    )
}

/// Model output failed schema or format validation.
pub fn output_format_anomaly(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    resolve(
        ctx,
        Emit::plain(
            Framework::Iso42001,
            &[rules::ISO_VERIFICATION],
            "Model output failed schema or format validation".to_string(),
        ),
    )
}

/// Telemetry that matched no known classification pattern.
///
/// Low-confidence by construction; no control can be attributed, so no
/// violations are emitted. The event still flows through the pipeline so
/// the caller can persist it for triage.
pub fn unclassified_anomaly(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    debug!(
        system_id = %ctx.event.system_id,
        confidence = ctx.event.confidence,
        "unclassified telemetry; no violations attributable"
    );
    Vec::new()
}
