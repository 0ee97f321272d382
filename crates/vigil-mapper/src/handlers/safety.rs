//! Safety handlers: hallucination, unsafe recommendation, diagnostic
//! error, missed critical finding.
//!
//! Clinical-accuracy failures (diagnostic error, missed finding) and
//! unsafe recommendations are always emitted at critical severity — the
//! magnitude of the underlying metric does not soften a direct
//! patient-safety risk.

use vigil_core::{ComplianceViolation, Framework, Severity};

use crate::handlers::{resolve, Emit, MapCtx};
use crate::rules;

/// Fabricated clinical content in generated output.
pub fn hallucination_detected(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let description = format!(
        "Fabricated clinical content detected in output from {}",
        ctx.system.summary()
    );

    let mut violations = resolve(
        ctx,
        Emit::plain(
            Framework::NistAiRmf,
            &[rules::NIST_SAFETY],
            description.clone(),
        ),
    );
    if ctx.system.is_fda_regulated() {
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

/// Output recommending a contraindicated or unsafe intervention.
pub fn unsafe_recommendation(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let description = "Output recommended a contraindicated or unsafe intervention".to_string();
    emit_critical_safety(ctx, rules::NIST_SAFETY, description)
}

/// Diagnostic output contradicted by ground-truth review.
pub fn diagnostic_error(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let description = format!(
        "Diagnostic output from {} contradicted by ground-truth review",
        ctx.system.summary()
    );
    emit_critical_safety(ctx, rules::NIST_VALIDITY, description)
}

/// A critical finding present in the input was not surfaced.
pub fn missed_critical_finding(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let description = "A critical finding present in the input was not surfaced".to_string();
    emit_critical_safety(ctx, rules::NIST_SAFETY, description)
}

/// Shared emission for the always-critical safety events: the NIST
/// control at critical severity, plus an FDA device report for regulated
/// systems.
fn emit_critical_safety(
    ctx: &MapCtx<'_>,
    nist_control: rules::StaticControl,
    description: String,
) -> Vec<ComplianceViolation> {
    let mut violations = resolve(
        ctx,
        Emit {
            framework: Framework::NistAiRmf,
            statics: &[nist_control],
            description: description.clone(),
            severity_override: None,
            escalate_floor: Some(Severity::Critical),
        },
    );
    if ctx.system.is_fda_regulated() {
        violations.extend(resolve(
            ctx,
            Emit {
                framework: Framework::FdaSamd,
                statics: &[rules::FDA_DEVICE_REPORTING],
                description,
                severity_override: None,
                escalate_floor: Some(Severity::Critical),
            },
        ));
    }
    violations
}
