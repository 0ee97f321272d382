//! Privacy handlers: PHI exposure, retention, consent.
//!
//! A PHI exposure is the one event that unconditionally emits a violation
//! pair under HIPAA — the breach notification itself plus a security
//! management review — and every violation it produces is critical
//! regardless of exposure magnitude.

use vigil_core::{metric, ComplianceViolation, Framework, Severity};

use crate::handlers::{resolve, Emit, MapCtx};
use crate::rules;

/// PHI surfaced in model inputs or outputs.
///
/// Emits the HIPAA breach pair, an incident-response violation under
/// NIST AI RMF, and — when the owning health system is in California —
/// the state breach notification on top.
pub fn phi_exposure(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let description = match ctx.event.metric(metric::PHI_EXPOSURE_COUNT) {
        Some(count) => format!(
            "Protected health information detected in model output: {} PHI entities",
            count as u64
        ),
        None => "Protected health information detected in model output".to_string(),
    };

    let mut violations = resolve(
        ctx,
        Emit {
            framework: Framework::Hipaa,
            statics: &[
                rules::HIPAA_BREACH_NOTIFICATION,
                rules::HIPAA_SECURITY_MANAGEMENT,
            ],
            description: description.clone(),
            severity_override: None,
            escalate_floor: Some(Severity::Critical),
        },
    );

    violations.extend(resolve(
        ctx,
        Emit {
            framework: Framework::NistAiRmf,
            statics: &[rules::NIST_INCIDENT_RESPONSE],
            description: description.clone(),
            severity_override: None,
            escalate_floor: Some(Severity::Critical),
        },
    ));

    if ctx.system.in_state("CA") {
        violations.extend(resolve(
            ctx,
            Emit {
                framework: Framework::CaliforniaBreach,
                statics: &[rules::CA_BREACH_NOTIFICATION],
                description,
                severity_override: None,
                escalate_floor: Some(Severity::Critical),
            },
        ));
    }

    violations
}

/// Data retained beyond its permitted window.
pub fn data_retention_violation(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    resolve(
        ctx,
        Emit::plain(
            Framework::Hipaa,
            &[rules::HIPAA_RETENTION],
            format!(
                "Data retained beyond its permitted window by {}",
                ctx.system.summary()
            ),
        ),
    )
}

/// Patient data processed without a matching consent record.
pub fn consent_violation(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    resolve(
        ctx,
        Emit::plain(
            Framework::Hipaa,
            &[rules::HIPAA_AUTHORIZATION],
            "Patient data processed without a matching consent record".to_string(),
        ),
    )
}
