//! Security handlers: unauthorized access, prompt injection, credential
//! misuse.

use vigil_core::{ComplianceViolation, Framework};

use crate::handlers::{resolve, Emit, MapCtx};
use crate::rules;

/// Access to the AI system outside granted roles or scopes.
pub fn unauthorized_access(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let description = format!(
        "Unauthorized access detected against {}",
        ctx.system.summary()
    );

    let mut violations = resolve(
        ctx,
        Emit::plain(
            Framework::Hipaa,
            &[rules::HIPAA_ACCESS_CONTROL],
            description.clone(),
        ),
    );
    violations.extend(resolve(
        ctx,
        Emit::plain(
            Framework::NistAiRmf,
            &[rules::NIST_INCIDENT_RESPONSE],
            description,
        ),
    ));
    violations
}

/// Adversarial prompt content detected in model input.
///
/// For FDA-regulated systems, a compromised input path is additionally a
/// cyber-device finding under Section 524B.
pub fn prompt_injection(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let description = "Adversarial prompt content detected in model input".to_string();

    let mut violations = resolve(
        ctx,
        Emit::plain(
            Framework::NistAiRmf,
            &[rules::NIST_SECURITY_RESILIENCE],
            description.clone(),
        ),
    );
    if ctx.system.is_fda_regulated() {
        violations.extend(resolve(
            ctx,
            Emit::plain(
                Framework::FdaSamd,
                &[rules::FDA_CYBERSECURITY],
                description,
            ),
        ));
    }
    violations
}

/// Service credentials used from an unexpected context.
pub fn credential_misuse(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let description = format!(
        "Service credentials for {} used from an unexpected context",
        ctx.system.summary()
    );

    let mut violations = resolve(
        ctx,
        Emit::plain(
            Framework::Hipaa,
            &[rules::HIPAA_AUTHENTICATION],
            description.clone(),
        ),
    );
    violations.extend(resolve(
        ctx,
        Emit::plain(
            Framework::NistAiRmf,
            &[rules::NIST_SECURITY_RESILIENCE],
            description,
        ),
    ));
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use vigil_core::{
        AISystemContext, EventType, HealthSystemId, NormalizedEvent, RiskTier, Severity,
        StateCode, SystemId, Timestamp, VendorId,
    };
    use vigil_policy::{InMemoryPolicyStore, PolicyLoader};

    use crate::thresholds::ThresholdSet;

    fn event(event_type: EventType) -> NormalizedEvent {
        NormalizedEvent {
            event_type,
            severity: Severity::High,
            confidence: 0.9,
            metrics: BTreeMap::new(),
            system_id: SystemId::new(),
            observed_at: Timestamp::now(),
        }
    }

    fn system(department: &str) -> AISystemContext {
        AISystemContext {
            system_id: SystemId::new(),
            name: "Triage Chat".to_string(),
            department: department.to_string(),
            vendor_id: VendorId::new(),
            health_system_id: HealthSystemId::new(),
            jurisdiction: StateCode::new("TX").unwrap(),
            risk_tier: RiskTier::Moderate,
        }
    }

    #[test]
    fn unauthorized_access_pairs_hipaa_and_nist() {
        let loader = PolicyLoader::new(Arc::new(InMemoryPolicyStore::new()));
        let event = event(EventType::UnauthorizedAccess);
        let system = system("Emergency");
        let thresholds = ThresholdSet::default();
        let ctx = MapCtx {
            event: &event,
            system: &system,
            thresholds: &thresholds,
            loader: &loader,
        };

        let violations = unauthorized_access(&ctx);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.control_id == "164.312(a)(1)"));
        assert!(violations.iter().any(|v| v.control_id == "MANAGE-4.1"));
    }

    #[test]
    fn prompt_injection_adds_fda_control_only_when_regulated() {
        let loader = PolicyLoader::new(Arc::new(InMemoryPolicyStore::new()));
        let event = event(EventType::PromptInjection);
        let thresholds = ThresholdSet::default();

        let imaging = system("Imaging");
        let ctx = MapCtx {
            event: &event,
            system: &imaging,
            thresholds: &thresholds,
            loader: &loader,
        };
        let violations = prompt_injection(&ctx);
        assert!(violations
            .iter()
            .any(|v| v.framework == Framework::FdaSamd && v.control_id == "524B"));

        let billing = system("Billing");
        let ctx = MapCtx {
            event: &event,
            system: &billing,
            thresholds: &thresholds,
            loader: &loader,
        };
        let violations = prompt_injection(&ctx);
        assert!(violations.iter().all(|v| v.framework != Framework::FdaSamd));
    }

    #[test]
    fn credential_misuse_cites_authentication_control() {
        let loader = PolicyLoader::new(Arc::new(InMemoryPolicyStore::new()));
        let event = event(EventType::CredentialMisuse);
        let system = system("Billing");
        let thresholds = ThresholdSet::default();
        let ctx = MapCtx {
            event: &event,
            system: &system,
            thresholds: &thresholds,
            loader: &loader,
        };

        let violations = credential_misuse(&ctx);
        assert!(violations.iter().any(|v| v.control_id == "164.312(d)"));
        assert!(violations.iter().any(|v| v.control_id == "MEASURE-2.7"));
    }
}
