//! Fairness handlers: demographic disparity, equalized odds, employment
//! screening bias.
//!
//! The NIST fairness control is threshold-gated on the fairness metric;
//! the NYC Local Law 144 violation is context-gated instead — it fires
//! for any fairness event on an employment decision tool owned in New
//! York, independent of metric magnitude.

use vigil_core::{metric, ComplianceViolation, Framework};

use crate::handlers::{resolve, Emit, MapCtx};
use crate::rules;
use crate::thresholds::TierThresholds;

/// Outcome variance across demographic groups above tolerance.
pub fn demographic_disparity(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    metric_gated_fairness(
        ctx,
        metric::DEMOGRAPHIC_VARIANCE,
        ctx.thresholds.demographic_variance,
        |value| format!("Demographic outcome variance at {value:.2}"),
    )
}

/// Equalized-odds difference above tolerance.
pub fn equalized_odds_violation(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    metric_gated_fairness(
        ctx,
        metric::EQUALIZED_ODDS_DIFFERENCE,
        ctx.thresholds.equalized_odds_difference,
        |value| format!("Equalized-odds difference at {value:.2}"),
    )
}

/// Bias finding in an employment-screening AI system.
///
/// Unconditional under NIST (the vendor already established the finding);
/// the NYC audit obligation still gates on the owning state.
pub fn employment_screening_bias(ctx: &MapCtx<'_>) -> Vec<ComplianceViolation> {
    let description = format!(
        "Bias finding reported for employment screening system {}",
        ctx.system.summary()
    );

    let mut violations = resolve(
        ctx,
        Emit::plain(
            Framework::NistAiRmf,
            &[rules::NIST_FAIRNESS],
            description.clone(),
        ),
    );
    if ctx.system.in_state("NY") {
        violations.extend(resolve(
            ctx,
            Emit::plain(Framework::NycLl144, &[rules::NYC_BIAS_AUDIT], description),
        ));
    }
    violations
}

/// Shared shape for the metric-gated fairness events.
fn metric_gated_fairness(
    ctx: &MapCtx<'_>,
    metric_name: &str,
    tiers: TierThresholds,
    describe: impl Fn(f64) -> String,
) -> Vec<ComplianceViolation> {
    let value = ctx.event.metric(metric_name);
    let tier = value.and_then(|v| tiers.tier(v));

    let mut violations = Vec::new();
    if let Some(tier) = tier {
        // value is present whenever a tier exists
        let description = describe(value.unwrap_or_default());
        violations.extend(resolve(
            ctx,
            Emit {
                framework: Framework::NistAiRmf,
                statics: &[rules::NIST_FAIRNESS],
                description,
                severity_override: Some(tier),
                escalate_floor: None,
            },
        ));
    }

    if ctx.system.is_employment_ai() && ctx.system.in_state("NY") {
        let description = format!(
            "Fairness finding on employment decision tool {}",
            ctx.system.summary()
        );
        violations.extend(resolve(
            ctx,
            Emit::plain(Framework::NycLl144, &[rules::NYC_BIAS_AUDIT], description),
        ));
    }
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

    fn event(event_type: EventType, metrics: &[(&str, f64)]) -> NormalizedEvent {
        NormalizedEvent {
            event_type,
            severity: Severity::High,
            confidence: 0.9,
            metrics: metrics
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            system_id: SystemId::new(),
            observed_at: Timestamp::now(),
        }
    }

    fn system(name: &str, department: &str, state: &str) -> AISystemContext {
        AISystemContext {
            system_id: SystemId::new(),
            name: name.to_string(),
            department: department.to_string(),
            vendor_id: VendorId::new(),
            health_system_id: HealthSystemId::new(),
            jurisdiction: StateCode::new(state).unwrap(),
            risk_tier: RiskTier::Moderate,
        }
    }

    #[test]
    fn disparity_above_threshold_fires_nist_fairness() {
        let loader = PolicyLoader::new(Arc::new(InMemoryPolicyStore::new()));
        let event = event(
            EventType::DemographicDisparity,
            &[(metric::DEMOGRAPHIC_VARIANCE, 0.25)],
        );
        let system = system("Sepsis Early Warning", "ICU", "TX");
        let thresholds = ThresholdSet::default();
        let ctx = MapCtx {
            event: &event,
            system: &system,
            thresholds: &thresholds,
            loader: &loader,
        };

        let violations = demographic_disparity(&ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].control_id, "MEASURE-2.11");
        assert_eq!(violations[0].severity, Severity::High);
    }

    #[test]
    fn disparity_below_threshold_on_clinical_system_fires_nothing() {
        let loader = PolicyLoader::new(Arc::new(InMemoryPolicyStore::new()));
        let event = event(
            EventType::DemographicDisparity,
            &[(metric::DEMOGRAPHIC_VARIANCE, 0.05)],
        );
        let system = system("Sepsis Early Warning", "ICU", "TX");
        let thresholds = ThresholdSet::default();
        let ctx = MapCtx {
            event: &event,
            system: &system,
            thresholds: &thresholds,
            loader: &loader,
        };
        assert!(demographic_disparity(&ctx).is_empty());
    }

    #[test]
    fn ny_employment_tool_owes_bias_audit_regardless_of_metric() {
        let loader = PolicyLoader::new(Arc::new(InMemoryPolicyStore::new()));
        // Below-threshold variance: NIST does not fire, LL144 still does.
        let event = event(
            EventType::DemographicDisparity,
            &[(metric::DEMOGRAPHIC_VARIANCE, 0.02)],
        );
        let system = system("Resume Screening Ranker", "Human Resources", "NY");
        let thresholds = ThresholdSet::default();
        let ctx = MapCtx {
            event: &event,
            system: &system,
            thresholds: &thresholds,
            loader: &loader,
        };

        let violations = demographic_disparity(&ctx);
        assert_eq!(violations.len(), 1);
        let ll144 = &violations[0];
        assert_eq!(ll144.framework, Framework::NycLl144);
        assert_eq!(ll144.control_id, "LL144");
        assert!(ll144.requires_reporting);
        assert_eq!(
            ll144.reporting_deadline,
            Some(event.observed_at.plus_days(90))
        );
    }

    #[test]
    fn non_ny_employment_tool_has_no_ll144_violation() {
        let loader = PolicyLoader::new(Arc::new(InMemoryPolicyStore::new()));
        let event = event(
            EventType::EmploymentScreeningBias,
            &[],
        );
        let system = system("Resume Screening Ranker", "Human Resources", "CA");
        let thresholds = ThresholdSet::default();
        let ctx = MapCtx {
            event: &event,
            system: &system,
            thresholds: &thresholds,
            loader: &loader,
        };

        let violations = employment_screening_bias(&ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].framework, Framework::NistAiRmf);
    }

    #[test]
    fn employment_bias_in_ny_emits_both_frameworks() {
        let loader = PolicyLoader::new(Arc::new(InMemoryPolicyStore::new()));
        let event = event(EventType::EmploymentScreeningBias, &[]);
        let system = system("Resume Screening Ranker", "Human Resources", "NY");
        let thresholds = ThresholdSet::default();
        let ctx = MapCtx {
            event: &event,
            system: &system,
            thresholds: &thresholds,
            loader: &loader,
        };

        let violations = employment_screening_bias(&ctx);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.framework == Framework::NycLl144));
    }

    #[test]
    fn equalized_odds_uses_its_own_threshold_table() {
        let loader = PolicyLoader::new(Arc::new(InMemoryPolicyStore::new()));
        let event = event(
            EventType::EqualizedOddsViolation,
            &[(metric::EQUALIZED_ODDS_DIFFERENCE, 0.35)],
        );
        let system = system("Sepsis Early Warning", "ICU", "TX");
        let mut thresholds = ThresholdSet::default();
        thresholds.equalized_odds_difference.critical = 0.30;
        let ctx = MapCtx {
            event: &event,
            system: &system,
            thresholds: &thresholds,
            loader: &loader,
        };

        let violations = equalized_odds_violation(&ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Critical);
    }
}
