//! # Risk Scorer
//!
//! Aggregates a translated event's violation set into one weighted score
//! and qualitative level. The score is always recomputed from the
//! violations — it is never stored independently, so it cannot drift from
//! the set that produced it.

use vigil_core::{ComplianceViolation, Framework, RiskLevel, RiskScore, Severity, ViolationType};

/// Weight of a critical violation.
const WEIGHT_CRITICAL: u32 = 10;
/// Weight of a high violation.
const WEIGHT_HIGH: u32 = 5;
/// Weight of a medium violation.
const WEIGHT_MEDIUM: u32 = 2;
/// Weight of a low violation.
const WEIGHT_LOW: u32 = 1;

/// Score a violation set.
///
/// Weighted sum over severity counts (critical×10 + high×5 + medium×2 +
/// low×1; informational violations carry no weight). Level breakpoints:
/// score ≥ 10 → critical, ≥ 5 → high, ≥ 2 → medium, else low.
///
/// The factor list is a human-readable explanation assembled by presence
/// checks, not a numeric breakdown.
pub fn score_violations(violations: &[ComplianceViolation]) -> RiskScore {
    let mut critical = 0u32;
    let mut high = 0u32;
    let mut medium = 0u32;
    let mut low = 0u32;

    for violation in violations {
        match violation.severity {
            Severity::Critical => critical += 1,
            Severity::High => high += 1,
            Severity::Medium => medium += 1,
            Severity::Low => low += 1,
            Severity::Info => {}
        }
    }

    let score = critical * WEIGHT_CRITICAL
        + high * WEIGHT_HIGH
        + medium * WEIGHT_MEDIUM
        + low * WEIGHT_LOW;

    let level = if score >= 10 {
        RiskLevel::Critical
    } else if score >= 5 {
        RiskLevel::High
    } else if score >= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let mut factors = Vec::new();
    if critical > 0 {
        factors.push(format!("{critical} critical violation(s)"));
    }
    if high > 0 {
        factors.push(format!("{high} high-severity violation(s)"));
    }
    if violations
        .iter()
        .any(|v| v.framework == Framework::Hipaa && v.violation_type == ViolationType::Breach)
    {
        factors.push("protected health information breach".to_string());
    }
    if violations.iter().any(|v| v.requires_reporting) {
        factors.push("regulator reporting required".to_string());
    }

    RiskScore {
        score,
        level,
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::{
        FallbackReason, RuleSource, SystemId, Timestamp, ViolationId,
    };

    fn violation(severity: Severity, requires_reporting: bool) -> ComplianceViolation {
        ComplianceViolation {
            violation_id: ViolationId::new(),
            framework: Framework::NistAiRmf,
            control_id: "MEASURE-2.4".to_string(),
            control_name: "Drift Monitoring".to_string(),
            violation_type: ViolationType::ThresholdExceeded,
            severity,
            requires_reporting,
            reporting_deadline: None,
            description: "test".to_string(),
            affected_system: "Test (Dept)".to_string(),
            system_id: SystemId::new(),
            detected_at: Timestamp::now(),
            rule_source: RuleSource::StaticFallback {
                reason: FallbackReason::NoActivePolicy,
            },
        }
    }

    fn phi_breach() -> ComplianceViolation {
        let mut v = violation(Severity::Critical, true);
        v.framework = Framework::Hipaa;
        v.control_id = "164.402".to_string();
        v.violation_type = ViolationType::Breach;
        v
    }

    #[test]
    fn empty_set_scores_zero_low() {
        let score = score_violations(&[]);
        assert_eq!(score.score, 0);
        assert_eq!(score.level, RiskLevel::Low);
        assert!(score.factors.is_empty());
    }

    #[test]
    fn weights_are_exact() {
        let violations = vec![
            violation(Severity::Critical, false),
            violation(Severity::High, false),
            violation(Severity::Medium, false),
            violation(Severity::Low, false),
        ];
        assert_eq!(score_violations(&violations).score, 10 + 5 + 2 + 1);
    }

    #[test]
    fn info_violations_carry_no_weight() {
        let violations = vec![violation(Severity::Info, false)];
        let score = score_violations(&violations);
        assert_eq!(score.score, 0);
        assert_eq!(score.level, RiskLevel::Low);
    }

    #[test]
    fn level_breakpoints() {
        // One critical: 10 -> Critical.
        assert_eq!(
            score_violations(&[violation(Severity::Critical, false)]).level,
            RiskLevel::Critical
        );
        // One high: 5 -> High.
        assert_eq!(
            score_violations(&[violation(Severity::High, false)]).level,
            RiskLevel::High
        );
        // One medium: 2 -> Medium.
        assert_eq!(
            score_violations(&[violation(Severity::Medium, false)]).level,
            RiskLevel::Medium
        );
        // One low: 1 -> Low.
        assert_eq!(
            score_violations(&[violation(Severity::Low, false)]).level,
            RiskLevel::Low
        );
        // Two highs: 10 -> Critical.
        assert_eq!(
            score_violations(&[
                violation(Severity::High, false),
                violation(Severity::High, false)
            ])
            .level,
            RiskLevel::Critical
        );
    }

    #[test]
    fn factors_are_presence_checks() {
        let score = score_violations(&[phi_breach(), violation(Severity::High, false)]);
        assert!(score.factors.iter().any(|f| f.contains("critical")));
        assert!(score.factors.iter().any(|f| f.contains("high-severity")));
        assert!(score
            .factors
            .iter()
            .any(|f| f.contains("protected health information")));
        assert!(score
            .factors
            .iter()
            .any(|f| f.contains("regulator reporting")));
    }

    #[test]
    fn factors_absent_when_conditions_absent() {
        let score = score_violations(&[violation(Severity::Medium, false)]);
        assert!(score.factors.is_empty());
    }
}
