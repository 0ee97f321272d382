//! # Embedded Static Fallback Rules
//!
//! The static rule catalog handlers fall back to when the versioned
//! policy store has no active bundle. Entries have the same shape as
//! authored [`ControlRule`](vigil_policy::ControlRule)s.
//!
//! The reporting windows are framework-mandated and must be preserved
//! exactly: HIPAA breach notification 60 days, FDA device reporting
//! 30 days, California breach notification 30 days, NYC Local Law 144
//! bias audit publication 90 days.

use vigil_core::{Severity, ViolationType};

/// Days HIPAA allows for breach notification (45 CFR 164.404).
pub const HIPAA_BREACH_NOTIFICATION_DAYS: u32 = 60;
/// Days FDA allows for a reportable SaMD malfunction (21 CFR 803).
pub const FDA_REPORTING_DAYS: u32 = 30;
/// Days California allows for breach notification (Civ. Code 1798.82).
pub const CA_BREACH_NOTIFICATION_DAYS: u32 = 30;
/// Days NYC Local Law 144 allows for a bias audit filing.
pub const NYC_BIAS_AUDIT_DAYS: u32 = 90;

/// A static control entry, const-constructible.
#[derive(Debug, Clone, Copy)]
pub struct StaticControl {
    /// The violated control.
    pub control_id: &'static str,
    /// Human-readable control name.
    pub control_name: &'static str,
    /// How the control is violated.
    pub violation_type: ViolationType,
    /// Baseline severity (threshold tiers and escalation may override).
    pub severity: Severity,
    /// Whether the violation must be reported to a regulator.
    pub requires_reporting: bool,
    /// Reporting window in days, when a deadline applies.
    pub reporting_deadline_days: Option<u32>,
    /// Remediation-step text.
    pub remediation: &'static str,
}

// ─── HIPAA ──────────────────────────────────────────────────────────

/// 45 CFR 164.402 — breach of unsecured PHI; notification mandated.
pub const HIPAA_BREACH_NOTIFICATION: StaticControl = StaticControl {
    control_id: "164.402",
    control_name: "Breach Notification Rule",
    violation_type: ViolationType::Breach,
    severity: Severity::Critical,
    requires_reporting: true,
    reporting_deadline_days: Some(HIPAA_BREACH_NOTIFICATION_DAYS),
    remediation: "Notify affected individuals and HHS; document the breach risk assessment",
};

/// 45 CFR 164.308(a)(1) — security management process.
pub const HIPAA_SECURITY_MANAGEMENT: StaticControl = StaticControl {
    control_id: "164.308(a)(1)",
    control_name: "Security Management Process",
    violation_type: ViolationType::Deviation,
    severity: Severity::High,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Run a security management review of the exposure path",
};

/// 45 CFR 164.312(a)(1) — technical access control.
pub const HIPAA_ACCESS_CONTROL: StaticControl = StaticControl {
    control_id: "164.312(a)(1)",
    control_name: "Access Control",
    violation_type: ViolationType::Deviation,
    severity: Severity::High,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Revoke the offending access path and audit role assignments",
};

/// 45 CFR 164.312(d) — person or entity authentication.
pub const HIPAA_AUTHENTICATION: StaticControl = StaticControl {
    control_id: "164.312(d)",
    control_name: "Person or Entity Authentication",
    violation_type: ViolationType::Deviation,
    severity: Severity::High,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Rotate the affected credentials and review authentication logs",
};

/// 45 CFR 164.316(b)(2) — documentation retention requirements.
pub const HIPAA_RETENTION: StaticControl = StaticControl {
    control_id: "164.316(b)(2)",
    control_name: "Documentation Retention",
    violation_type: ViolationType::Deviation,
    severity: Severity::Medium,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Purge data past its retention window and correct the retention schedule",
};

/// 45 CFR 164.508 — authorizations for uses and disclosures.
pub const HIPAA_AUTHORIZATION: StaticControl = StaticControl {
    control_id: "164.508",
    control_name: "Uses and Disclosures Requiring Authorization",
    violation_type: ViolationType::Deviation,
    severity: Severity::High,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Halt processing for unconsented records and reconcile consent state",
};

// ─── NIST AI RMF ────────────────────────────────────────────────────

/// MEASURE 2.4 — monitoring for drift and degradation.
pub const NIST_DRIFT_MONITORING: StaticControl = StaticControl {
    control_id: "MEASURE-2.4",
    control_name: "Model Drift and Degradation Monitoring",
    violation_type: ViolationType::ThresholdExceeded,
    severity: Severity::Medium,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Re-validate the model against current serving data",
};

/// MEASURE 2.5 — validity and reliability evaluation.
pub const NIST_VALIDITY: StaticControl = StaticControl {
    control_id: "MEASURE-2.5",
    control_name: "Validity and Reliability Evaluation",
    violation_type: ViolationType::ThresholdExceeded,
    severity: Severity::Medium,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Re-run accuracy evaluation and compare against the release baseline",
};

/// MEASURE 2.6 — safety evaluation of AI system output.
pub const NIST_SAFETY: StaticControl = StaticControl {
    control_id: "MEASURE-2.6",
    control_name: "AI Safety Evaluation",
    violation_type: ViolationType::Deviation,
    severity: Severity::High,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Review the unsafe output with the clinical owner before continued use",
};

/// MEASURE 2.7 — security and resilience of the AI system.
pub const NIST_SECURITY_RESILIENCE: StaticControl = StaticControl {
    control_id: "MEASURE-2.7",
    control_name: "AI Security and Resilience",
    violation_type: ViolationType::Deviation,
    severity: Severity::High,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Harden input validation and review adversarial input filters",
};

/// MEASURE 2.11 — fairness and bias evaluation.
pub const NIST_FAIRNESS: StaticControl = StaticControl {
    control_id: "MEASURE-2.11",
    control_name: "Fairness and Bias Evaluation",
    violation_type: ViolationType::ThresholdExceeded,
    severity: Severity::High,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Run a subgroup performance analysis and review training data balance",
};

/// MANAGE 4.1 — incident response and post-deployment monitoring.
pub const NIST_INCIDENT_RESPONSE: StaticControl = StaticControl {
    control_id: "MANAGE-4.1",
    control_name: "Post-Deployment Incident Response",
    violation_type: ViolationType::Deviation,
    severity: Severity::High,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Open an incident record and track containment to closure",
};

// ─── FDA SaMD ───────────────────────────────────────────────────────

/// 21 CFR 803 — medical device reporting for SaMD malfunctions.
pub const FDA_DEVICE_REPORTING: StaticControl = StaticControl {
    control_id: "21CFR803",
    control_name: "Medical Device Reporting",
    violation_type: ViolationType::ThresholdExceeded,
    severity: Severity::High,
    requires_reporting: true,
    reporting_deadline_days: Some(FDA_REPORTING_DAYS),
    remediation: "File a medical device report covering the performance change",
};

/// Section 524B — cybersecurity of cyber devices.
pub const FDA_CYBERSECURITY: StaticControl = StaticControl {
    control_id: "524B",
    control_name: "Cyber Device Security Requirements",
    violation_type: ViolationType::Deviation,
    severity: Severity::High,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Assess exploitability and update the device security plan",
};

// ─── ISO/IEC 42001 ──────────────────────────────────────────────────

/// Clause 8.1 — operational planning and control.
pub const ISO_OPERATIONAL_CONTROL: StaticControl = StaticControl {
    control_id: "ISO42001-8.1",
    control_name: "Operational Planning and Control",
    violation_type: ViolationType::ThresholdExceeded,
    severity: Severity::Low,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Review capacity and operational controls for the serving path",
};

/// Annex A 7.4 — data quality for AI systems.
pub const ISO_DATA_QUALITY: StaticControl = StaticControl {
    control_id: "ISO42001-A.7.4",
    control_name: "Data Quality for AI Systems",
    violation_type: ViolationType::Deviation,
    severity: Severity::Medium,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Trace the degraded feed upstream and re-validate input contracts",
};

/// Annex A 6.2 — AI system verification and validation.
pub const ISO_VERIFICATION: StaticControl = StaticControl {
    control_id: "ISO42001-A.6.2",
    control_name: "AI System Verification and Validation",
    violation_type: ViolationType::Deviation,
    severity: Severity::Low,
    requires_reporting: false,
    reporting_deadline_days: None,
    remediation: "Add the malformed output shape to the validation suite",
};

// ─── State laws ─────────────────────────────────────────────────────

/// California Civil Code 1798.82 — breach notification.
pub const CA_BREACH_NOTIFICATION: StaticControl = StaticControl {
    control_id: "1798.82",
    control_name: "California Breach Notification",
    violation_type: ViolationType::Breach,
    severity: Severity::Critical,
    requires_reporting: true,
    reporting_deadline_days: Some(CA_BREACH_NOTIFICATION_DAYS),
    remediation: "Notify affected California residents and the Attorney General",
};

/// NYC Local Law 144 — bias audit for automated employment decision tools.
pub const NYC_BIAS_AUDIT: StaticControl = StaticControl {
    control_id: "LL144",
    control_name: "Automated Employment Decision Tool Bias Audit",
    violation_type: ViolationType::Deviation,
    severity: Severity::High,
    requires_reporting: true,
    reporting_deadline_days: Some(NYC_BIAS_AUDIT_DAYS),
    remediation: "Commission an independent bias audit and publish the results",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_deadline_constants_are_exact() {
        assert_eq!(HIPAA_BREACH_NOTIFICATION_DAYS, 60);
        assert_eq!(FDA_REPORTING_DAYS, 30);
        assert_eq!(CA_BREACH_NOTIFICATION_DAYS, 30);
        assert_eq!(NYC_BIAS_AUDIT_DAYS, 90);
    }

    #[test]
    fn reporting_controls_carry_deadlines() {
        for control in [
            HIPAA_BREACH_NOTIFICATION,
            FDA_DEVICE_REPORTING,
            CA_BREACH_NOTIFICATION,
            NYC_BIAS_AUDIT,
        ] {
            assert!(control.requires_reporting);
            assert!(control.reporting_deadline_days.is_some());
        }
    }

    #[test]
    fn non_reporting_controls_have_no_deadline() {
        for control in [
            HIPAA_SECURITY_MANAGEMENT,
            HIPAA_ACCESS_CONTROL,
            NIST_DRIFT_MONITORING,
            NIST_FAIRNESS,
            ISO_DATA_QUALITY,
        ] {
            assert!(!control.requires_reporting);
            assert!(control.reporting_deadline_days.is_none());
        }
    }

    #[test]
    fn breach_controls_are_breach_typed() {
        assert_eq!(
            HIPAA_BREACH_NOTIFICATION.violation_type,
            ViolationType::Breach
        );
        assert_eq!(CA_BREACH_NOTIFICATION.violation_type, ViolationType::Breach);
    }
}
