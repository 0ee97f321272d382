//! # Escalation Decision & Path
//!
//! Whether a translated event must be escalated, and through which
//! ordered chain of organizational roles. The paths are fixed by
//! violation shape: a PHI breach routes through the privacy office first;
//! an FDA finding routes through compliance leadership with the clinical
//! owner in the chain; everything else starts with the CISO.

use serde::{Deserialize, Serialize};

use vigil_core::{ComplianceViolation, Framework, Severity, ViolationType};

/// An organizational role in an escalation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationRole {
    /// Privacy officer (HIPAA privacy office).
    PrivacyOfficer,
    /// Chief information security officer.
    Ciso,
    /// Chief compliance officer.
    ChiefComplianceOfficer,
    /// Clinical owner of the monitored system.
    ClinicalOwner,
    /// The governing board.
    Board,
}

impl std::fmt::Display for EscalationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PrivacyOfficer => "Privacy Officer",
            Self::Ciso => "CISO",
            Self::ChiefComplianceOfficer => "Chief Compliance Officer",
            Self::ClinicalOwner => "Clinical Owner",
            Self::Board => "Board",
        };
        write!(f, "{s}")
    }
}

/// Whether the violation set requires escalation.
///
/// `any critical OR high count ≥ 2 OR any regulator reporting`.
pub fn escalation_required(violations: &[ComplianceViolation]) -> bool {
    let any_critical = violations
        .iter()
        .any(|v| v.severity == Severity::Critical);
    let high_count = violations
        .iter()
        .filter(|v| v.severity == Severity::High)
        .count();
    let any_reporting = violations.iter().any(|v| v.requires_reporting);
    any_critical || high_count >= 2 || any_reporting
}

/// The ordered role chain for the violation set.
///
/// A HIPAA breach violation (the 164.402 control, or any breach-typed
/// HIPAA violation under a versioned policy that renames the control)
/// takes precedence over every other shape.
pub fn escalation_path(violations: &[ComplianceViolation]) -> Vec<EscalationRole> {
    let phi_breach = violations.iter().any(|v| {
        v.framework == Framework::Hipaa
            && (v.control_id.starts_with("164.402") || v.violation_type == ViolationType::Breach)
    });
    if phi_breach {
        return vec![
            EscalationRole::PrivacyOfficer,
            EscalationRole::Ciso,
            EscalationRole::ChiefComplianceOfficer,
            EscalationRole::Board,
        ];
    }

    let fda = violations.iter().any(|v| v.framework == Framework::FdaSamd);
    if fda {
        return vec![
            EscalationRole::ChiefComplianceOfficer,
            EscalationRole::Ciso,
            EscalationRole::ClinicalOwner,
            EscalationRole::Board,
        ];
    }

    vec![
        EscalationRole::Ciso,
        EscalationRole::ChiefComplianceOfficer,
        EscalationRole::Board,
    ]
}
