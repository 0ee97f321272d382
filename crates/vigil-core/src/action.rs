//! # Required Actions
//!
//! Remediation action records derived from violations. Every action
//! carries an absolute deadline and a non-empty assignee drawn from the
//! fixed role set; automated actions are additionally flagged so the
//! execution layer can run them without human dispatch.

use serde::{Deserialize, Serialize};

use crate::temporal::Timestamp;

/// The kind of remediation an action demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Roll the deployment back to the last known-good version.
    Rollback,
    /// Notify a regulator, officer, or affected party.
    Notify,
    /// Produce or update required documentation.
    Document,
    /// Escalate to the organizational escalation path.
    Escalate,
    /// Restrict or suspend the system's operation.
    Restrict,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Rollback => "rollback",
            Self::Notify => "notify",
            Self::Document => "document",
            Self::Escalate => "escalate",
            Self::Restrict => "restrict",
        };
        write!(f, "{s}")
    }
}

/// Action priority, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    /// Routine follow-up.
    Low,
    /// Scheduled review.
    Medium,
    /// Investigation within the month.
    High,
    /// Same-day attention.
    Critical,
    /// Drop-everything response.
    Immediate,
}

impl std::fmt::Display for ActionPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Immediate => "immediate",
        };
        write!(f, "{s}")
    }
}

/// The fixed set of roles an action can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssigneeRole {
    /// Security operations team.
    SecurityTeam,
    /// Compliance officer (regulator-facing reporting).
    ComplianceOfficer,
    /// System administrator for the deployment.
    SystemAdmin,
    /// AI/ML engineering team.
    AiTeam,
    /// Executed by automation, no human assignee.
    Automated,
}

impl std::fmt::Display for AssigneeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::SecurityTeam => "security_team",
            Self::ComplianceOfficer => "compliance_officer",
            Self::SystemAdmin => "system_admin",
            Self::AiTeam => "ai_team",
            Self::Automated => "automated",
        };
        write!(f, "{s}")
    }
}

/// A remediation action derived from one violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredAction {
    /// The kind of remediation demanded.
    pub action_type: ActionType,
    /// Urgency of the action.
    pub priority: ActionPriority,
    /// What must be done, with event-specific detail.
    pub description: String,
    /// The role responsible for the action.
    pub assignee: AssigneeRole,
    /// Absolute completion deadline.
    pub deadline: Timestamp,
    /// Whether the action is executed by automation.
    pub automated: bool,
}
