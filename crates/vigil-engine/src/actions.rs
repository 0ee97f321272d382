//! # Action Generator
//!
//! Converts violations into [`RequiredAction`] records, grouped by the
//! [`ViolationId`] of the violation that produced them. The grouping is
//! keyed on the synthetic id — never on reference identity — so
//! downstream persistence can attribute every action to its cause.
//!
//! Rules:
//!
//! - critical ⇒ an escalation action at immediate/critical priority with
//!   a 24-hour deadline; breach-typed violations additionally get an
//!   automated suspend action.
//! - `requires_reporting` ⇒ a notify action for the compliance officer,
//!   its deadline bounded by the violation's own reporting deadline.
//! - high ⇒ an investigation action within 30 days.
//! - medium ⇒ a monitoring review within 14 days, never automated.
//! - low/info ⇒ a documentation follow-up within 30 days.
//!
//! Every violation yields at least one action, and every action carries
//! an assignee from the fixed role set.

use serde::{Deserialize, Serialize};

use vigil_core::{
    ActionPriority, ActionType, AssigneeRole, ComplianceViolation, Framework, RequiredAction,
    Severity, ViolationId, ViolationType,
};

/// Hours allowed for responding to a critical violation.
const CRITICAL_RESPONSE_HOURS: u32 = 24;
/// Days allowed for a high-severity investigation.
const INVESTIGATION_DAYS: u32 = 30;
/// Days allowed for a medium-severity monitoring review.
const MONITORING_REVIEW_DAYS: u32 = 14;
/// Days allowed for low-severity documentation follow-up.
const DOCUMENTATION_DAYS: u32 = 30;

/// The actions generated for one violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionGroup {
    /// The violation these actions remediate.
    pub violation_id: ViolationId,
    /// The actions, in generation order.
    pub actions: Vec<RequiredAction>,
}

/// All actions for one translated event, grouped by source violation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionPlan {
    /// One group per violation, in violation order.
    pub groups: Vec<ActionGroup>,
}

impl ActionPlan {
    /// Flatten the plan into a single action list, preserving group order.
    pub fn flattened(&self) -> Vec<RequiredAction> {
        self.groups
            .iter()
            .flat_map(|g| g.actions.iter().cloned())
            .collect()
    }

    /// The actions generated for a specific violation.
    pub fn actions_for(&self, violation_id: ViolationId) -> Option<&[RequiredAction]> {
        self.groups
            .iter()
            .find(|g| g.violation_id == violation_id)
            .map(|g| g.actions.as_slice())
    }

    /// Total number of actions across all groups.
    pub fn total_actions(&self) -> usize {
        self.groups.iter().map(|g| g.actions.len()).sum()
    }
}

/// Generate the action plan for a violation set.
pub fn generate_actions(violations: &[ComplianceViolation]) -> ActionPlan {
    let groups = violations
        .iter()
        .map(|violation| ActionGroup {
            violation_id: violation.violation_id,
            actions: actions_for_violation(violation),
        })
        .collect();
    ActionPlan { groups }
}

fn actions_for_violation(violation: &ComplianceViolation) -> Vec<RequiredAction> {
    let mut actions = Vec::new();

    match violation.severity {
        Severity::Critical => {
            if violation.violation_type == ViolationType::Breach {
                actions.push(RequiredAction {
                    action_type: ActionType::Restrict,
                    priority: ActionPriority::Immediate,
                    description: format!(
                        "Suspend {} pending breach containment",
                        violation.affected_system
                    ),
                    assignee: AssigneeRole::Automated,
                    deadline: violation.detected_at.plus_hours(CRITICAL_RESPONSE_HOURS),
                    automated: true,
                });
            }
            actions.push(RequiredAction {
                action_type: ActionType::Escalate,
                priority: if violation.violation_type == ViolationType::Breach {
                    ActionPriority::Immediate
                } else {
                    ActionPriority::Critical
                },
                description: format!(
                    "Escalate {} violation of {} ({})",
                    violation.framework, violation.control_id, violation.control_name
                ),
                assignee: incident_owner(violation),
                deadline: violation.detected_at.plus_hours(CRITICAL_RESPONSE_HOURS),
                automated: false,
            });
        }
        Severity::High => {
            actions.push(RequiredAction {
                action_type: ActionType::Document,
                priority: ActionPriority::High,
                description: format!(
                    "Investigate and document the {} violation of {}",
                    violation.framework, violation.control_id
                ),
                assignee: incident_owner(violation),
                deadline: violation.detected_at.plus_days(INVESTIGATION_DAYS),
                automated: false,
            });
        }
        Severity::Medium => {
            actions.push(RequiredAction {
                action_type: ActionType::Document,
                priority: ActionPriority::Medium,
                description: format!(
                    "Schedule a monitoring review for {} ({})",
                    violation.control_id, violation.control_name
                ),
                assignee: AssigneeRole::AiTeam,
                deadline: violation.detected_at.plus_days(MONITORING_REVIEW_DAYS),
                automated: false,
            });
        }
        Severity::Low | Severity::Info => {
            actions.push(RequiredAction {
                action_type: ActionType::Document,
                priority: ActionPriority::Low,
                description: format!(
                    "Record the {} finding against {}",
                    violation.framework, violation.control_id
                ),
                assignee: AssigneeRole::SystemAdmin,
                deadline: violation.detected_at.plus_days(DOCUMENTATION_DAYS),
                automated: false,
            });
        }
    }

    if violation.requires_reporting {
        // Bounded by the violation's own reporting deadline; a missing
        // deadline falls back to the investigation window.
        let deadline = violation
            .reporting_deadline
            .unwrap_or_else(|| violation.detected_at.plus_days(INVESTIGATION_DAYS));
        actions.push(RequiredAction {
            action_type: ActionType::Notify,
            priority: if violation.severity == Severity::Critical {
                ActionPriority::Critical
            } else {
                ActionPriority::High
            },
            description: format!(
                "Report the {} violation of {} to the regulator",
                violation.framework, violation.control_id
            ),
            assignee: AssigneeRole::ComplianceOfficer,
            deadline,
            automated: false,
        });
    }

    actions
}

/// The human owner for escalation and investigation work.
///
/// HIPAA findings route to the security team; everything else is model
/// behavior and routes to the AI team.
fn incident_owner(violation: &ComplianceViolation) -> AssigneeRole {
    match violation.framework {
        Framework::Hipaa | Framework::CaliforniaBreach => AssigneeRole::SecurityTeam,
        Framework::NistAiRmf
        | Framework::FdaSamd
        | Framework::Iso42001
        | Framework::NycLl144 => AssigneeRole::AiTeam,
    }
}
