//! # Compliance Violations
//!
//! The mapper's output record: one detected breach of one framework
//! control, tied to one monitored AI system and one detection event.
//!
//! Within a single translated event, `(framework, control_id)` is unique —
//! the mapper deduplicates before returning. Each violation also carries a
//! stable synthetic [`ViolationId`] assigned at construction, which is the
//! key action generation groups by.

use serde::{Deserialize, Serialize};

use crate::event::Severity;
use crate::framework::{Framework, ViolationType};
use crate::identity::{SystemId, ViolationId};
use crate::temporal::Timestamp;

/// Which resolution path produced the control fields of a violation.
///
/// Carried on every violation so tests and audit queries can tell whether
/// the versioned policy store or the embedded static rules were used,
/// without inspecting logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum RuleSource {
    /// Control fields came from the active versioned policy.
    Policy {
        /// Version string of the resolved policy bundle.
        version: String,
    },
    /// Control fields came from the embedded static rules.
    StaticFallback {
        /// Why the versioned store did not supply a policy.
        reason: FallbackReason,
    },
}

/// Why policy resolution fell back to the embedded static rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The store answered but has no active policy for the key.
    NoActivePolicy,
    /// The store call failed; the error was logged and absorbed.
    StoreUnavailable,
}

/// A detected breach of one framework control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceViolation {
    /// Stable synthetic identifier for this violation within its batch.
    pub violation_id: ViolationId,
    /// The regulatory framework the control belongs to.
    pub framework: Framework,
    /// The violated control (e.g. `164.402`, `MEASURE-2.11`).
    pub control_id: String,
    /// Human-readable control name.
    pub control_name: String,
    /// How the control was violated.
    pub violation_type: ViolationType,
    /// Violation severity (may be escalated above the event severity).
    pub severity: Severity,
    /// Whether this violation must be reported to a regulator.
    pub requires_reporting: bool,
    /// Absolute regulator-reporting deadline, when mandated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_deadline: Option<Timestamp>,
    /// Event-specific description of what was detected.
    pub description: String,
    /// One-line summary of the affected system (`"<name> (<department>)"`).
    pub affected_system: String,
    /// The monitored system the violation is attributed to.
    pub system_id: SystemId,
    /// When the underlying event was detected.
    pub detected_at: Timestamp,
    /// Which resolution path supplied the control fields.
    pub rule_source: RuleSource,
}

impl ComplianceViolation {
    /// The dedup key: within one translated event, at most one violation
    /// may carry a given `(framework, control_id)` pair.
    pub fn control_key(&self) -> (Framework, &str) {
        (self.framework, self.control_id.as_str())
    }
}
