//! # Versioned Rule Bundles
//!
//! [`PolicyRuleLogic`] is the authored, versioned rule bundle keyed by
//! `(event_type, framework)`. Bundles are written and activated outside
//! this library; the translation engine only reads the currently-active
//! version. Each bundle carries a SHA-256 content digest so operators can
//! verify that the active version matches what was authored.

use serde::{Deserialize, Serialize};

use vigil_core::{sha256_bytes, ContentDigest, EventType, Framework, Severity, ViolationType};

/// One framework-control entry inside a rule bundle.
///
/// The mapper uses these fields verbatim when the bundle resolves,
/// substituting only the description and affected-system detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlRule {
    /// The violated control (e.g. `164.402`, `MEASURE-2.11`).
    pub control_id: String,
    /// Human-readable control name.
    pub control_name: String,
    /// How the control is violated by this event type.
    pub violation_type: ViolationType,
    /// Violation severity mandated by the rule.
    pub severity: Severity,
    /// Whether the violation must be reported to a regulator.
    pub requires_reporting: bool,
    /// Framework-mandated reporting window in days, when reporting is
    /// required and a deadline applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_deadline_days: Option<u32>,
    /// Remediation-step text surfaced to operators.
    pub remediation: String,
}

/// A versioned rule bundle for one `(event_type, framework)` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRuleLogic {
    /// The standardized event type this bundle applies to.
    pub event_type: EventType,
    /// The framework this bundle's controls belong to.
    pub framework: Framework,
    /// Version string assigned at authoring time (e.g. `"2026.02"`).
    pub version: String,
    /// The framework-control entries.
    pub controls: Vec<ControlRule>,
}

impl PolicyRuleLogic {
    /// Compute the content digest of this bundle.
    ///
    /// Serialization order is stable (struct field order, `Vec` order as
    /// authored), so identical bundles digest identically.
    pub fn content_digest(&self) -> ContentDigest {
        // serde_json cannot fail on this shape: no non-string keys, no
        // non-finite floats.
        let bytes = serde_json::to_vec(self).expect("rule bundle serialization is infallible");
        sha256_bytes(&bytes)
    }
}
