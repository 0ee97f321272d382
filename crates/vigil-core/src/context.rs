//! # Monitored-System Context
//!
//! Read-only snapshot of a monitored AI system, supplied by the external
//! system registry. The compliance mapper uses this context to gate
//! framework applicability: FDA SaMD controls only apply to FDA-regulated
//! systems, state laws only to systems owned in the matching state.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::{HealthSystemId, SystemId, VendorId};

/// A US state code in the owning health system's jurisdiction
/// (e.g. `CA`, `NY`).
///
/// # Validation
///
/// Must be exactly two ASCII letters; normalized to uppercase at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateCode(String);

impl StateCode {
    /// Create a state code from a string, validating and normalizing it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStateCode`] if the input is not
    /// exactly two ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let trimmed = s.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidStateCode(s));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Access the normalized two-letter code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deployment criticality tier assigned by the owning health system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Administrative or back-office use.
    Low,
    /// Clinician-facing decision support.
    Moderate,
    /// Directly influences diagnosis or treatment.
    High,
}

// Department/name fragments that mark a system as FDA-regulated SaMD.
// Substring heuristic preserved from the source system for behavioral
// parity. TODO: externalize per-deployment once the registry carries an
// explicit regulatory classification field.
const FDA_DEPARTMENT_MARKERS: &[&str] = &[
    "imaging",
    "radiology",
    "diagnost",
    "patholog",
    "cardiology",
    "clinical decision",
];

// Name/department fragments that mark a system as an automated employment
// decision tool (NYC Local Law 144 scope).
const EMPLOYMENT_MARKERS: &[&str] = &["hiring", "recruit", "screening", "human resources", "hr "];

/// Read-only snapshot of a monitored AI system at translation time.
///
/// Supplied by the external system registry; never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AISystemContext {
    /// The monitored system's identifier.
    pub system_id: SystemId,
    /// Human-readable system name (e.g. "Sepsis Early Warning v2").
    pub name: String,
    /// Owning department within the health system.
    pub department: String,
    /// The AI vendor supplying the system.
    pub vendor_id: VendorId,
    /// The health system (hospital network) operating the deployment.
    pub health_system_id: HealthSystemId,
    /// State jurisdiction of the owning health system.
    pub jurisdiction: StateCode,
    /// Deployment criticality tier.
    pub risk_tier: RiskTier,
}

impl AISystemContext {
    /// Whether this system falls under FDA SaMD regulation.
    ///
    /// Heuristic: case-insensitive substring match on department and name
    /// against a fixed marker list (`imaging`, `radiology`, ...).
    pub fn is_fda_regulated(&self) -> bool {
        let haystack = format!(
            "{} {}",
            self.department.to_lowercase(),
            self.name.to_lowercase()
        );
        FDA_DEPARTMENT_MARKERS.iter().any(|m| haystack.contains(m))
    }

    /// Whether this system is an automated employment decision tool.
    ///
    /// Same substring heuristic, against the employment marker list.
    pub fn is_employment_ai(&self) -> bool {
        let haystack = format!(
            "{} {}",
            self.department.to_lowercase(),
            self.name.to_lowercase()
        );
        EMPLOYMENT_MARKERS.iter().any(|m| haystack.contains(m))
    }

    /// Whether the owning health system is in the given state.
    pub fn in_state(&self, code: &str) -> bool {
        self.jurisdiction.as_str().eq_ignore_ascii_case(code)
    }

    /// One-line summary used in violation descriptions
    /// (`"<name> (<department>)"`).
    pub fn summary(&self) -> String {
        format!("{} ({})", self.name, self.department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(name: &str, department: &str, state: &str) -> AISystemContext {
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
    fn state_code_normalizes_to_uppercase() {
        assert_eq!(StateCode::new("ca").unwrap().as_str(), "CA");
        assert_eq!(StateCode::new(" ny ").unwrap().as_str(), "NY");
    }

    #[test]
    fn state_code_rejects_bad_input() {
        assert!(StateCode::new("").is_err());
        assert!(StateCode::new("CAL").is_err());
        assert!(StateCode::new("C1").is_err());
    }

    #[test]
    fn imaging_department_is_fda_regulated() {
        assert!(ctx("Chest X-Ray Triage", "Imaging", "TX").is_fda_regulated());
        assert!(ctx("PathAssist", "Pathology Lab", "TX").is_fda_regulated());
    }

    #[test]
    fn fda_marker_in_name_also_matches() {
        assert!(ctx("Radiology Read Assistant", "Operations", "TX").is_fda_regulated());
    }

    #[test]
    fn billing_system_is_not_fda_regulated() {
        assert!(!ctx("Claims Coder", "Billing", "TX").is_fda_regulated());
    }

    #[test]
    fn hiring_system_is_employment_ai() {
        assert!(ctx("Resume Screening Ranker", "Talent", "NY").is_employment_ai());
        assert!(ctx("Nurse Recruiter Chat", "Human Resources", "NY").is_employment_ai());
        assert!(!ctx("Sepsis Early Warning", "ICU", "NY").is_employment_ai());
    }

    #[test]
    fn in_state_is_case_insensitive() {
        let c = ctx("Any", "Billing", "CA");
        assert!(c.in_state("ca"));
        assert!(c.in_state("CA"));
        assert!(!c.in_state("NY"));
    }

    #[test]
    fn summary_format() {
        let c = ctx("Sepsis Early Warning", "ICU", "TX");
        assert_eq!(c.summary(), "Sepsis Early Warning (ICU)");
    }
}
