//! # Risk Score Types
//!
//! The aggregate risk record derived from a translated event's violation
//! set. Never persisted as its own entity — always recomputed from the
//! violations, so the scoring logic (in `vigil-engine`) stays the single
//! source of truth.

use serde::{Deserialize, Serialize};

/// Qualitative risk level for a translated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Score below 2.
    Low,
    /// Score 2–4.
    Medium,
    /// Score 5–9.
    High,
    /// Score 10 or above.
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// Weighted risk score with a human-readable explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScore {
    /// Weighted sum over violation severities
    /// (critical×10 + high×5 + medium×2 + low×1).
    pub score: u32,
    /// Qualitative level derived from the score.
    pub level: RiskLevel,
    /// Human-readable contributing-factor descriptions, assembled by
    /// presence checks rather than a numeric breakdown.
    pub factors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering() {
        assert!(RiskLevel::Critical > RiskLevel::High);
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
    }

    #[test]
    fn serde_roundtrip() {
        let score = RiskScore {
            score: 12,
            level: RiskLevel::Critical,
            factors: vec!["1 critical violation".to_string()],
        };
        let json = serde_json::to_string(&score).unwrap();
        let back: RiskScore = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 12);
        assert_eq!(back.level, RiskLevel::Critical);
    }
}
