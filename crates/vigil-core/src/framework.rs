//! # Regulatory Frameworks & Violation Classification
//!
//! Defines the [`Framework`] enum — the closed set of regulatory regimes
//! the translation engine classifies against — and [`ViolationType`].
//!
//! Framework serde names match the wire identifiers used by policy
//! authoring (`HIPAA`, `NIST_AI_RMF`, `FDA_SaMD`, ...), not snake_case,
//! because rule bundles are keyed by these strings.

use serde::{Deserialize, Serialize};

/// A named regulatory regime a violation can be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Framework {
    /// Health Insurance Portability and Accountability Act.
    #[serde(rename = "HIPAA")]
    Hipaa,
    /// NIST AI Risk Management Framework.
    #[serde(rename = "NIST_AI_RMF")]
    NistAiRmf,
    /// FDA Software as a Medical Device guidance.
    #[serde(rename = "FDA_SaMD")]
    FdaSamd,
    /// ISO/IEC 42001 AI management systems.
    #[serde(rename = "ISO_42001")]
    Iso42001,
    /// California breach notification law.
    #[serde(rename = "CA_BREACH")]
    CaliforniaBreach,
    /// New York City Local Law 144 (automated employment decision tools).
    #[serde(rename = "NYC_LL144")]
    NycLl144,
}

impl Framework {
    /// The frameworks eagerly resolved during cache warming.
    ///
    /// These three carry the bulk of healthcare AI rule volume; the state
    /// laws are context-gated and cheap to resolve lazily.
    pub fn warm_set() -> &'static [Framework] {
        &[Self::Hipaa, Self::NistAiRmf, Self::FdaSamd]
    }

    /// Return all frameworks as a slice.
    pub fn all() -> &'static [Framework] {
        &[
            Self::Hipaa,
            Self::NistAiRmf,
            Self::FdaSamd,
            Self::Iso42001,
            Self::CaliforniaBreach,
            Self::NycLl144,
        ]
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Hipaa => "HIPAA",
            Self::NistAiRmf => "NIST_AI_RMF",
            Self::FdaSamd => "FDA_SaMD",
            Self::Iso42001 => "ISO_42001",
            Self::CaliforniaBreach => "CA_BREACH",
            Self::NycLl144 => "NYC_LL144",
        };
        write!(f, "{s}")
    }
}

/// How a control was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// Protected data was actually exposed or accessed.
    Breach,
    /// Conduct deviated from a required process or safeguard.
    Deviation,
    /// A monitored metric crossed a configured limit.
    ThresholdExceeded,
}

impl std::fmt::Display for ViolationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Breach => "breach",
            Self::Deviation => "deviation",
            Self::ThresholdExceeded => "threshold_exceeded",
        };
        write!(f, "{s}")
    }
}
