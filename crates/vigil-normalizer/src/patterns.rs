//! # Classification Pattern Tables
//!
//! The ordered rule table that maps vendor free-text event/metric strings
//! onto the standardized taxonomy. Rules are grouped by category in
//! precedence order (privacy → security → performance → safety →
//! fairness → quality) and evaluated top to bottom; the first match wins.
//!
//! Each rule carries two match tiers:
//!
//! - **exact**: the raw event type string equals one of the listed names
//!   (case-insensitive). Scores the rule's higher confidence (0.91–0.96).
//! - **keyword**: one of the listed fragments occurs in the concatenated
//!   lower-cased event-type + metric text. Scores the lower confidence
//!   (0.83–0.90).
//!
//! The exact tier is checked across the whole table before any keyword
//! is considered, so canonical names cannot be shadowed by an earlier
//! rule's keyword.

use vigil_core::{EventType, Severity};

/// One classification rule in the ordered table.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    /// The standardized type this rule classifies into.
    pub event_type: EventType,
    /// Raw event type names matched by equality.
    pub exact_types: &'static [&'static str],
    /// Fragments matched by substring over `"<raw_type> <raw_metric>"`.
    pub keywords: &'static [&'static str],
    /// Confidence for an exact-type match.
    pub confidence_exact: f64,
    /// Confidence for a keyword match.
    pub confidence_keyword: f64,
    /// Severity assigned when no metric-derived override applies.
    pub default_severity: Severity,
}

/// A successful classification with the confidence tier that matched.
#[derive(Debug, Clone, Copy)]
pub struct PatternMatch {
    /// The rule that matched.
    pub rule: &'static ClassificationRule,
    /// Confidence of the match (exact or keyword tier).
    pub confidence: f64,
}

/// The ordered classification table.
///
/// Category order is the classification precedence; within a category,
/// more specific rules precede broader ones.
pub const RULES: &[ClassificationRule] = &[
    // ─── Privacy ────────────────────────────────────────────────────
    ClassificationRule {
        event_type: EventType::PhiExposure,
        exact_types: &["phi_exposure", "phi_leak", "phi_breach"],
        // "phi" needs a boundary: it is a substring of "demographic".
        keywords: &["phi_", " phi ", "phi exposure", "protected health", "patient data leak"],
        confidence_exact: 0.96,
        confidence_keyword: 0.90,
        default_severity: Severity::Critical,
    },
    ClassificationRule {
        event_type: EventType::DataRetentionViolation,
        exact_types: &["data_retention_violation", "retention_violation"],
        keywords: &["retention", "purge overdue", "expired data"],
        confidence_exact: 0.93,
        confidence_keyword: 0.85,
        default_severity: Severity::Medium,
    },
    ClassificationRule {
        event_type: EventType::ConsentViolation,
        exact_types: &["consent_violation"],
        keywords: &["consent"],
        confidence_exact: 0.93,
        confidence_keyword: 0.86,
        default_severity: Severity::High,
    },
    // ─── Security ───────────────────────────────────────────────────
    ClassificationRule {
        event_type: EventType::UnauthorizedAccess,
        exact_types: &["unauthorized_access", "access_violation"],
        keywords: &["unauthorized", "privilege escalation", "access anomaly"],
        confidence_exact: 0.95,
        confidence_keyword: 0.88,
        default_severity: Severity::High,
    },
    ClassificationRule {
        event_type: EventType::PromptInjection,
        exact_types: &["prompt_injection"],
        keywords: &["prompt injection", "jailbreak", "injection attempt"],
        confidence_exact: 0.94,
        confidence_keyword: 0.87,
        default_severity: Severity::High,
    },
    ClassificationRule {
        event_type: EventType::CredentialMisuse,
        exact_types: &["credential_misuse"],
        keywords: &["credential", "api key abuse", "token misuse"],
        confidence_exact: 0.92,
        confidence_keyword: 0.84,
        default_severity: Severity::High,
    },
    // ─── Performance ────────────────────────────────────────────────
    ClassificationRule {
        event_type: EventType::ModelDrift,
        exact_types: &["model_drift", "data_drift", "concept_drift"],
        keywords: &["drift", "distribution shift", "population stability"],
        confidence_exact: 0.95,
        confidence_keyword: 0.88,
        default_severity: Severity::Medium,
    },
    ClassificationRule {
        event_type: EventType::AccuracyDegradation,
        exact_types: &["accuracy_degradation", "model_degradation"],
        keywords: &["accuracy", "auc drop", "f1 drop", "precision drop"],
        confidence_exact: 0.94,
        confidence_keyword: 0.87,
        default_severity: Severity::Medium,
    },
    ClassificationRule {
        event_type: EventType::LatencySpike,
        exact_types: &["latency_spike"],
        keywords: &["latency", "response time", "p99"],
        confidence_exact: 0.93,
        confidence_keyword: 0.85,
        default_severity: Severity::Low,
    },
    ClassificationRule {
        event_type: EventType::ErrorRateSpike,
        exact_types: &["error_rate_spike"],
        keywords: &["error rate", "failure rate", "timeout rate", "5xx"],
        confidence_exact: 0.93,
        confidence_keyword: 0.85,
        default_severity: Severity::Medium,
    },
    // ─── Safety ─────────────────────────────────────────────────────
    ClassificationRule {
        event_type: EventType::HallucinationDetected,
        exact_types: &["hallucination_detected", "hallucination"],
        keywords: &["hallucinat", "fabricat", "confabulat"],
        confidence_exact: 0.94,
        confidence_keyword: 0.87,
        default_severity: Severity::High,
    },
    ClassificationRule {
        event_type: EventType::UnsafeRecommendation,
        exact_types: &["unsafe_recommendation"],
        keywords: &["unsafe", "contraindicat", "dosage error"],
        confidence_exact: 0.95,
        confidence_keyword: 0.89,
        default_severity: Severity::Critical,
    },
    ClassificationRule {
        event_type: EventType::DiagnosticError,
        exact_types: &["diagnostic_error"],
        keywords: &["misdiagnos", "diagnostic error", "false negative dx"],
        confidence_exact: 0.94,
        confidence_keyword: 0.87,
        default_severity: Severity::Critical,
    },
    ClassificationRule {
        event_type: EventType::MissedCriticalFinding,
        exact_types: &["missed_critical_finding"],
        keywords: &["missed finding", "critical finding", "missed detection"],
        confidence_exact: 0.94,
        confidence_keyword: 0.88,
        default_severity: Severity::Critical,
    },
    // ─── Fairness ───────────────────────────────────────────────────
    ClassificationRule {
        event_type: EventType::DemographicDisparity,
        exact_types: &["demographic_disparity", "bias_detected"],
        keywords: &["demographic", "disparity", "parity difference", "bias"],
        confidence_exact: 0.93,
        confidence_keyword: 0.86,
        default_severity: Severity::High,
    },
    ClassificationRule {
        event_type: EventType::EqualizedOddsViolation,
        exact_types: &["equalized_odds_violation"],
        keywords: &["equalized odds", "equal opportunity", "odds difference"],
        confidence_exact: 0.93,
        confidence_keyword: 0.86,
        default_severity: Severity::High,
    },
    ClassificationRule {
        event_type: EventType::EmploymentScreeningBias,
        exact_types: &["employment_screening_bias"],
        keywords: &["employment bias", "hiring bias", "screening bias", "candidate ranking"],
        confidence_exact: 0.92,
        confidence_keyword: 0.85,
        default_severity: Severity::High,
    },
    // ─── Quality ────────────────────────────────────────────────────
    ClassificationRule {
        event_type: EventType::DataQualityIssue,
        exact_types: &["data_quality_issue"],
        keywords: &["data quality", "missing values", "null rate", "completeness"],
        confidence_exact: 0.91,
        confidence_keyword: 0.83,
        default_severity: Severity::Medium,
    },
    ClassificationRule {
        event_type: EventType::OutputFormatAnomaly,
        exact_types: &["output_format_anomaly"],
        keywords: &["malformed output", "schema violation", "format anomaly"],
        confidence_exact: 0.91,
        confidence_keyword: 0.83,
        default_severity: Severity::Low,
    },
    // UnclassifiedAnomaly has no patterns: it is the fallback type,
    // assigned only when nothing above matches.
];

/// Classify the raw event-type and metric strings against the ordered
/// rule table. Returns `None` when no rule matches (fallback case).
///
/// The exact tier is evaluated across the whole table before any keyword
/// tier: a connector that names the canonical type always lands on that
/// type, even when the name happens to contain another rule's keyword
/// (`employment_screening_bias` contains `bias`). Within each tier,
/// first match wins in table order.
pub fn classify(raw_event_type: &str, raw_metric: &str) -> Option<PatternMatch> {
    let event_type_lower = raw_event_type.trim().to_lowercase();
    let haystack = format!("{} {}", event_type_lower, raw_metric.trim().to_lowercase());

    for rule in RULES {
        if rule
            .exact_types
            .iter()
            .any(|t| *t == event_type_lower.as_str())
        {
            return Some(PatternMatch {
                rule,
                confidence: rule.confidence_exact,
            });
        }
    }

    for rule in RULES {
        if rule.keywords.iter().any(|k| haystack.contains(k)) {
            return Some(PatternMatch {
                rule,
                confidence: rule.confidence_keyword,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::EventCategory;

    #[test]
    fn exact_match_beats_keyword_confidence() {
        let exact = classify("phi_exposure", "").unwrap();
        let keyword = classify("vendor_alert", "phi detected in output").unwrap();
        assert_eq!(exact.rule.event_type, EventType::PhiExposure);
        assert_eq!(keyword.rule.event_type, EventType::PhiExposure);
        assert!(exact.confidence > keyword.confidence);
    }

    #[test]
    fn all_confidences_within_documented_band() {
        for rule in RULES {
            assert!(
                (0.83..=0.96).contains(&rule.confidence_keyword),
                "{:?} keyword confidence out of band",
                rule.event_type
            );
            assert!(
                (0.83..=0.96).contains(&rule.confidence_exact),
                "{:?} exact confidence out of band",
                rule.event_type
            );
            assert!(rule.confidence_exact > rule.confidence_keyword);
        }
    }

    #[test]
    fn table_is_ordered_by_category_precedence() {
        let categories: Vec<EventCategory> =
            RULES.iter().map(|r| r.event_type.category()).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted, "rules must be grouped in precedence order");
    }

    #[test]
    fn every_type_except_fallback_has_a_rule() {
        for &t in EventType::all() {
            if t == EventType::UnclassifiedAnomaly {
                continue;
            }
            assert!(
                RULES.iter().any(|r| r.event_type == t),
                "no classification rule for {t}"
            );
        }
        assert!(
            RULES
                .iter()
                .all(|r| r.event_type != EventType::UnclassifiedAnomaly),
            "fallback type must not appear in the table"
        );
    }

    #[test]
    fn legacy_names_land_on_canonical_types() {
        assert_eq!(
            classify("phi_leak", "").unwrap().rule.event_type,
            EventType::PhiExposure
        );
        assert_eq!(
            classify("data_drift", "").unwrap().rule.event_type,
            EventType::ModelDrift
        );
        assert_eq!(
            classify("model_degradation", "").unwrap().rule.event_type,
            EventType::AccuracyDegradation
        );
        assert_eq!(
            classify("bias_detected", "").unwrap().rule.event_type,
            EventType::DemographicDisparity
        );
    }

    #[test]
    fn privacy_precedes_performance_on_overlap() {
        // "phi" (privacy keyword) appears alongside "latency" (performance);
        // privacy is earlier in the table and must win.
        let m = classify("vendor_alert", "phi count in latency log").unwrap();
        assert_eq!(m.rule.event_type, EventType::PhiExposure);
    }

    #[test]
    fn unmatched_returns_none() {
        assert!(classify("heartbeat", "uptime").is_none());
        assert!(classify("", "").is_none());
    }

    #[test]
    fn canonical_names_always_land_on_their_own_variant() {
        for rule in RULES {
            for name in rule.exact_types {
                let m = classify(name, "").unwrap();
                assert_eq!(
                    m.rule.event_type, rule.event_type,
                    "{name} classified as {:?}",
                    m.rule.event_type
                );
            }
        }
    }
}
