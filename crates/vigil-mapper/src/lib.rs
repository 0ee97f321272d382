#![deny(missing_docs)]

//! # vigil-mapper — Compliance Mapper
//!
//! Resolves normalized events against regulatory frameworks to produce
//! concrete [`ComplianceViolation`]s. One handler per standardized event
//! type, registered in a single lookup table; each handler follows the
//! same two-tier strategy:
//!
//! 1. Threshold-gated decision (per-health-system breakpoints) on whether
//!    a violation fires and at what severity tier.
//! 2. Policy resolution through the injected [`PolicyLoader`]; an active
//!    versioned bundle supplies the control fields verbatim, the embedded
//!    static rules otherwise.
//! 3. Context-gated secondary violations: FDA SaMD for FDA-regulated
//!    systems, state laws for matching jurisdictions, the unconditional
//!    HIPAA pair for PHI breaches.
//!
//! Within one mapped event, `(framework, control_id)` is unique — the
//! mapper deduplicates before returning.

pub mod handlers;
pub mod rules;
pub mod thresholds;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use vigil_core::{AISystemContext, ComplianceViolation, NormalizedEvent};
use vigil_policy::PolicyLoader;

pub use handlers::{Handler, HandlerRegistry, MapCtx};
pub use thresholds::{StaticThresholds, ThresholdSet, ThresholdSource, TierThresholds};

/// The Compliance Mapper.
///
/// Constructed explicitly with its policy loader and injected into the
/// translation engine. Holds no per-event state; the loader's cache is
/// the only shared structure behind it.
pub struct ComplianceMapper {
    loader: Arc<PolicyLoader>,
    registry: HandlerRegistry,
}

impl ComplianceMapper {
    /// Create a mapper with the standard handler registry.
    pub fn new(loader: Arc<PolicyLoader>) -> Self {
        Self {
            loader,
            registry: HandlerRegistry::standard(),
        }
    }

    /// Map a normalized event to its violations.
    ///
    /// Returns an empty vector when the event violates nothing (within
    /// tolerance, or unclassified). Duplicate `(framework, control_id)`
    /// pairs are dropped with a warning — handlers are written not to
    /// produce them, so a drop here indicates a handler bug.
    pub fn map_to_violations(
        &self,
        event: &NormalizedEvent,
        system: &AISystemContext,
        thresholds: &ThresholdSet,
    ) -> Vec<ComplianceViolation> {
        let ctx = MapCtx {
            event,
            system,
            thresholds,
            loader: &self.loader,
        };

        let violations = match self.registry.handler_for(event.event_type) {
            Some(handler) => handler(&ctx),
            None => {
                // standard() covers the whole taxonomy; this arm exists
                // for registries constructed by hand in tests.
                warn!(event_type = %event.event_type, "no handler registered");
                Vec::new()
            }
        };

        dedup_by_control(violations)
    }

    /// Access the policy loader (cache lifecycle operations).
    pub fn loader(&self) -> &PolicyLoader {
        &self.loader
    }
}

/// Keep the first violation per `(framework, control_id)` pair.
fn dedup_by_control(violations: Vec<ComplianceViolation>) -> Vec<ComplianceViolation> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(violations.len());
    for violation in violations {
        let key = (violation.framework, violation.control_id.clone());
        if seen.insert(key) {
            unique.push(violation);
        } else {
            warn!(
                framework = %violation.framework,
                control_id = %violation.control_id,
                "duplicate violation dropped"
            );
        }
    }
    unique
}
