#![deny(missing_docs)]

//! # vigil-engine — Translation Engine
//!
//! The orchestrator that turns one [`RawTelemetryEvent`] into one
//! [`TranslatedEvent`]: normalize, look up system context, map to
//! violations, score, generate actions, decide escalation. Stages run in
//! strict order; a failure at any stage (other than policy resolution,
//! which never propagates) aborts the whole invocation and the event is
//! considered unprocessed — at-least-once retry is the caller's
//! responsibility, and no partial progress is persisted here.
//!
//! ## Construction
//!
//! The engine is built explicitly from its collaborators — no process
//! singletons. The policy cache lives in the injected loader and keeps
//! its own lifecycle (construct, warm, clear).
//!
//! ```
//! use std::sync::Arc;
//! use vigil_engine::{InMemorySystemRegistry, TranslationEngine};
//! use vigil_mapper::StaticThresholds;
//! use vigil_policy::{InMemoryPolicyStore, PolicyLoader};
//!
//! let registry = Arc::new(InMemorySystemRegistry::new());
//! let loader = Arc::new(PolicyLoader::new(Arc::new(InMemoryPolicyStore::new())));
//! let engine = TranslationEngine::new(
//!     registry,
//!     Arc::new(StaticThresholds::default()),
//!     loader,
//! );
//! engine.warm();
//! ```

pub mod actions;
pub mod escalation;
pub mod registry;
pub mod risk;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use vigil_core::{
    ComplianceViolation, EventType, NormalizedEvent, RawTelemetryEvent, RequiredAction, RiskScore,
    Timestamp, TranslationError,
};
use vigil_mapper::{ComplianceMapper, ThresholdSource};
use vigil_normalizer::Normalizer;
use vigil_policy::PolicyLoader;

pub use actions::{generate_actions, ActionGroup, ActionPlan};
pub use escalation::{escalation_path, escalation_required, EscalationRole};
pub use registry::{InMemorySystemRegistry, RegistryError, SystemRegistry};
pub use risk::score_violations;

/// The pipeline stages of one translation invocation, in order.
///
/// Recorded on tracing events so an aborted invocation shows how far it
/// got. No stage state persists across invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationStage {
    /// Raw event accepted.
    Received,
    /// Standardized classification derived.
    Normalized,
    /// Violations resolved.
    Mapped,
    /// Risk score computed.
    Scored,
    /// Remediation actions generated.
    ActionsGenerated,
    /// Escalation decision made.
    EscalationDecided,
    /// Terminal output assembled.
    Done,
}

impl std::fmt::Display for TranslationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Received => "received",
            Self::Normalized => "normalized",
            Self::Mapped => "mapped",
            Self::Scored => "scored",
            Self::ActionsGenerated => "actions_generated",
            Self::EscalationDecided => "escalation_decided",
            Self::Done => "done",
        };
        write!(f, "{s}")
    }
}

/// The engine's terminal output: everything derived from one raw event.
///
/// Immutable once produced. Persistence of violations, actions, and the
/// score is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatedEvent {
    /// The standardized classification of the raw event.
    pub normalized: NormalizedEvent,
    /// All violations, deduplicated by `(framework, control_id)`.
    pub violations: Vec<ComplianceViolation>,
    /// Flattened action list across all violations.
    pub actions: Vec<RequiredAction>,
    /// Actions grouped by the violation that produced them.
    pub action_plan: ActionPlan,
    /// Aggregate risk for the violation set.
    pub risk: RiskScore,
    /// Whether the event must be escalated.
    pub escalation_required: bool,
    /// The ordered role chain to notify when escalating.
    pub escalation_path: Vec<EscalationRole>,
    /// When this translation completed.
    pub processed_at: Timestamp,
}

/// The Translation Engine.
///
/// Holds no cross-event mutable state beyond the policy loader's cache;
/// invocations are independent and may run concurrently.
pub struct TranslationEngine {
    normalizer: Normalizer,
    mapper: ComplianceMapper,
    registry: Arc<dyn SystemRegistry>,
    thresholds: Arc<dyn ThresholdSource>,
}

impl TranslationEngine {
    /// Build an engine from its collaborators.
    pub fn new(
        registry: Arc<dyn SystemRegistry>,
        thresholds: Arc<dyn ThresholdSource>,
        loader: Arc<PolicyLoader>,
    ) -> Self {
        Self {
            normalizer: Normalizer::new(),
            mapper: ComplianceMapper::new(loader),
            registry,
            thresholds,
        }
    }

    /// Eagerly warm the policy cache across the whole taxonomy.
    pub fn warm(&self) {
        self.mapper.loader().warm_cache(EventType::all());
    }

    /// Access the policy loader (for `clear_cache` after an
    /// administrative policy update).
    pub fn policy_loader(&self) -> &PolicyLoader {
        self.mapper.loader()
    }

    /// Translate one raw telemetry event.
    ///
    /// # Errors
    ///
    /// [`TranslationError::SystemContextNotFound`] when the registry has
    /// no snapshot for the event's system, and
    /// [`TranslationError::RegistryLookup`] when the registry call
    /// itself fails. Policy-store failures never surface here — the
    /// mapper falls back to its static rules.
    pub fn translate(
        &self,
        raw: &RawTelemetryEvent,
    ) -> Result<TranslatedEvent, TranslationError> {
        let span = info_span!("translate", system_id = %raw.system_id, source = %raw.source_platform);
        let _guard = span.enter();

        let normalized = self.normalizer.normalize(raw);
        debug!(
            stage = %TranslationStage::Normalized,
            event_type = %normalized.event_type,
            severity = %normalized.severity,
            confidence = normalized.confidence,
            "event normalized"
        );

        let context = self
            .registry
            .get_context(&raw.system_id)
            .map_err(|err| TranslationError::RegistryLookup {
                system_id: raw.system_id,
                detail: err.to_string(),
            })?
            .ok_or(TranslationError::SystemContextNotFound {
                system_id: raw.system_id,
            })?;

        let thresholds = self.thresholds.get_thresholds(&context.health_system_id);
        let violations = self
            .mapper
            .map_to_violations(&normalized, &context, &thresholds);
        debug!(
            stage = %TranslationStage::Mapped,
            violations = violations.len(),
            "violations mapped"
        );

        let risk = score_violations(&violations);
        debug!(stage = %TranslationStage::Scored, score = risk.score, level = %risk.level, "risk scored");

        let action_plan = generate_actions(&violations);
        let actions = action_plan.flattened();
        debug!(
            stage = %TranslationStage::ActionsGenerated,
            actions = actions.len(),
            "actions generated"
        );

        let escalation_required = escalation_required(&violations);
        let escalation_path = if escalation_required {
            escalation_path(&violations)
        } else {
            Vec::new()
        };
        debug!(
            stage = %TranslationStage::EscalationDecided,
            escalation_required,
            "escalation decided"
        );

        Ok(TranslatedEvent {
            normalized,
            violations,
            actions,
            action_plan,
            risk,
            escalation_required,
            escalation_path,
            processed_at: Timestamp::now(),
        })
    }
}
