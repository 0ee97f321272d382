//! # Error Hierarchy
//!
//! Structured error types for the Vigil stack, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! The taxonomy mirrors the translation pipeline's failure semantics:
//! classification ambiguity is not an error (normalization is total),
//! policy-store failures are absorbed at the loader boundary and never
//! appear here, and only context-lookup and handler failures abort a
//! translation.

use thiserror::Error;

use crate::identity::SystemId;

/// Top-level error type for the Vigil stack.
#[derive(Error, Debug)]
pub enum VigilError {
    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Translation pipeline failure.
    #[error("translation error: {0}")]
    Translation(#[from] TranslationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// State code is not two ASCII letters.
    #[error("invalid state code: \"{0}\" (expected two ASCII letters, e.g. CA)")]
    InvalidStateCode(String),

    /// Confidence value outside `[0, 1]`.
    #[error("invalid confidence: {0} (expected a value in [0, 1])")]
    InvalidConfidence(f64),
}

/// Errors that abort a single translation invocation.
///
/// A failed translation leaves the event unprocessed; at-least-once retry
/// is the caller's responsibility. Partial violation sets are never
/// returned — they are unsafe to act on.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The system registry has no context for the monitored system.
    /// Violations cannot be attributed without it.
    #[error("no registry context for system {system_id}")]
    SystemContextNotFound {
        /// The system the raw event referenced.
        system_id: SystemId,
    },

    /// The system registry call itself failed.
    #[error("registry lookup failed for system {system_id}: {detail}")]
    RegistryLookup {
        /// The system the raw event referenced.
        system_id: SystemId,
        /// Underlying failure description.
        detail: String,
    },
}
