#![deny(missing_docs)]

//! # vigil-core — Foundational Types for the Vigil Stack
//!
//! This crate defines the foundational types that every other crate in the
//! workspace depends on. It has no internal crate dependencies — only `serde`,
//! `serde_json`, `thiserror`, `chrono`, `uuid`, and `sha2` from the external
//! ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass a [`SystemId`] where a
//!    [`HealthSystemId`] is expected.
//!
//! 2. **Single [`EventType`] taxonomy.** One definition, 20 variants across
//!    6 categories, exhaustive `match` everywhere. No independent event
//!    lists that can diverge between the normalizer and the mapper.
//!
//! 3. **UTC-only [`Timestamp`].** All deadline arithmetic (HIPAA 60-day
//!    notification, FDA 30-day reporting) flows through one temporal type.
//!
//! 4. **[`VigilError`] hierarchy.** Structured errors with `thiserror` — no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod action;
pub mod context;
pub mod digest;
pub mod error;
pub mod event;
pub mod framework;
pub mod identity;
pub mod metric;
pub mod risk;
pub mod temporal;
pub mod violation;

// Re-export primary types at crate root for ergonomic imports.
pub use action::{ActionPriority, ActionType, AssigneeRole, RequiredAction};
pub use context::{AISystemContext, RiskTier, StateCode};
pub use digest::{sha256_bytes, ContentDigest, DigestAlgorithm};
pub use error::{TranslationError, ValidationError, VigilError};
pub use event::{EventCategory, EventType, NormalizedEvent, RawTelemetryEvent, Severity};
pub use framework::{Framework, ViolationType};
pub use identity::{HealthSystemId, SystemId, VendorId, ViolationId};
pub use risk::{RiskLevel, RiskScore};
pub use temporal::Timestamp;
pub use violation::{ComplianceViolation, FallbackReason, RuleSource};
