#![deny(missing_docs)]

//! # vigil-policy — Versioned Policy Resolution
//!
//! Connects the translation pipeline to the externally-authored compliance
//! rule bundles. This crate provides:
//!
//! - [`PolicyRuleLogic`] / [`ControlRule`]: the versioned, content-digested
//!   rule bundle keyed by `(event_type, framework)`.
//!
//! - [`PolicyStore`]: the collaborator trait for the external versioned
//!   store, with [`InMemoryPolicyStore`] as the seedable reference
//!   implementation.
//!
//! - [`PolicyLoader`]: the TTL-cached resolver with the absent-on-failure
//!   contract that lets the mapper run a non-blocking two-tier strategy
//!   (versioned policy when present, embedded static rules otherwise).
//!
//! ## Architecture
//!
//! ```text
//! policy store (external)  -->  vigil-policy (resolution)  -->  vigil-mapper (use)
//!   authored versions             PolicyLoader + TTL cache        two-tier rules
//!   activate/seed admin ops       PolicyOutcome tagging           RuleSource on violations
//! ```

pub mod loader;
pub mod rule;
pub mod store;

pub use loader::{PolicyLoader, PolicyOutcome, DEFAULT_TTL};
pub use rule::{ControlRule, PolicyRuleLogic};
pub use store::{InMemoryPolicyStore, PolicyStore, PolicyStoreError};
