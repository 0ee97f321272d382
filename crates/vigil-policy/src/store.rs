//! # Policy Store — Collaborator Trait & In-Memory Implementation
//!
//! The versioned policy store is an external collaborator (typically a
//! database fronted by an encryption layer). This module defines the
//! trait the loader consumes, plus [`InMemoryPolicyStore`] — a versioned
//! implementation used for embedding, seeding, and tests.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::info;

use vigil_core::{EventType, Framework};

use crate::rule::PolicyRuleLogic;

/// Errors surfaced by a policy store.
///
/// The loader absorbs every one of these — they are logged at the loader
/// boundary and converted to an absent outcome, never propagated to the
/// mapper.
#[derive(Error, Debug)]
pub enum PolicyStoreError {
    /// The store could not be reached.
    #[error("policy store unavailable: {0}")]
    Unavailable(String),

    /// A stored record could not be decoded.
    #[error("malformed policy record for {event_type}/{framework}: {detail}")]
    Malformed {
        /// The event type of the record.
        event_type: EventType,
        /// The framework of the record.
        framework: Framework,
        /// Decoding failure description.
        detail: String,
    },
}

/// The versioned policy store collaborator.
///
/// `get_active_policy` returns the currently-active bundle version for a
/// key, or `None` when no version is active. Implementations own their
/// transport; callers apply their own call-level timeouts.
pub trait PolicyStore: Send + Sync {
    /// Fetch the active policy bundle for `(event_type, framework)`.
    fn get_active_policy(
        &self,
        event_type: EventType,
        framework: Framework,
    ) -> Result<Option<PolicyRuleLogic>, PolicyStoreError>;
}

/// One stored version of a bundle.
#[derive(Debug, Clone)]
struct StoredVersion {
    bundle: PolicyRuleLogic,
    author: String,
    active: bool,
}

/// An in-memory versioned policy store.
///
/// Holds every seeded version per `(event_type, framework)` key and marks
/// at most one active. Seeding activates the new version and deactivates
/// its predecessors, mirroring the administrative activate operation of
/// the production store.
#[derive(Default)]
pub struct InMemoryPolicyStore {
    // BTreeMap for deterministic iteration in dumps and tests.
    versions: RwLock<BTreeMap<(EventType, Framework), Vec<StoredVersion>>>,
}

impl InMemoryPolicyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a batch of bundles, activating each as the current version
    /// for its key.
    pub fn seed_policies(&self, bundles: Vec<PolicyRuleLogic>, author: &str) {
        let mut versions = self.versions.write();
        for bundle in bundles {
            let key = (bundle.event_type, bundle.framework);
            let entry = versions.entry(key).or_default();
            for prior in entry.iter_mut() {
                prior.active = false;
            }
            info!(
                event_type = %bundle.event_type,
                framework = %bundle.framework,
                version = %bundle.version,
                digest = %bundle.content_digest(),
                author,
                "seeded policy version"
            );
            entry.push(StoredVersion {
                bundle,
                author: author.to_string(),
                active: true,
            });
        }
    }

    /// Activate a previously seeded version by its version string.
    ///
    /// Returns `false` if no such version exists for the key.
    pub fn activate_version(
        &self,
        event_type: EventType,
        framework: Framework,
        version: &str,
    ) -> bool {
        let mut versions = self.versions.write();
        let Some(entry) = versions.get_mut(&(event_type, framework)) else {
            return false;
        };
        if !entry.iter().any(|v| v.bundle.version == version) {
            return false;
        }
        for stored in entry.iter_mut() {
            stored.active = stored.bundle.version == version;
        }
        true
    }

    /// Number of stored versions for a key (all versions, not just active).
    pub fn version_count(&self, event_type: EventType, framework: Framework) -> usize {
        self.versions
            .read()
            .get(&(event_type, framework))
            .map_or(0, Vec::len)
    }

    /// The author of the currently-active version, if any.
    pub fn active_author(&self, event_type: EventType, framework: Framework) -> Option<String> {
        self.versions
            .read()
            .get(&(event_type, framework))
            .and_then(|entry| entry.iter().find(|v| v.active))
            .map(|v| v.author.clone())
    }
}

impl PolicyStore for InMemoryPolicyStore {
    fn get_active_policy(
        &self,
        event_type: EventType,
        framework: Framework,
    ) -> Result<Option<PolicyRuleLogic>, PolicyStoreError> {
        Ok(self
            .versions
            .read()
            .get(&(event_type, framework))
            .and_then(|entry| entry.iter().find(|v| v.active))
            .map(|v| v.bundle.clone()))
    }
}
