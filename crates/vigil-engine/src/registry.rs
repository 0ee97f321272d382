//! # System Registry — Collaborator Trait
//!
//! The external registry supplying read-only [`AISystemContext`]
//! snapshots. Unlike policy resolution, a failed or empty context lookup
//! is fatal for the invocation: violations cannot be attributed without
//! knowing whose system produced the event.

use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;

use vigil_core::{AISystemContext, SystemId};

/// Errors surfaced by a system registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry could not be reached.
    #[error("system registry unavailable: {0}")]
    Unavailable(String),
}

/// The AI-system registry collaborator.
pub trait SystemRegistry: Send + Sync {
    /// Fetch the context snapshot for a monitored system.
    ///
    /// `Ok(None)` means the system is unknown to the registry.
    fn get_context(&self, system_id: &SystemId) -> Result<Option<AISystemContext>, RegistryError>;
}

/// An in-memory registry for embedding and tests.
#[derive(Default)]
pub struct InMemorySystemRegistry {
    systems: RwLock<HashMap<SystemId, AISystemContext>>,
}

impl InMemorySystemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a system snapshot.
    pub fn insert(&self, context: AISystemContext) {
        self.systems.write().insert(context.system_id, context);
    }
}

impl SystemRegistry for InMemorySystemRegistry {
    fn get_context(&self, system_id: &SystemId) -> Result<Option<AISystemContext>, RegistryError> {
        Ok(self.systems.read().get(system_id).cloned())
    }
}
