//! # Policy Loader — TTL Cache with the Absent-on-Failure Contract
//!
//! Resolves `(event_type, framework)` to the active versioned rule bundle,
//! caching successful loads for a fixed time-to-live. Store misses and
//! store failures are logged here and converted to a tagged absent
//! outcome — they never propagate to the mapper, which falls back to its
//! embedded static rules. This keeps policy resolution non-blocking for
//! the translation pipeline: a down policy store degrades rule freshness,
//! not availability.
//!
//! ## Concurrency
//!
//! The cache is the only shared mutable structure in the engine. Reads
//! are short read-lock lookups with an `Instant` TTL check; population
//! takes the write lock last-writer-wins. Two threads racing on a cold
//! key may both query the store; the duplicate fetch is harmless.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{debug, warn};

use vigil_core::{EventType, FallbackReason, Framework};

use crate::rule::PolicyRuleLogic;
use crate::store::PolicyStore;

/// Default cache time-to-live: five minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// The outcome of a policy resolution.
///
/// Tagged rather than a bare `Option` so callers (and their tests) can
/// assert which path was taken without inspecting logs.
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyOutcome {
    /// The active versioned bundle was resolved (from cache or store).
    Loaded(PolicyRuleLogic),
    /// No bundle is available; the caller should use its static rules.
    Absent(FallbackReason),
}

impl PolicyOutcome {
    /// The resolved bundle, if one was loaded.
    pub fn loaded(&self) -> Option<&PolicyRuleLogic> {
        match self {
            Self::Loaded(bundle) => Some(bundle),
            Self::Absent(_) => None,
        }
    }
}

#[derive(Clone)]
struct CacheEntry {
    bundle: PolicyRuleLogic,
    cached_at: Instant,
}

/// The Policy Loader.
///
/// Constructed explicitly with its store and injected wherever policy
/// resolution is needed; the cache lifecycle (construct, warm, clear) is
/// owned by whoever owns the loader.
pub struct PolicyLoader {
    store: Arc<dyn PolicyStore>,
    cache: RwLock<HashMap<(EventType, Framework), CacheEntry>>,
    ttl: Duration,
}

impl PolicyLoader {
    /// Create a loader with the default five-minute TTL.
    pub fn new(store: Arc<dyn PolicyStore>) -> Self {
        Self::with_ttl(store, DEFAULT_TTL)
    }

    /// Create a loader with an explicit TTL (tests use short TTLs).
    pub fn with_ttl(store: Arc<dyn PolicyStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Resolve the active policy for `(event_type, framework)`.
    ///
    /// Cache hit within TTL returns without touching the store. On miss
    /// or expiry the store is queried; a successful load is cached.
    /// "No active policy" and store errors both produce an absent
    /// outcome — only successes are cached, so a failed store is retried
    /// on the next event rather than poisoning the cache for a TTL
    /// window.
    pub fn get_policy(&self, event_type: EventType, framework: Framework) -> PolicyOutcome {
        let key = (event_type, framework);

        if let Some(entry) = self.cache.read().get(&key) {
            if entry.cached_at.elapsed() < self.ttl {
                return PolicyOutcome::Loaded(entry.bundle.clone());
            }
        }

        match self.store.get_active_policy(event_type, framework) {
            Ok(Some(bundle)) => {
                debug!(
                    event_type = %event_type,
                    framework = %framework,
                    version = %bundle.version,
                    "policy loaded from store"
                );
                self.cache.write().insert(
                    key,
                    CacheEntry {
                        bundle: bundle.clone(),
                        cached_at: Instant::now(),
                    },
                );
                PolicyOutcome::Loaded(bundle)
            }
            Ok(None) => {
                debug!(
                    event_type = %event_type,
                    framework = %framework,
                    "no active policy; caller falls back to static rules"
                );
                PolicyOutcome::Absent(FallbackReason::NoActivePolicy)
            }
            Err(err) => {
                warn!(
                    event_type = %event_type,
                    framework = %framework,
                    error = %err,
                    "policy store failed; caller falls back to static rules"
                );
                PolicyOutcome::Absent(FallbackReason::StoreUnavailable)
            }
        }
    }

    /// Eagerly resolve the warm framework set (HIPAA, NIST AI RMF,
    /// FDA SaMD) for each given event type.
    ///
    /// Used at startup so the first real events do not pay cold-cache
    /// store latency. Absent outcomes are fine here — they simply mean
    /// those keys will use static rules.
    pub fn warm_cache(&self, event_types: &[EventType]) {
        for &event_type in event_types {
            for &framework in Framework::warm_set() {
                let _ = self.get_policy(event_type, framework);
            }
        }
        debug!(
            cached = self.cached_len(),
            warmed_types = event_types.len(),
            "policy cache warmed"
        );
    }

    /// Drop all cached entries. Used after an administrative policy
    /// update so the next resolution re-reads the store.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    /// Number of currently cached entries (including expired ones not
    /// yet overwritten).
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }
}
