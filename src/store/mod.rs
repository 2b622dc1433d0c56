//! Registry persistence.
//!
//! `ZoneStore` owns the well-known storage key and the load/save policy on
//! top of a [`KeyValueStore`] backend:
//!
//! - `load` never fails: an absent blob is an empty registry, and an
//!   unreadable one is discarded with a warning. Bad persisted state must
//!   never take the engine down at startup.
//! - `save` serializes the whole registry in one write. On failure it warns
//!   and leaves the previous blob untouched; the in-memory registry stays
//!   authoritative until the next successful save.

pub mod backend;
pub mod schema;

use thiserror::Error;

use crate::zones::ZoneRegistry;

pub use backend::{BackendError, KeyValueStore, MemoryStore};
pub use schema::{DecodeError, SCHEMA_VERSION};

/// Error from a `save`.
///
/// Already logged by the time the caller sees it; surfaced for callers that
/// want to react beyond the default keep-running policy.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Registry could not be serialized.
    #[error("failed to encode zone registry: {0}")]
    Encode(#[from] serde_json::Error),

    /// Backend rejected the write.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Persists the zone registry as a single blob under a fixed key.
pub struct ZoneStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueStore> ZoneStore<B> {
    /// Create a store over `backend`, using `key` as the blob slot.
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Load the registry, falling back to empty on absence or corruption.
    #[must_use]
    pub fn load(&self) -> ZoneRegistry {
        let Some(blob) = self.backend.get(&self.key) else {
            return ZoneRegistry::new();
        };

        match schema::decode(&blob) {
            Ok(registry) => registry,
            Err(err) => {
                log::warn!("discarding unreadable zone blob under '{}': {err}", self.key);
                ZoneRegistry::new()
            }
        }
    }

    /// Serialize and write the full registry.
    ///
    /// Failures are warn-logged here; the previous blob is left as it was.
    pub fn save(&mut self, registry: &ZoneRegistry) -> Result<(), StoreError> {
        let result = schema::encode(registry)
            .map_err(StoreError::from)
            .and_then(|blob| self.backend.set(&self.key, blob).map_err(StoreError::from));

        if let Err(err) = &result {
            log::warn!("failed to save zone registry under '{}': {err}", self.key);
        }
        result
    }

    /// Access the underlying backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
