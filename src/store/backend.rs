//! Key-value persistence capability.
//!
//! The engine treats persistence as an opaque string-per-key substrate; on
//! a game server this is typically a world-scoped dynamic property. Hosts
//! implement `KeyValueStore` over whatever they have. `MemoryStore` ships
//! for tests and for embedding without durable storage.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Error from a backend write.
///
/// Hosts construct this from whatever their storage substrate reports; the
/// engine only logs it and moves on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("storage backend write failed: {0}")]
pub struct BackendError(pub String);

impl BackendError {
    /// Create a backend error with a host-provided message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// String-blob storage keyed by name.
///
/// Reads are infallible from the engine's point of view: a backend that
/// cannot read reports the key as absent, and the store falls back to an
/// empty registry.
pub trait KeyValueStore {
    /// Read the blob under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the blob under `key` in a single call.
    fn set(&mut self, key: &str, value: String) -> Result<(), BackendError>;
}

/// In-memory `KeyValueStore`.
///
/// ```
/// use zone_notify::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("k", "v".to_owned()).unwrap();
/// assert_eq!(store.get("k").as_deref(), Some("v"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot, e.g. with a blob captured from a previous run.
    #[must_use]
    pub fn with_slot(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), BackendError> {
        self.slots.insert(key.to_owned(), value);
        Ok(())
    }
}
