//! Zone registry: insertion-ordered CRUD and point lookup.
//!
//! The registry owns the full zone set. Iteration order is creation order,
//! and `locate` walks that order, which makes overlap resolution stable:
//! the first (oldest) zone containing a point always wins.
//!
//! Duplicate and missing ids are expected outcomes of user requests, not
//! programmer errors, so the mutating operations return `Result` instead of
//! panicking.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{BlockPoint, ZoneId};

use super::definition::Zone;

/// Error from a registry mutation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `create` was given an id that is already registered.
    #[error("zone '{0}' already exists")]
    AlreadyExists(ZoneId),

    /// `delete` was given an id that is not registered.
    #[error("zone '{0}' not found")]
    NotFound(ZoneId),
}

/// Insertion-ordered collection of zones, keyed by id.
///
/// ## Example
///
/// ```
/// use zone_notify::{BlockPoint, Zone, ZoneId, ZoneRect, ZoneRegistry};
///
/// let mut registry = ZoneRegistry::new();
/// let rect = ZoneRect::new(BlockPoint::new(100, 200), 10, 10);
/// registry
///     .create(ZoneId::new("town1"), Zone::new(rect, "Town", "Pop. 3"))
///     .unwrap();
///
/// let (id, _zone) = registry.locate(BlockPoint::new(105, 205)).unwrap();
/// assert_eq!(id.as_str(), "town1");
/// assert!(registry.locate(BlockPoint::new(111, 205)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneRegistry {
    zones: FxHashMap<ZoneId, Zone>,

    /// Creation order of the ids in `zones`. Registries are small, so the
    /// index usually lives inline.
    order: SmallVec<[ZoneId; 8]>,
}

impl ZoneRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone at the end of iteration order.
    ///
    /// Fails without modifying the registry if the id is already present.
    pub fn create(&mut self, id: ZoneId, zone: Zone) -> Result<(), RegistryError> {
        if self.zones.contains_key(&id) {
            return Err(RegistryError::AlreadyExists(id));
        }

        self.order.push(id.clone());
        self.zones.insert(id, zone);
        Ok(())
    }

    /// Remove a zone, returning it.
    pub fn delete(&mut self, id: &ZoneId) -> Result<Zone, RegistryError> {
        let zone = self
            .zones
            .remove(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;

        self.order.retain(|z| z != id);
        Ok(zone)
    }

    /// Get a zone by id.
    #[must_use]
    pub fn get(&self, id: &ZoneId) -> Option<&Zone> {
        self.zones.get(id)
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: &ZoneId) -> bool {
        self.zones.contains_key(id)
    }

    /// Get the number of registered zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterate over `(id, zone)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&ZoneId, &Zone)> {
        self.order.iter().map(move |id| {
            let zone = self
                .zones
                .get(id)
                .expect("order index and zone map are kept in sync");
            (id, zone)
        })
    }

    /// Find the first zone containing `point`, in creation order.
    ///
    /// Later-created overlapping zones are never considered once an earlier
    /// one matches.
    #[must_use]
    pub fn locate(&self, point: BlockPoint) -> Option<(&ZoneId, &Zone)> {
        self.iter().find(|(_, zone)| zone.rect.contains(point))
    }
}
