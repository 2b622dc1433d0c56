//! Engine facade: registry + store + sessions + poll cadence.
//!
//! `ZoneNotifier` is the object a host embeds. It is the only mutation path
//! for the registry, which is what makes the durability contract hold:
//! every successful create/delete has already been handed to the store
//! before the call returns.
//!
//! All state is owned here and passed explicitly into the collaborating
//! modules; there are no globals, so several notifiers (e.g. one per world)
//! can coexist and everything is testable without a live host.

use crate::core::{NotifierConfig, PlayerId, ZoneId};
use crate::host::{DisplaySink, WorldView};
use crate::poll::{self, PollLoop};
use crate::session::{Membership, SessionTracker};
use crate::store::{KeyValueStore, ZoneStore};
use crate::zones::{RegistryError, Zone, ZoneRect, ZoneRegistry};

/// The settlement notification engine.
///
/// ## Example
///
/// ```
/// use zone_notify::{
///     BlockPoint, MemoryStore, NotifierConfig, ZoneId, ZoneNotifier, ZoneRect,
/// };
///
/// let mut notifier = ZoneNotifier::new(NotifierConfig::new(), MemoryStore::new());
///
/// let rect = ZoneRect::new(BlockPoint::new(100, 200), 10, 10);
/// notifier
///     .create_zone(ZoneId::new("town1"), rect, "Town One", "Pop. 3")
///     .unwrap();
///
/// assert_eq!(notifier.registry().len(), 1);
/// ```
pub struct ZoneNotifier<B: KeyValueStore> {
    config: NotifierConfig,
    registry: ZoneRegistry,
    store: ZoneStore<B>,
    sessions: SessionTracker,
    poll: PollLoop,
}

impl<B: KeyValueStore> ZoneNotifier<B> {
    /// Create the engine and load any persisted registry from `backend`.
    ///
    /// Corrupted persisted state is discarded with a warning; startup never
    /// fails because of it.
    #[must_use]
    pub fn new(config: NotifierConfig, backend: B) -> Self {
        let store = ZoneStore::new(backend, config.storage_key.clone());
        let registry = store.load();
        if !registry.is_empty() {
            log::info!("loaded {} zone(s) from storage", registry.len());
        }

        let poll = PollLoop::new(config.poll_interval_ticks);
        Self {
            config,
            registry,
            store,
            sessions: SessionTracker::new(),
            poll,
        }
    }

    /// Register a new zone and persist the registry.
    ///
    /// A failed save is warn-logged and does not roll the creation back;
    /// the in-memory registry stays authoritative and the next successful
    /// save re-persists everything.
    pub fn create_zone(
        &mut self,
        id: ZoneId,
        rect: ZoneRect,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.registry.create(id, Zone::new(rect, title, subtitle))?;
        let _ = self.store.save(&self.registry); // failure already logged
        Ok(())
    }

    /// Delete a zone and persist the registry.
    pub fn delete_zone(&mut self, id: &ZoneId) -> Result<Zone, RegistryError> {
        let zone = self.registry.delete(id)?;
        let _ = self.store.save(&self.registry); // failure already logged
        Ok(zone)
    }

    /// The zone registry.
    #[must_use]
    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// A player's last-known membership, if any.
    #[must_use]
    pub fn membership(&self, player: &PlayerId) -> Option<&Membership> {
        self.sessions.membership(player)
    }

    /// Drop a player's session entry, e.g. on disconnect.
    pub fn forget_player(&mut self, player: &PlayerId) -> Option<Membership> {
        self.sessions.forget(player)
    }

    /// Advance one host tick; runs a roster sweep when the cadence fires.
    ///
    /// Call this from the host's fixed-rate scheduler callback.
    pub fn tick<W: WorldView, D: DisplaySink>(&mut self, world: &W, display: &mut D) {
        if self.poll.tick() {
            self.sweep(world, display);
        }
    }

    /// Run a roster sweep immediately, regardless of cadence.
    ///
    /// `tick` is the normal driver; this is the direct entry point for
    /// hosts with their own scheduling and for tests.
    pub fn sweep<W: WorldView, D: DisplaySink>(&mut self, world: &W, display: &mut D) {
        poll::sweep(
            &self.registry,
            &mut self.sessions,
            &self.config.wilderness_subtitle,
            world,
            display,
        );
    }

    /// Access the persistence layer, e.g. to inspect the stored blob.
    #[must_use]
    pub fn store(&self) -> &ZoneStore<B> {
        &self.store
    }
}
