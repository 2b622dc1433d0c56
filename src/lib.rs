//! # zone-notify
//!
//! A settlement zone notification engine for open-world game hosts.
//!
//! Authors overlay named rectangular zones ("settlements", "cities") on the
//! world. The engine watches every active player's position and shows a
//! title/subtitle when they cross into a zone, and a neutral wilderness
//! indicator when they leave. Zones are created in-game, persisted across
//! restarts, and looked up continuously on a fixed poll cadence.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The engine never talks to a game server directly.
//!    Hosts implement the capability traits in [`host`] and [`store`]
//!    (`WorldView`, `DisplaySink`, `KeyValueStore`) and drive
//!    [`ZoneNotifier::tick`] from their scheduler. An adapter that cannot
//!    implement a capability fails to compile, instead of failing per call
//!    at runtime.
//!
//! 2. **Exactly-Once Transitions**: Enter/exit notifications are driven by
//!    each player's previously tracked membership, never by tick-to-tick
//!    position deltas. Standing still re-notifies nothing; a restart
//!    produces no spurious exit.
//!
//! 3. **Durable By Default**: Every registry mutation persists the full
//!    registry synchronously before the call returns. Corrupted persisted
//!    state is discarded with a warning, never a crash.
//!
//! ## Modules
//!
//! - `core`: Block points, id newtypes, engine configuration
//! - `zones`: Zone geometry, display payloads, the insertion-ordered registry
//! - `store`: Key-value persistence of the registry as a versioned JSON blob
//! - `session`: Per-player membership and the enter/exit state machine
//! - `poll`: Fixed-cadence roster sweep and display emission
//! - `requests`: Command/form request parsing and handling
//! - `host`: Capability traits the embedding host implements

pub mod core;
pub mod zones;
pub mod store;
pub mod session;
pub mod host;
pub mod poll;
pub mod requests;

mod notifier;

// Re-export commonly used types
pub use crate::core::{BlockPoint, NotifierConfig, PlayerId, ZoneId};

pub use crate::zones::{RegistryError, Zone, ZoneRect, ZoneRegistry};

pub use crate::store::{BackendError, KeyValueStore, MemoryStore, StoreError, ZoneStore};

pub use crate::session::{Membership, SessionTracker, Transition};

pub use crate::host::{DisplayError, DisplaySink, PlayerSnapshot, WorldView};

pub use crate::poll::PollLoop;

pub use crate::requests::{FormRequest, Request, RequestError};

pub use crate::notifier::ZoneNotifier;
