//! Capability traits the embedding host implements.
//!
//! The engine observes the world and renders notifications only through
//! these seams. A host adapter implements all of them up front; there are
//! no per-call "does the API exist" probes, so an incompatible host surfaces
//! at compile time.
//!
//! ## Implementation Notes
//!
//! - `WorldView::players` is called fresh on every sweep; return the current
//!   roster, not a cached one. Players absent from the roster are simply not
//!   evaluated.
//! - `DisplaySink` calls arrive in a fixed order (subtitle before title on
//!   entry, wilderness subtitle before the title clear on exit) because some
//!   on-screen displays only render a subtitle when a title update follows.
//! - A `DisplaySink` error aborts the remaining calls for that player only;
//!   the sweep continues with the rest of the roster.

use thiserror::Error;

use crate::core::PlayerId;

/// Error from a display call.
///
/// Hosts construct this from whatever their display API reports. The engine
/// warn-logs it; the transition that triggered the call stands either way.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("display call failed: {0}")]
pub struct DisplayError(pub String);

impl DisplayError {
    /// Create a display error with a host-provided message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// One player as seen by the host this instant.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerSnapshot {
    /// Stable identity the session tracker keys on.
    pub id: PlayerId,

    /// World x coordinate, fractional. Floored by the engine.
    pub x: f64,

    /// World z coordinate, fractional. Floored by the engine.
    pub z: f64,
}

impl PlayerSnapshot {
    /// Create a snapshot.
    #[must_use]
    pub fn new(id: impl Into<PlayerId>, x: f64, z: f64) -> Self {
        Self { id: id.into(), x, z }
    }
}

/// Read access to the active player roster and positions.
pub trait WorldView {
    /// Current roster with positions. Evaluated fresh each sweep.
    fn players(&self) -> Vec<PlayerSnapshot>;
}

/// On-screen title/subtitle rendering for one player.
pub trait DisplaySink {
    /// Show `text` as the player's title.
    fn set_title(&mut self, player: &PlayerId, text: &str) -> Result<(), DisplayError>;

    /// Show `text` as the player's subtitle.
    fn set_subtitle(&mut self, player: &PlayerId, text: &str) -> Result<(), DisplayError>;

    /// Remove the player's current title.
    fn clear_title(&mut self, player: &PlayerId) -> Result<(), DisplayError>;
}
