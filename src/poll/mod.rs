//! Fixed-cadence roster sweep.
//!
//! The host calls into the engine on every scheduler tick; `PollLoop` gates
//! that down to one sweep per configured interval. A sweep evaluates each
//! active player independently: floor the position, locate the containing
//! zone, feed the session tracker, and emit display calls for any
//! transition. One player's display failure never stops the rest of the
//! roster from being evaluated.

use crate::core::{BlockPoint, PlayerId};
use crate::host::{DisplayError, DisplaySink, WorldView};
use crate::session::{SessionTracker, Transition};
use crate::zones::{Zone, ZoneRegistry};

/// Counts host ticks and reports when a sweep is due.
///
/// ```
/// use zone_notify::PollLoop;
///
/// let mut poll = PollLoop::new(3);
/// assert!(!poll.tick());
/// assert!(!poll.tick());
/// assert!(poll.tick()); // third tick fires
/// assert!(!poll.tick());
/// ```
#[derive(Clone, Debug)]
pub struct PollLoop {
    interval: u32,
    elapsed: u32,
}

impl PollLoop {
    /// Create a cadence gate firing every `interval_ticks`. Clamped to >= 1.
    #[must_use]
    pub fn new(interval_ticks: u32) -> Self {
        Self {
            interval: interval_ticks.max(1),
            elapsed: 0,
        }
    }

    /// Advance one tick; returns `true` when a sweep is due.
    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}

/// Evaluate the whole roster once against the registry.
///
/// Session state updates before emission, so a failed display call counts
/// as a completed transition and is not retried next sweep.
pub fn sweep<W: WorldView, D: DisplaySink>(
    registry: &ZoneRegistry,
    sessions: &mut SessionTracker,
    wilderness_subtitle: &str,
    world: &W,
    display: &mut D,
) {
    for player in world.players() {
        let point = BlockPoint::from_world(player.x, player.z);
        let found = registry.locate(point);

        let Some(transition) = sessions.observe(&player.id, found.map(|(id, _)| id)) else {
            continue;
        };

        let emitted = match &transition {
            Transition::Entered(id) => {
                log::debug!("player {} entered zone {id} at {point}", player.id);
                let zone = found.map(|(_, zone)| zone).expect(
                    "an enter transition is only produced from a located zone",
                );
                emit_enter(display, &player.id, zone)
            }
            Transition::Exited => {
                log::debug!("player {} left for the wilderness at {point}", player.id);
                emit_exit(display, &player.id, wilderness_subtitle)
            }
        };

        if let Err(err) = emitted {
            log::warn!("display emission failed for player {}: {err}", player.id);
        }
    }
}

/// Subtitle first, then title: the ordering contract of the display seam.
fn emit_enter<D: DisplaySink>(
    display: &mut D,
    player: &PlayerId,
    zone: &Zone,
) -> Result<(), DisplayError> {
    display.set_subtitle(player, &zone.subtitle)?;
    display.set_title(player, &zone.title)
}

/// Wilderness subtitle first, then the title clear.
fn emit_exit<D: DisplaySink>(
    display: &mut D,
    player: &PlayerId,
    wilderness_subtitle: &str,
) -> Result<(), DisplayError> {
    display.set_subtitle(player, wilderness_subtitle)?;
    display.clear_title(player)
}
