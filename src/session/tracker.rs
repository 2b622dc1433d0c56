//! Enter/exit transition state machine.
//!
//! Per player, membership is one of: absent (never evaluated), inside a
//! zone, or known to be in wilderness. Transitions fire exactly once per
//! boundary crossing because they are computed from the previous tracked
//! state, not from position deltas. That makes the machine tolerant of
//! missed polls (no re-notification) and makes the very first evaluation
//! after startup silent for players already out in the wild: absent is not
//! "was in a zone".
//!
//! Session state is process-lifetime only. It is never persisted, so a
//! restart resets everyone to absent.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, ZoneId};

/// Last-known zone membership of a tracked player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Membership {
    /// Player was last seen inside this zone.
    InZone(ZoneId),
    /// Player was last seen outside every zone.
    Wilderness,
}

/// A boundary crossing detected between two consecutive evaluations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Player crossed into a zone (possibly directly from another zone).
    Entered(ZoneId),
    /// Player left a zone for the wilderness.
    Exited,
}

/// Tracks membership per player and computes transitions.
///
/// ## Example
///
/// ```
/// use zone_notify::{PlayerId, SessionTracker, Transition, ZoneId};
///
/// let mut sessions = SessionTracker::new();
/// let alex = PlayerId::new("alex");
/// let town = ZoneId::new("town1");
///
/// // First evaluation in the wilderness: no transition.
/// assert_eq!(sessions.observe(&alex, None), None);
///
/// // Crossing in fires once; standing still fires nothing.
/// assert_eq!(
///     sessions.observe(&alex, Some(&town)),
///     Some(Transition::Entered(town.clone()))
/// );
/// assert_eq!(sessions.observe(&alex, Some(&town)), None);
///
/// // Leaving fires the exit.
/// assert_eq!(sessions.observe(&alex, None), Some(Transition::Exited));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionTracker {
    members: FxHashMap<PlayerId, Membership>,
}

impl SessionTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one locator result for `player`; returns the transition, if any.
    ///
    /// State updates before the caller performs any side effect, so a
    /// failed display call still counts as a completed transition and is
    /// not retried on the next poll.
    pub fn observe(&mut self, player: &PlayerId, found: Option<&ZoneId>) -> Option<Transition> {
        match found {
            Some(id) => {
                let already_inside = matches!(
                    self.members.get(player),
                    Some(Membership::InZone(current)) if current == id
                );
                if already_inside {
                    return None;
                }

                self.members
                    .insert(player.clone(), Membership::InZone(id.clone()));
                Some(Transition::Entered(id.clone()))
            }
            None => {
                if matches!(self.members.get(player), Some(Membership::InZone(_))) {
                    self.members.insert(player.clone(), Membership::Wilderness);
                    Some(Transition::Exited)
                } else {
                    // Absent and Wilderness both stay silent.
                    None
                }
            }
        }
    }

    /// Last-known membership, or `None` if never evaluated.
    #[must_use]
    pub fn membership(&self, player: &PlayerId) -> Option<&Membership> {
        self.members.get(player)
    }

    /// Drop a player's entry, e.g. on disconnect.
    ///
    /// Stale entries are harmless (disconnected players stop being polled),
    /// so calling this is optional housekeeping.
    pub fn forget(&mut self, player: &PlayerId) -> Option<Membership> {
        self.members.remove(player)
    }

    /// Number of players with tracked state.
    #[must_use]
    pub fn tracked_players(&self) -> usize {
        self.members.len()
    }
}
