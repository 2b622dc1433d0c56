//! Poll-loop transition integration tests.
//!
//! These tests drive the full engine (registry, locator, session tracker,
//! poll sweep) through fake host capabilities and assert on the exact
//! display-call sequences players see.

use zone_notify::{
    BlockPoint, DisplayError, DisplaySink, MemoryStore, NotifierConfig, PlayerId,
    PlayerSnapshot, WorldView, ZoneId, ZoneNotifier, ZoneRect,
};

// =============================================================================
// Fake host capabilities
// =============================================================================

/// Roster fixed at construction time.
struct FixedWorld(Vec<PlayerSnapshot>);

impl FixedWorld {
    fn solo(name: &str, x: f64, z: f64) -> Self {
        Self(vec![PlayerSnapshot::new(name, x, z)])
    }
}

impl WorldView for FixedWorld {
    fn players(&self) -> Vec<PlayerSnapshot> {
        self.0.clone()
    }
}

/// Records every display call as "player:op=text".
#[derive(Default)]
struct RecordingSink {
    calls: Vec<String>,
}

impl DisplaySink for RecordingSink {
    fn set_title(&mut self, player: &PlayerId, text: &str) -> Result<(), DisplayError> {
        self.calls.push(format!("{player}:title={text}"));
        Ok(())
    }

    fn set_subtitle(&mut self, player: &PlayerId, text: &str) -> Result<(), DisplayError> {
        self.calls.push(format!("{player}:subtitle={text}"));
        Ok(())
    }

    fn clear_title(&mut self, player: &PlayerId) -> Result<(), DisplayError> {
        self.calls.push(format!("{player}:clear"));
        Ok(())
    }
}

/// Fails every call for one player, records the rest.
struct GrudgeSink {
    grudge: PlayerId,
    inner: RecordingSink,
}

impl GrudgeSink {
    fn against(name: &str) -> Self {
        Self {
            grudge: PlayerId::new(name),
            inner: RecordingSink::default(),
        }
    }

    fn check(&mut self, player: &PlayerId) -> Result<(), DisplayError> {
        if player == &self.grudge {
            Err(DisplayError::new("screen unavailable"))
        } else {
            Ok(())
        }
    }
}

impl DisplaySink for GrudgeSink {
    fn set_title(&mut self, player: &PlayerId, text: &str) -> Result<(), DisplayError> {
        self.check(player)?;
        self.inner.set_title(player, text)
    }

    fn set_subtitle(&mut self, player: &PlayerId, text: &str) -> Result<(), DisplayError> {
        self.check(player)?;
        self.inner.set_subtitle(player, text)
    }

    fn clear_title(&mut self, player: &PlayerId) -> Result<(), DisplayError> {
        self.check(player)?;
        self.inner.clear_title(player)
    }
}

fn engine_with_town1() -> ZoneNotifier<MemoryStore> {
    let mut notifier = ZoneNotifier::new(NotifierConfig::new(), MemoryStore::new());
    notifier
        .create_zone(
            ZoneId::new("town1"),
            ZoneRect::new(BlockPoint::new(100, 200), 10, 10),
            "Town One",
            "Pop. 3",
        )
        .unwrap();
    notifier
}

// =============================================================================
// First evaluation
// =============================================================================

/// A player already out in the wilderness gets nothing on the first poll.
#[test]
fn test_first_poll_in_wilderness_is_silent() {
    let mut notifier = engine_with_town1();
    let mut sink = RecordingSink::default();

    notifier.sweep(&FixedWorld::solo("alex", 0.0, 0.0), &mut sink);

    assert!(sink.calls.is_empty());
}

/// A player who logs in standing inside a zone gets the enter notification.
#[test]
fn test_first_poll_inside_zone_notifies() {
    let mut notifier = engine_with_town1();
    let mut sink = RecordingSink::default();

    notifier.sweep(&FixedWorld::solo("alex", 105.0, 205.0), &mut sink);

    assert_eq!(
        sink.calls,
        ["alex:subtitle=Pop. 3", "alex:title=Town One"]
    );
}

// =============================================================================
// Exactly-once semantics
// =============================================================================

/// A stationary player is notified on the first of N polls, then never again.
#[test]
fn test_stationary_player_notified_once() {
    let mut notifier = engine_with_town1();
    let mut sink = RecordingSink::default();
    let world = FixedWorld::solo("alex", 105.0, 205.0);

    for _ in 0..5 {
        notifier.sweep(&world, &mut sink);
    }

    assert_eq!(sink.calls.len(), 2); // one subtitle + one title
}

/// Enter, leave, and re-enter produce three emissions in order.
#[test]
fn test_enter_exit_enter_cycle() {
    let mut notifier = engine_with_town1();
    let mut sink = RecordingSink::default();

    notifier.sweep(&FixedWorld::solo("alex", 105.0, 205.0), &mut sink);
    notifier.sweep(&FixedWorld::solo("alex", 500.0, 500.0), &mut sink);
    notifier.sweep(&FixedWorld::solo("alex", 100.0, 200.0), &mut sink);

    assert_eq!(
        sink.calls,
        [
            "alex:subtitle=Pop. 3",
            "alex:title=Town One",
            "alex:subtitle=Wilderness",
            "alex:clear",
            "alex:subtitle=Pop. 3",
            "alex:title=Town One",
        ]
    );
}

/// The exit indicator honors the configured wilderness text.
#[test]
fn test_exit_uses_configured_wilderness_subtitle() {
    let config = NotifierConfig::new().with_wilderness_subtitle("The Wilds");
    let mut notifier = ZoneNotifier::new(config, MemoryStore::new());
    notifier
        .create_zone(
            ZoneId::new("town1"),
            ZoneRect::new(BlockPoint::new(0, 0), 5, 5),
            "Town",
            "",
        )
        .unwrap();
    let mut sink = RecordingSink::default();

    notifier.sweep(&FixedWorld::solo("alex", 0.0, 0.0), &mut sink);
    notifier.sweep(&FixedWorld::solo("alex", 50.0, 50.0), &mut sink);

    assert_eq!(sink.calls[2], "alex:subtitle=The Wilds");
    assert_eq!(sink.calls[3], "alex:clear");
}

// =============================================================================
// Geometry at the boundary
// =============================================================================

/// Fractional positions floor onto the block grid before the test.
#[test]
fn test_fractional_positions_floor() {
    let mut notifier = engine_with_town1();
    let mut sink = RecordingSink::default();

    // 110.9 floors to 110, the inclusive east edge of town1.
    notifier.sweep(&FixedWorld::solo("alex", 110.9, 205.4), &mut sink);
    assert_eq!(sink.calls.len(), 2);

    // 111.0 is the first block outside.
    sink.calls.clear();
    notifier.sweep(&FixedWorld::solo("sam", 111.0, 205.4), &mut sink);
    assert!(sink.calls.is_empty());
}

/// With two overlapping zones, the one created first claims the player.
#[test]
fn test_overlap_notifies_oldest_zone() {
    let mut notifier = ZoneNotifier::new(NotifierConfig::new(), MemoryStore::new());
    notifier
        .create_zone(
            ZoneId::new("older"),
            ZoneRect::new(BlockPoint::new(0, 0), 10, 10),
            "Old Town",
            "",
        )
        .unwrap();
    notifier
        .create_zone(
            ZoneId::new("newer"),
            ZoneRect::new(BlockPoint::new(0, 0), 10, 10),
            "New Town",
            "",
        )
        .unwrap();
    let mut sink = RecordingSink::default();

    notifier.sweep(&FixedWorld::solo("alex", 0.0, 0.0), &mut sink);

    assert_eq!(sink.calls, ["alex:subtitle=", "alex:title=Old Town"]);
}

// =============================================================================
// Cadence
// =============================================================================

/// `tick` only sweeps when the configured interval elapses.
#[test]
fn test_tick_gates_on_poll_interval() {
    let config = NotifierConfig::new().with_poll_interval_ticks(3);
    let mut notifier = ZoneNotifier::new(config, MemoryStore::new());
    notifier
        .create_zone(
            ZoneId::new("town1"),
            ZoneRect::new(BlockPoint::new(0, 0), 5, 5),
            "Town",
            "",
        )
        .unwrap();
    let world = FixedWorld::solo("alex", 0.0, 0.0);
    let mut sink = RecordingSink::default();

    notifier.tick(&world, &mut sink);
    notifier.tick(&world, &mut sink);
    assert!(sink.calls.is_empty());

    notifier.tick(&world, &mut sink);
    assert_eq!(sink.calls.len(), 2);
}

// =============================================================================
// Failure containment
// =============================================================================

/// A display failure for one player does not block the rest of the roster,
/// and the failed player's transition still counts.
#[test]
fn test_sink_failure_is_contained_per_player() {
    let mut notifier = engine_with_town1();
    let mut sink = GrudgeSink::against("flaky");
    let world = FixedWorld(vec![
        PlayerSnapshot::new("flaky", 105.0, 205.0),
        PlayerSnapshot::new("steady", 105.0, 205.0),
    ]);

    notifier.sweep(&world, &mut sink);

    // Only the healthy player's calls were recorded.
    assert_eq!(
        sink.inner.calls,
        ["steady:subtitle=Pop. 3", "steady:title=Town One"]
    );

    // The failed player still transitioned, so the next sweep is silent.
    notifier.sweep(&world, &mut sink);
    assert_eq!(sink.inner.calls.len(), 2);
}

// =============================================================================
// Roster churn and zone deletion
// =============================================================================

/// Dropping off the roster emits nothing; forgetting the session makes a
/// return look like a fresh login.
#[test]
fn test_roster_churn_and_forget() {
    let mut notifier = engine_with_town1();
    let mut sink = RecordingSink::default();

    notifier.sweep(&FixedWorld::solo("alex", 105.0, 205.0), &mut sink);
    assert_eq!(sink.calls.len(), 2);

    // Player disconnects: absent from the roster, nothing is emitted.
    notifier.sweep(&FixedWorld(Vec::new()), &mut sink);
    assert_eq!(sink.calls.len(), 2);

    // Host cleans up; on return, the enter fires again.
    notifier.forget_player(&PlayerId::new("alex"));
    notifier.sweep(&FixedWorld::solo("alex", 105.0, 205.0), &mut sink);
    assert_eq!(sink.calls.len(), 4);
}

/// Deleting the zone a player stands in emits an exit on the next sweep.
#[test]
fn test_zone_deleted_underfoot_emits_exit() {
    let mut notifier = engine_with_town1();
    let mut sink = RecordingSink::default();
    let world = FixedWorld::solo("alex", 105.0, 205.0);

    notifier.sweep(&world, &mut sink);
    notifier.delete_zone(&ZoneId::new("town1")).unwrap();
    notifier.sweep(&world, &mut sink);

    assert_eq!(
        sink.calls[2..],
        ["alex:subtitle=Wilderness".to_owned(), "alex:clear".to_owned()]
    );
}
