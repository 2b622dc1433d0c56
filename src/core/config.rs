//! Engine configuration.
//!
//! Hosts configure the notifier at startup. Every field has a default that
//! matches the stock in-game behavior; builder methods override per host.

use serde::{Deserialize, Serialize};

/// Storage key the registry blob lives under when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "zone_database";

/// Poll cadence in host ticks (~2.5 s at 20 ticks/s).
pub const DEFAULT_POLL_INTERVAL_TICKS: u32 = 50;

/// Subtitle shown when a player leaves a zone for open land.
pub const DEFAULT_WILDERNESS_SUBTITLE: &str = "Wilderness";

/// Notifier configuration.
///
/// ## Defaults
///
/// - `storage_key`: `"zone_database"`
/// - `poll_interval_ticks`: 50
/// - `wilderness_subtitle`: `"Wilderness"`
///
/// ```
/// use zone_notify::NotifierConfig;
///
/// let config = NotifierConfig::new()
///     .with_poll_interval_ticks(20)
///     .with_wilderness_subtitle("The Wilds");
///
/// assert_eq!(config.poll_interval_ticks, 20);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Key-value slot the serialized registry is stored under.
    pub storage_key: String,

    /// How many host ticks pass between roster sweeps. Clamped to >= 1.
    pub poll_interval_ticks: u32,

    /// Subtitle text emitted on zone exit. Display markup is the host
    /// adapter's concern; the engine emits it verbatim.
    pub wilderness_subtitle: String,
}

impl NotifierConfig {
    /// Create a configuration with stock defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage key for the registry blob.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the poll cadence in host ticks. Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_poll_interval_ticks(mut self, ticks: u32) -> Self {
        self.poll_interval_ticks = ticks.max(1);
        self
    }

    /// Set the subtitle text emitted on zone exit.
    #[must_use]
    pub fn with_wilderness_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.wilderness_subtitle = subtitle.into();
        self
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            poll_interval_ticks: DEFAULT_POLL_INTERVAL_TICKS,
            wilderness_subtitle: DEFAULT_WILDERNESS_SUBTITLE.to_owned(),
        }
    }
}
