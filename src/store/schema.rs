//! Serialized registry format.
//!
//! The whole registry round-trips through one JSON document with an
//! explicit version field, so future field additions are a deliberate
//! migration instead of a silent parse failure:
//!
//! ```json
//! {
//!   "version": 1,
//!   "zones": [
//!     {"id": "town1", "x": 100, "z": 200, "rx": 10, "rz": 10,
//!      "title": "Town One", "subtitle": "Pop. 3"}
//!   ]
//! }
//! ```
//!
//! Zones are an ordered array, so creation order survives the round trip
//! and lookup tie-breaks behave identically after a restart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ZoneId;
use crate::zones::{Zone, ZoneRegistry};

/// Current blob schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Why a blob could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not valid JSON, or not the expected document shape.
    #[error("malformed registry blob: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Valid document written by a schema this build does not know.
    #[error("unsupported registry blob version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Serialize, Deserialize)]
struct RegistryBlob {
    version: u32,
    zones: Vec<ZoneRecord>,
}

#[derive(Serialize, Deserialize)]
struct ZoneRecord {
    id: ZoneId,
    #[serde(flatten)]
    zone: Zone,
}

/// Serialize the full registry to a blob string.
pub fn encode(registry: &ZoneRegistry) -> Result<String, serde_json::Error> {
    let blob = RegistryBlob {
        version: SCHEMA_VERSION,
        zones: registry
            .iter()
            .map(|(id, zone)| ZoneRecord {
                id: id.clone(),
                zone: zone.clone(),
            })
            .collect(),
    };

    serde_json::to_string(&blob)
}

/// Rebuild a registry from a blob string.
pub fn decode(blob: &str) -> Result<ZoneRegistry, DecodeError> {
    let parsed: RegistryBlob = serde_json::from_str(blob)?;

    if parsed.version != SCHEMA_VERSION {
        return Err(DecodeError::UnsupportedVersion(parsed.version));
    }

    let mut registry = ZoneRegistry::new();
    for record in parsed.zones {
        if registry.create(record.id.clone(), record.zone).is_err() {
            // A repeated id can only come from a hand-edited blob; keep the
            // first occurrence, matching lookup tie-break rules.
            log::warn!("duplicate zone id '{}' in stored blob, ignoring", record.id);
        }
    }

    Ok(registry)
}
