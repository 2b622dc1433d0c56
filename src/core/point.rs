//! Integer world coordinates.
//!
//! Zone geometry and containment tests work on whole blocks. Fractional
//! world positions are floored once, at the boundary where the host hands
//! them to the engine, so a player standing anywhere inside a block always
//! resolves to that block.

use serde::{Deserialize, Serialize};

/// A horizontal world position, snapped to the block grid.
///
/// Only the two horizontal axes participate in zone membership; height is
/// ignored by design.
///
/// ```
/// use zone_notify::BlockPoint;
///
/// let p = BlockPoint::from_world(105.7, 205.2);
/// assert_eq!(p, BlockPoint::new(105, 205));
///
/// // Flooring, not truncation: negative positions round toward -infinity.
/// let q = BlockPoint::from_world(-0.5, -1.9);
/// assert_eq!(q, BlockPoint::new(-1, -2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPoint {
    pub x: i64,
    pub z: i64,
}

impl BlockPoint {
    /// Create a block point from whole coordinates.
    #[must_use]
    pub const fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }

    /// Floor fractional world coordinates onto the block grid.
    #[must_use]
    pub fn from_world(x: f64, z: f64) -> Self {
        Self {
            x: x.floor() as i64,
            z: z.floor() as i64,
        }
    }
}

impl std::fmt::Display for BlockPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.z)
    }
}
