//! Zone definitions - geometry and display payload.
//!
//! A zone is an axis-aligned rectangle on the horizontal plane, stored as a
//! center block plus non-negative half-extents, together with the
//! title/subtitle a player sees when crossing into it.

use serde::{Deserialize, Serialize};

use crate::core::BlockPoint;

/// Axis-aligned rectangle: center block plus half-extents per axis.
///
/// The rectangle covers the closed range `[x-rx, x+rx] x [z-rz, z+rz]`,
/// inclusive on both ends. A half-extent of 0 is a single row of blocks.
///
/// ```
/// use zone_notify::{BlockPoint, ZoneRect};
///
/// let rect = ZoneRect::new(BlockPoint::new(100, 200), 10, 10);
///
/// assert!(rect.contains(BlockPoint::new(105, 205)));
/// assert!(rect.contains(BlockPoint::new(110, 210))); // edge is inside
/// assert!(!rect.contains(BlockPoint::new(111, 205)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRect {
    /// Center block, x axis.
    pub x: i64,
    /// Center block, z axis.
    pub z: i64,
    /// Half-extent along x. Non-negative by construction.
    pub rx: u32,
    /// Half-extent along z. Non-negative by construction.
    pub rz: u32,
}

impl ZoneRect {
    /// Create a rectangle centered on `center`.
    #[must_use]
    pub const fn new(center: BlockPoint, rx: u32, rz: u32) -> Self {
        Self {
            x: center.x,
            z: center.z,
            rx,
            rz,
        }
    }

    /// Center block of the rectangle.
    #[must_use]
    pub const fn center(&self) -> BlockPoint {
        BlockPoint::new(self.x, self.z)
    }

    /// Lowest contained x coordinate.
    #[must_use]
    pub const fn min_x(&self) -> i64 {
        self.x - self.rx as i64
    }

    /// Highest contained x coordinate.
    #[must_use]
    pub const fn max_x(&self) -> i64 {
        self.x + self.rx as i64
    }

    /// Lowest contained z coordinate.
    #[must_use]
    pub const fn min_z(&self) -> i64 {
        self.z - self.rz as i64
    }

    /// Highest contained z coordinate.
    #[must_use]
    pub const fn max_z(&self) -> i64 {
        self.z + self.rz as i64
    }

    /// Inclusive containment test.
    #[must_use]
    pub const fn contains(&self, p: BlockPoint) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.z >= self.min_z() && p.z <= self.max_z()
    }
}

/// A named settlement area: rectangle plus entry display payload.
///
/// The subtitle may be empty; the title is what the display sink renders
/// prominently. Instance identity (the zone id) lives in the registry key,
/// not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Rectangle the zone occupies.
    #[serde(flatten)]
    pub rect: ZoneRect,

    /// Title shown when a player enters.
    pub title: String,

    /// Subtitle shown when a player enters. May be empty.
    pub subtitle: String,
}

impl Zone {
    /// Create a new zone.
    #[must_use]
    pub fn new(rect: ZoneRect, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            rect,
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inclusive_bounds() {
        let rect = ZoneRect::new(BlockPoint::new(100, 200), 10, 10);

        assert!(rect.contains(BlockPoint::new(100, 200)));
        assert!(rect.contains(BlockPoint::new(90, 190)));
        assert!(rect.contains(BlockPoint::new(110, 210)));
        assert!(!rect.contains(BlockPoint::new(89, 200)));
        assert!(!rect.contains(BlockPoint::new(100, 211)));
    }

    #[test]
    fn test_zero_extent_is_single_row() {
        let rect = ZoneRect::new(BlockPoint::new(0, 0), 0, 0);

        assert!(rect.contains(BlockPoint::new(0, 0)));
        assert!(!rect.contains(BlockPoint::new(1, 0)));
        assert!(!rect.contains(BlockPoint::new(0, -1)));
    }

    #[test]
    fn test_bounds_accessors() {
        let rect = ZoneRect::new(BlockPoint::new(-5, 7), 3, 0);

        assert_eq!(rect.min_x(), -8);
        assert_eq!(rect.max_x(), -2);
        assert_eq!(rect.min_z(), 7);
        assert_eq!(rect.max_z(), 7);
        assert_eq!(rect.center(), BlockPoint::new(-5, 7));
    }

    #[test]
    fn test_zone_serializes_flat() {
        let zone = Zone::new(ZoneRect::new(BlockPoint::new(100, 200), 10, 5), "Town", "");
        let json = serde_json::to_value(&zone).unwrap();

        // Geometry fields sit next to the payload, not nested under "rect".
        assert_eq!(json["x"], 100);
        assert_eq!(json["z"], 200);
        assert_eq!(json["rx"], 10);
        assert_eq!(json["rz"], 5);
        assert_eq!(json["title"], "Town");
        assert_eq!(json["subtitle"], "");

        let back: Zone = serde_json::from_value(json).unwrap();
        assert_eq!(back, zone);
    }
}
