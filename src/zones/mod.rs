//! Zone system: geometry, display payloads, and the registry.
//!
//! ## Key Types
//!
//! - `ZoneRect`: Axis-aligned rectangle as center plus half-extents
//! - `Zone`: A rectangle with the title/subtitle shown on entry
//! - `ZoneRegistry`: Insertion-ordered id -> zone collection with CRUD and
//!   first-match point lookup
//!
//! ## Overlaps
//!
//! Rectangles may overlap freely; only ids are unique. Lookup walks the
//! registry in creation order and the first containing zone wins, so the
//! oldest zone always claims contested ground. Overlap is treated as an
//! authoring choice the engine does not try to resolve by area or recency.

pub mod definition;
pub mod registry;

pub use definition::{Zone, ZoneRect};
pub use registry::{RegistryError, ZoneRegistry};
