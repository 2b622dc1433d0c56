//! Core engine types: block points, id newtypes, configuration.
//!
//! This module contains the fundamental building blocks that are
//! host-agnostic. Hosts configure the engine via `NotifierConfig` rather
//! than modifying the core.

pub mod point;
pub mod ids;
pub mod config;

pub use point::BlockPoint;
pub use ids::{PlayerId, ZoneId};
pub use config::NotifierConfig;
