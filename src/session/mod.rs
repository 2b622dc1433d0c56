//! Per-player session state.
//!
//! The tracker remembers each player's last-known zone membership and turns
//! successive locator results into enter/exit transitions. It holds no
//! display logic; the poll loop performs emissions from the transitions it
//! returns.

pub mod tracker;

pub use tracker::{Membership, SessionTracker, Transition};
