//! External request surface.
//!
//! Authors manage zones two ways: free-text command payloads relayed by the
//! host (`zone:set`, `zone:del`, `zone:list`) and a structured form UI.
//! Both lower into the same [`Request`] enum, so validation and semantics
//! cannot drift between surfaces.
//!
//! Replies are plain strings handed back to the caller; delivering them to
//! the requesting player (chat line, confirmation sound) is host policy.

pub mod request;
pub mod handler;

pub use request::{parse_command, FormRequest, Request, RequestError};
pub use handler::{apply, handle_command, handle_form};
