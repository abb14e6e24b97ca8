//! Request middleware.
//!
//! Request lifecycle concerns: correlation ids and the dashboard sign-in
//! guard.

pub mod require_session;
pub mod trace;

pub use require_session::RequireSession;
pub use trace::Trace;
