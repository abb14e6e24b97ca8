//! Short, non-secret identifier of the active session key.
//!
//! Logged at start-up so operators can tell which key an instance signs
//! cookies with after a rotation.

use actix_web::cookie::Key;
use sha2::{Digest, Sha256};

const FINGERPRINT_BYTES: usize = 8;

/// First 8 bytes of SHA-256 over the signing half of `key`, lowercase hex.
///
/// # Examples
/// ```
/// use actix_web::cookie::Key;
/// use invoicing::inbound::http::session_config::fingerprint::key_fingerprint;
///
/// let fp = key_fingerprint(&Key::generate());
/// assert_eq!(fp.len(), 16);
/// ```
#[must_use]
pub fn key_fingerprint(key: &Key) -> String {
    let digest = Sha256::digest(key.signing());
    hex::encode(&digest[..FINGERPRINT_BYTES])
}
