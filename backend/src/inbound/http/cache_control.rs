//! Cache-control policies for HTTP responses.
//!
//! Server-side freshness is handled by the view cache; browsers and shared
//! proxies must never reuse a per-user page.

use actix_web::http::header::CACHE_CONTROL;

/// Private responses must always be revalidated before reuse.
pub const PRIVATE_NO_CACHE_MUST_REVALIDATE: &str = "private, no-cache, must-revalidate";

/// Probe and redirect responses are never stored.
pub const NO_STORE: &str = "no-store";

/// Header tuple for private dashboard data.
pub const fn private_no_cache_header() -> (actix_web::http::header::HeaderName, &'static str) {
    (CACHE_CONTROL, PRIVATE_NO_CACHE_MUST_REVALIDATE)
}

/// Header tuple for responses that must not be stored at all.
pub const fn no_store_header() -> (actix_web::http::header::HeaderName, &'static str) {
    (CACHE_CONTROL, NO_STORE)
}
