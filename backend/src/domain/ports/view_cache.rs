//! Port for cached, already-rendered views keyed by request path.
//!
//! Every path carries a generation that `invalidate` advances. A reader that
//! missed remembers the generation it saw and hands it back to `put`, so a
//! body rendered from data read before an invalidation is never stored.
use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by the view cache adapter.
    pub enum ViewCacheError {
        /// Cache backend is unavailable.
        Backend { message: String } => "view cache backend failure: {message}",
    }
}

/// Result of looking a path up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedView {
    /// A stored body.
    Hit(String),
    /// Nothing stored; pass `generation` back to [`ViewCache::put`].
    Miss { generation: u64 },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewCache: Send + Sync {
    /// Read the cached body for `path`.
    async fn get(&self, path: &str) -> Result<CachedView, ViewCacheError>;

    /// Store the body for `path` if it has not been invalidated since the miss
    /// that reported `generation`. Returns whether the body was stored.
    async fn put(
        &self,
        path: &str,
        body: String,
        generation: u64,
    ) -> Result<bool, ViewCacheError>;

    /// Drop the cached body for `path` and advance its generation.
    async fn invalidate(&self, path: &str) -> Result<(), ViewCacheError>;
}
