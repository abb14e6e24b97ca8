//! Navigation targets and the "mark stale, then move on" side effect.

use tracing::warn;

use super::ports::ViewCache;

/// Invoice listing; target after invoice create and update.
pub const INVOICES_PATH: &str = "/dashboard/invoices";
/// Dashboard landing page; target after sign-in.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Sign-in page; target after registration and for anonymous dashboard hits.
pub const LOGIN_PATH: &str = "/login";
/// Site root; target after sign-out.
pub const HOME_PATH: &str = "/";

/// Mark the cached representation of `path` stale.
///
/// The mutation that triggered this has already been committed, so a cache
/// failure is logged and otherwise ignored.
pub async fn invalidate_view(cache: &dyn ViewCache, path: &str) {
    if let Err(error) = cache.invalidate(path).await {
        warn!(%error, path, "view cache invalidation failed");
    }
}
