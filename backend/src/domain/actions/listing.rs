//! Invoice listing served through the view cache.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::Error;
use crate::domain::navigation::{INVOICES_PATH, invalidate_view};
use crate::domain::ports::{
    CachedView, InvoiceQuery, InvoiceRepository, InvoiceRepositoryError, InvoiceSummary,
    ViewCache,
};

/// Read side of the invoice listing.
///
/// A cached body is reused until a mutation invalidates it. A body read
/// while a mutation commits is never cached. Cache faults degrade to a direct
/// read.
#[derive(Clone)]
pub struct InvoiceListing<R, C> {
    repo: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> InvoiceListing<R, C> {
    /// Create a listing over the given repository and cache.
    pub fn new(repo: Arc<R>, cache: Arc<C>) -> Self {
        Self { repo, cache }
    }
}

/// What the cache had for the listing.
enum Lookup {
    Rows(Vec<InvoiceSummary>),
    /// Read the store; the body may be cached under `generation`.
    Miss { generation: Option<u64> },
}

impl<R, C> InvoiceListing<R, C>
where
    R: InvoiceRepository,
    C: ViewCache,
{
    async fn lookup(&self) -> Lookup {
        let body = match self.cache.get(INVOICES_PATH).await {
            Ok(CachedView::Hit(body)) => body,
            Ok(CachedView::Miss { generation }) => {
                return Lookup::Miss {
                    generation: Some(generation),
                };
            }
            Err(error) => {
                warn!(%error, "view cache read failed");
                return Lookup::Miss { generation: None };
            }
        };
        match serde_json::from_str(&body) {
            Ok(rows) => Lookup::Rows(rows),
            Err(error) => {
                warn!(%error, "discarding undecodable cached listing");
                invalidate_view(self.cache.as_ref(), INVOICES_PATH).await;
                Lookup::Miss { generation: None }
            }
        }
    }

    // Rows read after a miss at `generation`; dropped if a change landed since.
    async fn store(&self, rows: &[InvoiceSummary], generation: u64) {
        let body = match serde_json::to_string(rows) {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, "failed to encode listing for the cache");
                return;
            }
        };
        match self.cache.put(INVOICES_PATH, body, generation).await {
            Ok(true) => {}
            Ok(false) => debug!(generation, "listing changed during the read; not cached"),
            Err(error) => warn!(%error, "view cache write failed"),
        }
    }

    fn map_repository_error(error: InvoiceRepositoryError) -> Error {
        match error {
            InvoiceRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("invoice repository unavailable: {message}"))
            }
            InvoiceRepositoryError::Query { message } => {
                Error::internal(format!("invoice repository error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R, C> InvoiceQuery for InvoiceListing<R, C>
where
    R: InvoiceRepository,
    C: ViewCache,
{
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, Error> {
        let generation = match self.lookup().await {
            Lookup::Rows(rows) => {
                debug!(rows = rows.len(), "invoice listing served from cache");
                return Ok(rows);
            }
            Lookup::Miss { generation } => generation,
        };
        let invoices = self
            .repo
            .list()
            .await
            .map_err(Self::map_repository_error)?;
        let rows: Vec<InvoiceSummary> = invoices.iter().map(InvoiceSummary::from).collect();
        if let Some(generation) = generation {
            self.store(&rows, generation).await;
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockInvoiceRepository, MockViewCache, ViewCacheError};
    use crate::domain::{CustomerId, ErrorCode, Invoice, InvoiceId, InvoiceStatus, MinorUnits};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn invoice(amount: i64) -> Invoice {
        Invoice {
            id: InvoiceId::random(),
            customer_id: CustomerId::new("c1").expect("valid customer"),
            amount: MinorUnits::new(amount).expect("positive"),
            status: InvoiceStatus::Paid,
            date: NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date"),
        }
    }

    fn listing(
        repo: MockInvoiceRepository,
        cache: MockViewCache,
    ) -> InvoiceListing<MockInvoiceRepository, MockViewCache> {
        InvoiceListing::new(Arc::new(repo), Arc::new(cache))
    }

    #[rstest]
    #[tokio::test]
    async fn miss_reads_the_repository_and_fills_the_cache() {
        let mut repo = MockInvoiceRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![invoice(1999)]));
        let mut cache = MockViewCache::new();
        cache
            .expect_get()
            .times(1)
            .returning(|_| Ok(CachedView::Miss { generation: 7 }));
        cache
            .expect_put()
            .withf(|path: &str, body: &String, generation: &u64| {
                path == INVOICES_PATH && body.contains("19.99") && *generation == 7
            })
            .times(1)
            .returning(|_, _, _| Ok(true));

        let rows = listing(repo, cache)
            .list_invoices()
            .await
            .expect("listing succeeds");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 1999);
        assert_eq!(rows[0].amount_display, "19.99");
    }

    #[rstest]
    #[tokio::test]
    async fn refused_put_still_returns_the_fresh_rows() {
        let mut repo = MockInvoiceRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![invoice(500), invoice(700)]));
        let mut cache = MockViewCache::new();
        cache
            .expect_get()
            .returning(|_| Ok(CachedView::Miss { generation: 2 }));
        cache.expect_put().times(1).returning(|_, _, _| Ok(false));

        let rows = listing(repo, cache)
            .list_invoices()
            .await
            .expect("listing succeeds");

        assert_eq!(rows.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn hit_skips_the_repository() {
        let cached = serde_json::to_string(&[InvoiceSummary::from(&invoice(500))])
            .expect("rows encode");
        let mut repo = MockInvoiceRepository::new();
        repo.expect_list().never();
        let mut cache = MockViewCache::new();
        cache
            .expect_get()
            .times(1)
            .returning(move |_| Ok(CachedView::Hit(cached.clone())));

        let rows = listing(repo, cache)
            .list_invoices()
            .await
            .expect("listing succeeds");

        assert_eq!(rows[0].amount_display, "5.00");
    }

    #[rstest]
    #[tokio::test]
    async fn undecodable_body_is_invalidated_and_not_replaced() {
        let mut repo = MockInvoiceRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![invoice(500)]));
        let mut cache = MockViewCache::new();
        cache
            .expect_get()
            .returning(|_| Ok(CachedView::Hit("not json".to_owned())));
        cache
            .expect_invalidate()
            .withf(|path: &str| path == INVOICES_PATH)
            .times(1)
            .returning(|_| Ok(()));
        cache.expect_put().never();

        let rows = listing(repo, cache)
            .list_invoices()
            .await
            .expect("listing succeeds");

        assert_eq!(rows.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn cache_faults_fall_back_to_the_repository() {
        let mut repo = MockInvoiceRepository::new();
        repo.expect_list().times(1).returning(|| Ok(Vec::new()));
        let mut cache = MockViewCache::new();
        cache
            .expect_get()
            .returning(|_| Err(ViewCacheError::backend("unreachable")));
        cache.expect_put().never();

        let rows = listing(repo, cache)
            .list_invoices()
            .await
            .expect("listing succeeds");

        assert!(rows.is_empty());
    }

    #[rstest]
    #[case(InvoiceRepositoryError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(InvoiceRepositoryError::query("bad"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn repository_faults_become_domain_errors(
        #[case] failure: InvoiceRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockInvoiceRepository::new();
        repo.expect_list()
            .times(1)
            .returning(move || Err(failure.clone()));
        let mut cache = MockViewCache::new();
        cache
            .expect_get()
            .returning(|_| Ok(CachedView::Miss { generation: 0 }));

        let error = listing(repo, cache)
            .list_invoices()
            .await
            .expect_err("listing fails");

        assert_eq!(error.code(), expected);
    }
}
