//! Create, update, and delete invoice actions.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error, info};

use crate::domain::navigation::{INVOICES_PATH, invalidate_view};
use crate::domain::ports::{InvoiceCommand, InvoiceRepository, ViewCache};
use crate::domain::{FormData, InvoiceId, InvoiceSchema};

use super::{ActionOutcome, messages};

/// Invoice form actions backed by a repository and the listing cache.
#[derive(Clone)]
pub struct InvoiceActions<R, C> {
    repo: Arc<R>,
    cache: Arc<C>,
    clock: Arc<dyn Clock>,
    schema: InvoiceSchema,
}

impl<R, C> InvoiceActions<R, C> {
    /// Create the actions with an explicitly constructed schema.
    pub fn new(repo: Arc<R>, cache: Arc<C>, clock: Arc<dyn Clock>, schema: InvoiceSchema) -> Self {
        Self {
            repo,
            cache,
            clock,
            schema,
        }
    }
}

#[async_trait]
impl<R, C> InvoiceCommand for InvoiceActions<R, C>
where
    R: InvoiceRepository,
    C: ViewCache,
{
    async fn create(&self, form: &FormData) -> ActionOutcome {
        let draft = match self.schema.validate(form) {
            Ok(draft) => draft,
            Err(errors) => {
                debug!(fields = ?errors.fields().collect::<Vec<_>>(), "create invoice rejected");
                return ActionOutcome::invalid(errors, messages::CREATE_INVOICE_INVALID);
            }
        };
        let invoice = draft.issued_on(self.clock.utc().date_naive());

        match self.repo.insert(&invoice).await {
            Ok(id) => {
                info!(invoice_id = %id, "invoice created");
                invalidate_view(self.cache.as_ref(), INVOICES_PATH).await;
                ActionOutcome::Redirect(INVOICES_PATH)
            }
            Err(err) => {
                error!(error = %err, "failed to create invoice");
                ActionOutcome::persistence_failed(messages::CREATE_INVOICE_FAILED)
            }
        }
    }

    async fn update(&self, id: &InvoiceId, form: &FormData) -> ActionOutcome {
        let changes = match self.schema.validate(form) {
            Ok(changes) => changes,
            Err(errors) => {
                debug!(invoice_id = %id, fields = ?errors.fields().collect::<Vec<_>>(), "update invoice rejected");
                return ActionOutcome::invalid(errors, messages::UPDATE_INVOICE_INVALID);
            }
        };

        match self.repo.update(id, &changes).await {
            Ok(()) => {
                info!(invoice_id = %id, "invoice updated");
                invalidate_view(self.cache.as_ref(), INVOICES_PATH).await;
                ActionOutcome::Redirect(INVOICES_PATH)
            }
            Err(err) => {
                error!(invoice_id = %id, error = %err, "failed to update invoice");
                ActionOutcome::persistence_failed(messages::UPDATE_INVOICE_FAILED)
            }
        }
    }

    async fn delete(&self, id: &InvoiceId) -> ActionOutcome {
        match self.repo.delete(id).await {
            Ok(()) => {
                info!(invoice_id = %id, "invoice deleted");
                invalidate_view(self.cache.as_ref(), INVOICES_PATH).await;
                ActionOutcome::Completed {
                    message: messages::INVOICE_DELETED.to_owned(),
                }
            }
            Err(err) => {
                error!(invoice_id = %id, error = %err, "failed to delete invoice");
                ActionOutcome::persistence_failed(messages::DELETE_INVOICE_FAILED)
            }
        }
    }
}
