//! Port for invoice persistence.

use async_trait::async_trait;

use crate::domain::{Invoice, InvoiceDraft, InvoiceId, NewInvoice};

use super::define_port_error;

define_port_error! {
    /// Errors raised by invoice repository adapters.
    pub enum InvoiceRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "invoice repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "invoice repository query failed: {message}",
    }
}

/// Parameterised invoice statements keyed by primary id.
///
/// Update and delete of an id that does not exist succeed without effect.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Insert a new invoice and return its generated id.
    async fn insert(&self, invoice: &NewInvoice) -> Result<InvoiceId, InvoiceRepositoryError>;

    /// Overwrite customer, amount, and status of an invoice. The date is kept.
    async fn update(
        &self,
        id: &InvoiceId,
        changes: &InvoiceDraft,
    ) -> Result<(), InvoiceRepositoryError>;

    /// Remove an invoice.
    async fn delete(&self, id: &InvoiceId) -> Result<(), InvoiceRepositoryError>;

    /// All invoices, newest date first.
    async fn list(&self) -> Result<Vec<Invoice>, InvoiceRepositoryError>;
}

/// Fixture implementation for wiring without a database.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInvoiceRepository;

#[async_trait]
impl InvoiceRepository for FixtureInvoiceRepository {
    async fn insert(&self, _invoice: &NewInvoice) -> Result<InvoiceId, InvoiceRepositoryError> {
        Ok(InvoiceId::random())
    }

    async fn update(
        &self,
        _id: &InvoiceId,
        _changes: &InvoiceDraft,
    ) -> Result<(), InvoiceRepositoryError> {
        Ok(())
    }

    async fn delete(&self, _id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Invoice>, InvoiceRepositoryError> {
        Ok(Vec::new())
    }
}
