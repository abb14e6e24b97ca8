//! Driving port for invoice form actions.
//!
//! Inbound adapters hand over the raw submission and get back a tagged
//! outcome; persistence faults are already folded into that outcome.

use async_trait::async_trait;

use crate::domain::{ActionOutcome, FormData, InvoiceId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceCommand: Send + Sync {
    /// Validate and insert a new invoice dated today.
    async fn create(&self, form: &FormData) -> ActionOutcome;

    /// Validate and overwrite an existing invoice.
    async fn update(&self, id: &InvoiceId, form: &FormData) -> ActionOutcome;

    /// Remove an invoice. Never redirects.
    async fn delete(&self, id: &InvoiceId) -> ActionOutcome;
}
