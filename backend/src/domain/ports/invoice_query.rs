//! Driving port for the invoice listing.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Invoice, InvoiceStatus};

/// One row of the invoice listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub id: String,
    pub customer_id: String,
    /// Minor units.
    pub amount: i64,
    /// Major units with two fractional digits, e.g. `19.99`.
    pub amount_display: String,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id.to_string(),
            customer_id: invoice.customer_id.to_string(),
            amount: invoice.amount.get(),
            amount_display: invoice.amount.to_string(),
            status: invoice.status,
            date: invoice.date,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceQuery: Send + Sync {
    /// All invoices, newest first.
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, Error>;
}

/// Query that always returns an empty listing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInvoiceQuery;

#[async_trait]
impl InvoiceQuery for FixtureInvoiceQuery {
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, Error> {
        Ok(Vec::new())
    }
}
