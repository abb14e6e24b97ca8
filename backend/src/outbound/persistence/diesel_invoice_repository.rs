//! PostgreSQL-backed `InvoiceRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{InvoiceRepository, InvoiceRepositoryError};
use crate::domain::{
    CustomerId, Invoice, InvoiceDraft, InvoiceId, InvoiceStatus, MinorUnits, NewInvoice,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{InvoiceChangeset, InvoiceRow, NewInvoiceRow};
use super::pool::{DbPool, PoolError};
use super::schema::invoices;

/// Diesel-backed implementation of the `InvoiceRepository` port.
#[derive(Clone)]
pub struct DieselInvoiceRepository {
    pool: DbPool,
}

impl DieselInvoiceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> InvoiceRepositoryError {
    map_pool_error(error, InvoiceRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> InvoiceRepositoryError {
    map_diesel_error(
        error,
        InvoiceRepositoryError::query,
        InvoiceRepositoryError::connection,
    )
}

fn try_row_to_invoice(row: &InvoiceRow) -> Result<Invoice, String> {
    Ok(Invoice {
        id: InvoiceId::from_uuid(row.id),
        customer_id: CustomerId::new(&row.customer_id).map_err(|err| err.to_string())?,
        amount: MinorUnits::new(row.amount).map_err(|err| err.to_string())?,
        status: row
            .status
            .parse::<InvoiceStatus>()
            .map_err(|err| err.to_string())?,
        date: row.date,
    })
}

/// Rows violating the table's checks are skipped, not fatal to the listing.
fn row_to_invoice(row: InvoiceRow) -> Option<Invoice> {
    match try_row_to_invoice(&row) {
        Ok(invoice) => Some(invoice),
        Err(reason) => {
            warn!(invoice_id = %row.id, %reason, "skipping malformed invoice row");
            None
        }
    }
}

#[async_trait]
impl InvoiceRepository for DieselInvoiceRepository {
    async fn insert(&self, invoice: &NewInvoice) -> Result<InvoiceId, InvoiceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let id = Uuid::new_v4();
        let row = NewInvoiceRow {
            id,
            customer_id: invoice.customer_id.as_ref(),
            amount: invoice.amount.get(),
            status: invoice.status.as_str(),
            date: invoice.date,
        };
        diesel::insert_into(invoices::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(InvoiceId::from_uuid(id))
    }

    async fn update(
        &self,
        id: &InvoiceId,
        changes: &InvoiceDraft,
    ) -> Result<(), InvoiceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let changeset = InvoiceChangeset {
            customer_id: changes.customer_id.as_ref(),
            amount: changes.amount.get(),
            status: changes.status.as_str(),
        };
        diesel::update(invoices::table.filter(invoices::id.eq(id.as_uuid())))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(())
    }

    async fn delete(&self, id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        diesel::delete(invoices::table.filter(invoices::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Invoice>, InvoiceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<InvoiceRow> = invoices::table
            .select(InvoiceRow::as_select())
            .order((invoices::date.desc(), invoices::id.asc()))
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().filter_map(row_to_invoice).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn row(customer_id: &str, amount: i64, status: &str) -> InvoiceRow {
        InvoiceRow {
            id: Uuid::new_v4(),
            customer_id: customer_id.to_owned(),
            amount,
            status: status.to_owned(),
            date: NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date"),
        }
    }

    #[rstest]
    fn well_formed_rows_convert() {
        let invoice = row_to_invoice(row("c1", 1999, "paid")).expect("row converts");
        assert_eq!(invoice.amount.get(), 1999);
        assert_eq!(invoice.status, InvoiceStatus::Paid);
    }

    #[rstest]
    #[case(row("", 100, "paid"))]
    #[case(row("c1", 0, "paid"))]
    #[case(row("c1", 100, "void"))]
    fn malformed_rows_are_skipped(#[case] input: InvoiceRow) {
        assert!(row_to_invoice(input).is_none());
    }
}
