//! Invoice form endpoints.
//!
//! ```text
//! POST /dashboard/invoices               customerId=c1&amount=50&status=paid
//! POST /dashboard/invoices/{id}          customerId=c1&amount=50&status=paid
//! POST /dashboard/invoices/{id}/delete
//! GET  /dashboard/invoices
//! ```
//!
//! Bodies are url-encoded forms passed to the domain untouched; all field
//! validation happens in [`crate::domain::InvoiceSchema`].

use actix_web::{HttpResponse, get, post, web};

use crate::domain::FormData;
use crate::domain::ports::InvoiceSummary;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::outcome::{MessageResponse, render};
use crate::inbound::http::schemas::{ErrorSchema, FormStateSchema, InvoiceFormSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_invoice_id;

/// Create an invoice dated today.
#[utoipa::path(
    post,
    path = "/dashboard/invoices",
    request_body(content = InvoiceFormSchema, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; continue at the listing", headers(("Location" = String, description = "Listing path"))),
        (status = 422, description = "Field validation failed", body = FormStateSchema),
        (status = 500, description = "Store refused the invoice", body = MessageResponse)
    ),
    tags = ["invoices"],
    operation_id = "createInvoice"
)]
#[post("/dashboard/invoices")]
pub async fn create_invoice(
    state: web::Data<HttpState>,
    form: web::Form<FormData>,
) -> HttpResponse {
    render(state.invoices.create(&form).await)
}

/// Overwrite customer, amount and status of an invoice.
#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}",
    params(("id" = String, Path, description = "Invoice UUID")),
    request_body(content = InvoiceFormSchema, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated; continue at the listing", headers(("Location" = String, description = "Listing path"))),
        (status = 400, description = "Malformed invoice id", body = ErrorSchema),
        (status = 422, description = "Field validation failed", body = FormStateSchema),
        (status = 500, description = "Store refused the update", body = MessageResponse)
    ),
    tags = ["invoices"],
    operation_id = "updateInvoice"
)]
#[post("/dashboard/invoices/{id}")]
pub async fn update_invoice(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<FormData>,
) -> ApiResult<HttpResponse> {
    let id = parse_invoice_id(&path)?;
    Ok(render(state.invoices.update(&id, &form).await))
}

/// Delete an invoice and report the result in place.
#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}/delete",
    params(("id" = String, Path, description = "Invoice UUID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Malformed invoice id", body = ErrorSchema),
        (status = 500, description = "Store refused the delete", body = MessageResponse)
    ),
    tags = ["invoices"],
    operation_id = "deleteInvoice"
)]
#[post("/dashboard/invoices/{id}/delete")]
pub async fn delete_invoice(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_invoice_id(&path)?;
    Ok(render(state.invoices.delete(&id).await))
}

/// List invoices, newest first.
#[utoipa::path(
    get,
    path = "/dashboard/invoices",
    responses(
        (
            status = 200,
            description = "Invoices",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = [crate::inbound::http::schemas::InvoiceSummarySchema]
        ),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["invoices"],
    operation_id = "listInvoices"
)]
#[get("/dashboard/invoices")]
pub async fn list_invoices(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let invoices: Vec<InvoiceSummary> = state.invoices_query.list_invoices().await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(invoices))
}
