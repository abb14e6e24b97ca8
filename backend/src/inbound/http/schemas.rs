//! OpenAPI schema definitions for domain types and form bodies.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; the
//! mirrors here carry the documentation instead. Form bodies are documented
//! as flat objects of strings because that is what the url-encoded payload
//! is before the domain schemas look at it.

#![expect(
    dead_code,
    reason = "Fields exist only for OpenAPI schema generation via utoipa"
)]

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    #[schema(rename = "unauthorized")]
    Unauthorized,
    #[schema(rename = "forbidden")]
    Forbidden,
    #[schema(rename = "not_found")]
    NotFound,
    #[schema(rename = "conflict")]
    Conflict,
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Infrastructure fault envelope.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    #[schema(example = "service_unavailable")]
    code: ErrorCodeSchema,
    #[schema(example = "invoice store unavailable")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "6f1d1c2e-0000-4000-8000-000000000001")]
    trace_id: Option<String>,
    details: Option<serde_json::Value>,
}

/// Result of a rejected form submission.
#[derive(ToSchema)]
#[schema(as = crate::domain::FormState)]
pub struct FormStateSchema {
    /// Messages per field, in rule order.
    #[schema(example = json!({ "customerId": ["Please select a customer."] }))]
    errors: Option<BTreeMap<String, Vec<String>>>,
    #[schema(example = "Missing Fields. Failed to Create Invoice.")]
    message: Option<String>,
}

/// Invoice create/update form.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct InvoiceFormSchema {
    #[schema(example = "c1")]
    customer_id: String,
    /// Major units, at most two decimals.
    #[schema(example = "19.99")]
    amount: String,
    /// `pending` or `paid`.
    #[schema(example = "pending")]
    status: String,
}

/// Sign-up form.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct RegistrationFormSchema {
    #[schema(example = "Ada")]
    username: String,
    #[schema(example = "ada@example.com")]
    email: String,
    password: String,
    confirm_password: String,
}

/// Sign-in form.
#[derive(ToSchema)]
pub struct LoginFormSchema {
    #[schema(example = "user@nextmail.com")]
    email: String,
    password: String,
}

/// One row of the invoice listing.
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::InvoiceSummary, rename_all = "camelCase")]
pub struct InvoiceSummarySchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "c1")]
    customer_id: String,
    /// Minor units.
    #[schema(example = 1999)]
    amount: i64,
    #[schema(example = "19.99")]
    amount_display: String,
    #[schema(example = "pending")]
    status: String,
    #[schema(value_type = String, format = Date, example = "2026-03-14")]
    date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_codes_cover_every_domain_variant() {
        let json = schema_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "unauthorized",
            "forbidden",
            "not_found",
            "conflict",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(json.contains(code), "missing {code}");
        }
    }

    #[rstest]
    fn error_schema_uses_wire_names() {
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        let json = schema_json::<ErrorSchema>();
        assert!(json.contains("traceId"));
        assert!(!json.contains("trace_id"));
    }

    #[rstest]
    fn form_schemas_use_submitted_field_names() {
        assert!(schema_json::<InvoiceFormSchema>().contains("customerId"));
        assert!(schema_json::<RegistrationFormSchema>().contains("confirmPassword"));
    }

    #[rstest]
    fn listing_schema_documents_both_amounts() {
        let json = schema_json::<InvoiceSummarySchema>();
        assert!(json.contains("amountDisplay"));
        assert!(json.contains("customerId"));
    }
}
