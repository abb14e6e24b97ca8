//! Request-shape validation for path parameters.
//!
//! Form fields are validated by the domain schemas and reported as
//! [`crate::domain::FormState`]; this module only covers values the router
//! hands over, which fail with `400` and a structured `details` object.

use serde_json::json;

use crate::domain::{Error, InvoiceId};

/// Path and form field names surfaced in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const INVOICE_ID: FieldName = FieldName::new("id");

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_uuid",
    }))
}

/// Parse the `{id}` segment of an invoice route.
pub(crate) fn parse_invoice_id(raw: &str) -> Result<InvoiceId, Error> {
    InvoiceId::new(raw).map_err(|_| invalid_uuid_error(INVOICE_ID, raw))
}
