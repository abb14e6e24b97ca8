//! Invoice form rules.

use crate::domain::{
    AmountError, CustomerId, FieldErrors, FormData, InvoiceDraft, InvoiceStatus,
    InvoiceValidationError, MinorUnits,
};

use super::{fields, messages};

/// Rules for the create and edit invoice forms.
///
/// # Examples
/// ```
/// use invoicing::domain::{FormData, InvoiceSchema, InvoiceStatus};
///
/// let form = FormData::from_pairs([("customerId", "c1"), ("amount", "50"), ("status", "paid")]);
/// let draft = InvoiceSchema::new().validate(&form).expect("valid form");
/// assert_eq!(draft.amount.get(), 5000);
/// assert_eq!(draft.status, InvoiceStatus::Paid);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceSchema;

impl InvoiceSchema {
    /// Construct the schema.
    pub fn new() -> Self {
        Self
    }

    /// Validate every field, collecting all failures before returning.
    pub fn validate(&self, form: &FormData) -> Result<InvoiceDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let customer_id = CustomerId::new(form.get(fields::CUSTOMER_ID).unwrap_or_default())
            .map_err(|err| errors.push(fields::CUSTOMER_ID, customer_message(&err)))
            .ok();

        let amount = MinorUnits::parse_major(form.get(fields::AMOUNT).unwrap_or_default())
            .map_err(|err| errors.push(fields::AMOUNT, amount_message(err)))
            .ok();

        let status = form
            .get(fields::STATUS)
            .unwrap_or_default()
            .parse::<InvoiceStatus>()
            .map_err(|_| errors.push(fields::STATUS, messages::SELECT_STATUS))
            .ok();

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) if errors.is_empty() => {
                Ok(InvoiceDraft {
                    customer_id,
                    amount,
                    status,
                })
            }
            _ => Err(errors),
        }
    }
}

fn customer_message(error: &InvoiceValidationError) -> &'static str {
    match error {
        InvoiceValidationError::CustomerIdTooLong { .. } => messages::CUSTOMER_ID_TOO_LONG,
        _ => messages::SELECT_CUSTOMER,
    }
}

fn amount_message(error: AmountError) -> &'static str {
    match error {
        AmountError::NotNumeric => messages::INVALID_AMOUNT,
        AmountError::NotPositive => messages::AMOUNT_NOT_POSITIVE,
        AmountError::TooPrecise => messages::AMOUNT_TOO_PRECISE,
        AmountError::TooLarge => messages::AMOUNT_TOO_LARGE,
    }
}
