//! Declarative validation rules for the submitted forms.
//!
//! Schemas are stateless values constructed explicitly and handed to the
//! action that needs them. Malformed input is an expected outcome: every rule
//! reports through [`FieldErrors`](super::FieldErrors) and nothing here
//! returns a fault.

mod invoice;
mod registration;

pub use invoice::InvoiceSchema;
pub use registration::{Registration, RegistrationRejection, RegistrationSchema};

/// Submitted field names.
pub mod fields {
    pub const CUSTOMER_ID: &str = "customerId";
    pub const AMOUNT: &str = "amount";
    pub const STATUS: &str = "status";
    pub const USERNAME: &str = "username";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
}

/// User-facing validation messages.
pub mod messages {
    pub const SELECT_CUSTOMER: &str = "Please select a customer.";
    pub const CUSTOMER_ID_TOO_LONG: &str = "Customer reference must be at most 255 characters.";
    pub const INVALID_AMOUNT: &str = "Please enter a valid amount.";
    pub const AMOUNT_NOT_POSITIVE: &str = "Please enter an amount greater than $0.";
    pub const AMOUNT_TOO_PRECISE: &str = "Amounts may have at most two decimal places.";
    pub const AMOUNT_TOO_LARGE: &str = "Amount is too large.";
    pub const SELECT_STATUS: &str = "Please select an invoice status.";
    pub const USERNAME_TOO_SHORT: &str = "Username must be at least 2 characters.";
    pub const USERNAME_TOO_LONG: &str = "Username must be at most 255 characters.";
    pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
    pub const PASSWORDS_DIFFER: &str = "Passwords do not match.";
}
