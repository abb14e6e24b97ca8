//! Form action handlers.
//!
//! Each handler walks one submission through
//! validate -> transform -> persist -> invalidate and reports a tagged
//! [`ActionOutcome`]. Persistence faults are logged here and replaced by a
//! fixed per-operation message; the cause never leaves this module.

mod authentication;
mod invoices;
mod listing;
mod registration;

pub use authentication::AuthenticationService;
pub use invoices::InvoiceActions;
pub use listing::InvoiceListing;
pub use registration::RegistrationService;

use super::{FieldErrors, FormState, UserId};

/// Summary and failure messages shown next to a form.
pub mod messages {
    pub const CREATE_INVOICE_INVALID: &str = "Missing Fields. Failed to Create Invoice.";
    pub const UPDATE_INVOICE_INVALID: &str = "Missing Fields. Failed to Update Invoice.";
    pub const REGISTER_INVALID: &str = "Missing Fields. Failed to Register.";
    pub const REGISTER_MISMATCH: &str = "Passwords do not match. Failed to Register.";
    pub const CREATE_INVOICE_FAILED: &str = "Database Error: Failed to Create Invoice.";
    pub const UPDATE_INVOICE_FAILED: &str = "Database Error: Failed to Update Invoice.";
    pub const DELETE_INVOICE_FAILED: &str = "Database Error: Failed to Delete Invoice.";
    pub const REGISTER_FAILED: &str = "Database Error: Failed to Register User.";
    pub const INVOICE_DELETED: &str = "Deleted Invoice.";
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
    pub const AUTH_FAILED: &str = "Something went wrong.";
}

/// Result of one form action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Work committed and dependent views invalidated; show `path` next.
    Redirect(&'static str),
    /// Work committed; stay put and show `message`.
    Completed { message: String },
    /// Input rejected before any side effect.
    ValidationFailed(FormState),
    /// Input was valid but the store refused it.
    PersistenceFailed { message: String },
}

impl ActionOutcome {
    pub(crate) fn invalid(errors: FieldErrors, message: &str) -> Self {
        Self::ValidationFailed(FormState::invalid(errors, message))
    }

    pub(crate) fn persistence_failed(message: &str) -> Self {
        Self::PersistenceFailed {
            message: message.to_owned(),
        }
    }

    /// The form state to render for this outcome; empty for redirects.
    pub fn form_state(&self) -> FormState {
        match self {
            Self::Redirect(_) => FormState::empty(),
            Self::Completed { message } | Self::PersistenceFailed { message } => {
                FormState::with_message(message.clone())
            }
            Self::ValidationFailed(state) => state.clone(),
        }
    }
}

/// Result of a sign-in attempt that stayed inside the authentication domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credentials matched this account.
    Authenticated(UserId),
    /// Credentials were refused; show `message`.
    Rejected(String),
}

#[cfg(test)]
pub(crate) mod test_support;
