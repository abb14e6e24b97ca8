//! Domain primitives, validation schemas, and form actions.
//!
//! Purpose: hold everything about invoices and accounts that does not depend
//! on HTTP or the database. Adapters reach in through the traits in
//! [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - FormData / FieldErrors / FormState: raw submissions and their results.
//! - InvoiceSchema / RegistrationSchema: stateless validators.
//! - InvoiceActions, InvoiceListing, RegistrationService,
//!   AuthenticationService: driving-port implementations.

pub mod actions;
pub mod auth;
pub mod authorization;
pub mod error;
pub mod form;
pub mod invoice;
pub mod navigation;
pub mod ports;
pub mod schema;
pub mod trace_id;
pub mod user;

pub use self::actions::{
    ActionOutcome, AuthOutcome, AuthenticationService, InvoiceActions, InvoiceListing,
    RegistrationService,
};
pub use self::auth::{LoginCredentials, LoginValidationError, Password};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::form::{FieldErrors, FormData, FormState};
pub use self::invoice::{
    AmountError, CustomerId, Invoice, InvoiceDraft, InvoiceId, InvoiceStatus,
    InvoiceValidationError, MinorUnits, NewInvoice,
};
pub use self::schema::{InvoiceSchema, Registration, RegistrationRejection, RegistrationSchema};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EmailAddress, NewUser, PasswordDigest, UserAccount, UserId, UserName, UserValidationError,
};
