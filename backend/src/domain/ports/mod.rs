//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_verifier;
mod invoice_command;
mod invoice_query;
mod invoice_repository;
mod login_service;
mod password_hasher;
mod registration_command;
mod user_repository;
mod view_cache;

#[cfg(test)]
pub use credential_verifier::MockCredentialVerifier;
pub use credential_verifier::{CredentialError, CredentialVerifier, FixtureCredentialVerifier};
#[cfg(test)]
pub use invoice_command::MockInvoiceCommand;
pub use invoice_command::InvoiceCommand;
#[cfg(test)]
pub use invoice_query::MockInvoiceQuery;
pub use invoice_query::{FixtureInvoiceQuery, InvoiceQuery, InvoiceSummary};
#[cfg(test)]
pub use invoice_repository::MockInvoiceRepository;
pub use invoice_repository::{
    FixtureInvoiceRepository, InvoiceRepository, InvoiceRepositoryError,
};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{FixturePasswordHasher, PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use registration_command::MockRegistrationCommand;
pub use registration_command::RegistrationCommand;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{
    FixtureUserRepository, UserInsertOutcome, UserPersistenceError, UserRepository,
};
#[cfg(test)]
pub use view_cache::MockViewCache;
pub use view_cache::{CachedView, ViewCache, ViewCacheError};
