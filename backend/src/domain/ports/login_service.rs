//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call it with the submitted sign-in form and learn whether
//! to start a session, without importing the credential store.

use async_trait::async_trait;

use crate::domain::{AuthOutcome, Error, FormData};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check the submitted `email`/`password` fields.
    ///
    /// A refusal is an `Ok` outcome; `Err` is reserved for infrastructure
    /// faults outside the authentication domain.
    async fn authenticate(&self, form: &FormData) -> Result<AuthOutcome, Error>;
}
