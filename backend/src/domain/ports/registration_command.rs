//! Driving port for the sign-up form action.

use async_trait::async_trait;

use crate::domain::{ActionOutcome, FormData};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationCommand: Send + Sync {
    /// Validate, hash, and store a new account.
    async fn register(&self, form: &FormData) -> ActionOutcome;
}
