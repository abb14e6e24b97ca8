//! Credential verifier backed by the user store and a password hasher.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    CredentialError, CredentialVerifier, PasswordHashError, PasswordHasher, UserRepository,
};
use crate::domain::{LoginCredentials, UserId};

/// Looks the account up by email and checks the password against its digest.
///
/// Unknown accounts and wrong passwords are indistinguishable to callers.
#[derive(Clone)]
pub struct RepositoryCredentialVerifier<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> RepositoryCredentialVerifier<U, H> {
    /// Create a verifier over the given store and hasher.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

fn map_hash_error(error: PasswordHashError) -> CredentialError {
    warn!(error = %error, "stored password digest could not be checked");
    CredentialError::provider(error.to_string())
}

#[async_trait]
impl<U, H> CredentialVerifier for RepositoryCredentialVerifier<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn verify(&self, credentials: &LoginCredentials) -> Result<UserId, CredentialError> {
        let account = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(|err| CredentialError::infrastructure(err.to_string()))?;

        let Some(account) = account else {
            debug!("sign-in attempted for unknown account");
            return Err(CredentialError::invalid_credentials());
        };

        let matches = self
            .hasher
            .verify(credentials.password(), &account.password)
            .await
            .map_err(map_hash_error)?;

        if matches {
            Ok(account.id)
        } else {
            Err(CredentialError::invalid_credentials())
        }
    }
}
