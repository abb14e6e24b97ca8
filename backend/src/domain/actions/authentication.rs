//! Sign-in action.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{CredentialError, CredentialVerifier, LoginService};
use crate::domain::{AuthOutcome, Error, FormData, LoginCredentials};
use crate::domain::schema::fields;

use super::messages;

/// Login action delegating the credential check to a [`CredentialVerifier`].
#[derive(Clone)]
pub struct AuthenticationService<V> {
    verifier: Arc<V>,
}

impl<V> AuthenticationService<V> {
    /// Create the action around a verifier.
    pub fn new(verifier: Arc<V>) -> Self {
        Self { verifier }
    }
}

#[async_trait]
impl<V> LoginService for AuthenticationService<V>
where
    V: CredentialVerifier,
{
    async fn authenticate(&self, form: &FormData) -> Result<AuthOutcome, Error> {
        let result = match LoginCredentials::try_from_parts(
            form.get(fields::EMAIL).unwrap_or_default(),
            form.get(fields::PASSWORD).unwrap_or_default(),
        ) {
            Ok(credentials) => self.verifier.verify(&credentials).await,
            Err(err) => {
                debug!(reason = %err, "login form unusable");
                Err(CredentialError::invalid_credentials())
            }
        };

        match result {
            Ok(user_id) => {
                info!(user_id = %user_id, "user signed in");
                Ok(AuthOutcome::Authenticated(user_id))
            }
            Err(CredentialError::InvalidCredentials) => {
                Ok(AuthOutcome::Rejected(messages::INVALID_CREDENTIALS.to_owned()))
            }
            Err(CredentialError::Provider { message }) => {
                warn!(%message, "credential provider failed");
                Ok(AuthOutcome::Rejected(messages::AUTH_FAILED.to_owned()))
            }
            Err(CredentialError::Infrastructure { message }) => {
                Err(Error::service_unavailable(format!(
                    "credential store unavailable: {message}"
                )))
            }
        }
    }
}
