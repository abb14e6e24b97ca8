//! Port for the authentication collaborator that checks credentials.
//!
//! Faults are split three ways so the login action can match them
//! exhaustively: a plain "no" ([`CredentialError::InvalidCredentials`]), a
//! fault inside the authentication provider itself, and an infrastructure
//! fault that must not be disguised as a login failure.

use async_trait::async_trait;

use crate::domain::{LoginCredentials, UserId};

use super::define_port_error;

define_port_error! {
    /// Outcomes of a failed credential check.
    pub enum CredentialError {
        /// Unknown account or wrong password.
        InvalidCredentials => "invalid credentials",
        /// The provider could not reach a verdict.
        Provider { message: String } => "credential provider failure: {message}",
        /// A backing service the provider depends on failed.
        Infrastructure { message: String } => "credential infrastructure failure: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Return the account id when the credentials match a stored account.
    async fn verify(&self, credentials: &LoginCredentials) -> Result<UserId, CredentialError>;
}

/// Development verifier accepting one well-known account.
///
/// `user@nextmail.com` / `123456` authenticates as a fixed user id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCredentialVerifier;

impl FixtureCredentialVerifier {
    pub const EMAIL: &'static str = "user@nextmail.com";
    pub const PASSWORD: &'static str = "123456";
    pub const USER_ID: &'static str = "410544b2-4001-4271-9855-fec4b6a6442a";
}

#[async_trait]
impl CredentialVerifier for FixtureCredentialVerifier {
    async fn verify(&self, credentials: &LoginCredentials) -> Result<UserId, CredentialError> {
        if credentials.email().as_ref() != Self::EMAIL
            || credentials.password().expose() != Self::PASSWORD
        {
            return Err(CredentialError::invalid_credentials());
        }
        UserId::new(Self::USER_ID)
            .map_err(|err| CredentialError::provider(format!("invalid fixture user id: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@nextmail.com", "123456", true)]
    #[case("user@nextmail.com", "1234567", false)]
    #[case("other@nextmail.com", "123456", false)]
    #[tokio::test]
    async fn fixture_verifier_accepts_only_the_seed_account(
        #[case] email: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let creds = LoginCredentials::try_from_parts(email, password).expect("credentials shape");
        let result = FixtureCredentialVerifier.verify(&creds).await;
        match (should_succeed, result) {
            (true, Ok(id)) => assert_eq!(id.as_ref(), FixtureCredentialVerifier::USER_ID),
            (false, Err(err)) => assert_eq!(err, CredentialError::InvalidCredentials),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(id)) => panic!("expected failure, got success: {id}"),
        }
    }
}
