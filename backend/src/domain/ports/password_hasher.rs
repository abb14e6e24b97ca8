//! Port for salted one-way password hashing.
use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::domain::{Password, PasswordDigest};

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHashError {
        /// Digest could not be computed.
        Hashing { message: String } => "password hashing failed: {message}",
        /// Stored digest is not in a recognised format.
        MalformedDigest { message: String } => "stored password digest is malformed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Compute a freshly salted digest of `password`.
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHashError>;

    /// Check `password` against a stored digest.
    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHashError>;
}

const FIXTURE_PREFIX: &str = "fixture-sha256$";

/// Unsalted, fast hasher for wiring without a database. Not for real accounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePasswordHasher;

impl FixturePasswordHasher {
    fn encode(password: &Password) -> String {
        let digest = Sha256::digest(password.expose().as_bytes());
        format!("{FIXTURE_PREFIX}{}", hex::encode(digest))
    }
}

#[async_trait]
impl PasswordHasher for FixturePasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHashError> {
        PasswordDigest::new(Self::encode(password))
            .map_err(|err| PasswordHashError::hashing(err.to_string()))
    }

    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHashError> {
        if !digest.as_str().starts_with(FIXTURE_PREFIX) {
            return Err(PasswordHashError::malformed_digest("unknown scheme"));
        }
        Ok(digest.as_str() == Self::encode(password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_hasher_verifies_its_own_digests() {
        let hasher = FixturePasswordHasher;
        let password = Password::new("123456");
        let digest = hasher.hash(&password).await.expect("hash succeeds");

        assert!(!digest.as_str().contains("123456"));
        assert!(hasher.verify(&password, &digest).await.expect("verify"));
        assert!(
            !hasher
                .verify(&Password::new("654321"), &digest)
                .await
                .expect("verify")
        );
    }

    #[tokio::test]
    async fn fixture_hasher_rejects_foreign_digests() {
        let digest = PasswordDigest::new("$argon2id$v=19$m=19456").expect("digest");
        let result = FixturePasswordHasher
            .verify(&Password::new("123456"), &digest)
            .await;
        assert!(matches!(result, Err(PasswordHashError::MalformedDigest { .. })));
    }
}
