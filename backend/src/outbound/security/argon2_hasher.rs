//! Argon2id implementation of the [`PasswordHasher`] port.
//!
//! Digests are PHC strings (`$argon2id$v=19$...`) carrying their own salt and
//! parameters. Hashing is CPU bound, so both operations run on the blocking
//! pool instead of an executor thread.

use argon2::password_hash::{self, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier as _};
use async_trait::async_trait;
use rand::{RngCore, rngs::OsRng};
use tokio::task;
use zeroize::Zeroize;

use crate::domain::ports::{PasswordHashError, PasswordHasher};
use crate::domain::{Password, PasswordDigest};

const SALT_BYTES: usize = 16;

/// Argon2id hasher using the crate's default cost parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    /// Create a hasher.
    pub fn new() -> Self {
        Self
    }
}

fn fresh_salt() -> Result<SaltString, PasswordHashError> {
    let mut bytes = [0_u8; SALT_BYTES];
    OsRng.fill_bytes(&mut bytes);
    let salt = SaltString::encode_b64(&bytes)
        .map_err(|err| PasswordHashError::hashing(err.to_string()));
    bytes.zeroize();
    salt
}

fn hash_blocking(password: &Password) -> Result<PasswordDigest, PasswordHashError> {
    let salt = fresh_salt()?;
    let encoded = Argon2::default()
        .hash_password(password.expose().as_bytes(), &salt)
        .map_err(|err| PasswordHashError::hashing(err.to_string()))?
        .to_string();
    PasswordDigest::new(encoded).map_err(|err| PasswordHashError::hashing(err.to_string()))
}

fn verify_blocking(
    password: &Password,
    digest: &PasswordDigest,
) -> Result<bool, PasswordHashError> {
    let parsed = PasswordHash::new(digest.as_str())
        .map_err(|err| PasswordHashError::malformed_digest(err.to_string()))?;
    match Argon2::default().verify_password(password.expose().as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(PasswordHashError::hashing(err.to_string())),
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHashError> {
        let password = password.clone();
        task::spawn_blocking(move || hash_blocking(&password))
            .await
            .map_err(|err| PasswordHashError::hashing(format!("hashing task failed: {err}")))?
    }

    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHashError> {
        let password = password.clone();
        let digest = digest.clone();
        task::spawn_blocking(move || verify_blocking(&password, &digest))
            .await
            .map_err(|err| PasswordHashError::hashing(format!("verify task failed: {err}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn digests_verify_only_the_original_password() {
        let hasher = Argon2PasswordHasher::new();
        let password = Password::new("123456");
        let digest = hasher.hash(&password).await.expect("hash succeeds");

        assert!(digest.as_str().starts_with("$argon2id$"));
        assert!(!digest.as_str().contains("123456"));
        assert!(hasher.verify(&password, &digest).await.expect("verify"));
        assert!(
            !hasher
                .verify(&Password::new("1234567"), &digest)
                .await
                .expect("verify")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn each_digest_is_salted_independently() {
        let hasher = Argon2PasswordHasher::new();
        let password = Password::new("hunter22");
        let first = hasher.hash(&password).await.expect("hash");
        let second = hasher.hash(&password).await.expect("hash");
        assert_ne!(first, second);
    }

    #[rstest]
    #[case("not-a-phc-string")]
    #[case("fixture-sha256$abcdef")]
    #[tokio::test]
    async fn unparseable_digests_are_reported_as_malformed(#[case] stored: &str) {
        let digest = PasswordDigest::new(stored).expect("non-empty digest");
        let result = Argon2PasswordHasher::new()
            .verify(&Password::new("123456"), &digest)
            .await;
        assert!(matches!(
            result,
            Err(PasswordHashError::MalformedDigest { .. })
        ));
    }
}
