//! Password hashing and credential checking adapters.

mod argon2_hasher;
mod credential_verifier;

pub use argon2_hasher::Argon2PasswordHasher;
pub use credential_verifier::RepositoryCredentialVerifier;
