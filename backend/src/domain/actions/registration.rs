//! Sign-up action.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::navigation::LOGIN_PATH;
use crate::domain::ports::{PasswordHasher, RegistrationCommand, UserInsertOutcome, UserRepository};
use crate::domain::{FormData, NewUser, RegistrationRejection, RegistrationSchema, UserId};

use super::{ActionOutcome, messages};

/// Registration action: validate, hash, insert, then send the user to sign in.
#[derive(Clone)]
pub struct RegistrationService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
    schema: RegistrationSchema,
}

impl<U, H> RegistrationService<U, H> {
    /// Create the action with an explicitly constructed schema.
    pub fn new(users: Arc<U>, hasher: Arc<H>, schema: RegistrationSchema) -> Self {
        Self {
            users,
            hasher,
            schema,
        }
    }
}

#[async_trait]
impl<U, H> RegistrationCommand for RegistrationService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, form: &FormData) -> ActionOutcome {
        let registration = match self.schema.validate(form) {
            Ok(registration) => registration,
            Err(rejection) => {
                debug!(fields = ?rejection.errors().fields().collect::<Vec<_>>(), "registration rejected");
                let summary = match rejection {
                    RegistrationRejection::InvalidFields(_) => messages::REGISTER_INVALID,
                    RegistrationRejection::PasswordMismatch(_) => messages::REGISTER_MISMATCH,
                };
                return ActionOutcome::invalid(rejection.into_errors(), summary);
            }
        };

        let digest = match self.hasher.hash(&registration.password).await {
            Ok(digest) => digest,
            Err(err) => {
                error!(error = %err, "failed to hash password");
                return ActionOutcome::persistence_failed(messages::REGISTER_FAILED);
            }
        };
        let user = NewUser {
            id: UserId::random(),
            name: registration.name,
            email: registration.email,
            password: digest,
        };

        match self.users.insert(&user).await {
            Ok(UserInsertOutcome::Created) => {
                info!(user_id = %user.id, "user registered");
                ActionOutcome::Redirect(LOGIN_PATH)
            }
            Ok(UserInsertOutcome::AlreadyExists) => {
                info!("registration for an existing email left unchanged");
                ActionOutcome::Redirect(LOGIN_PATH)
            }
            Err(err) => {
                error!(error = %err, "failed to register user");
                ActionOutcome::persistence_failed(messages::REGISTER_FAILED)
            }
        }
    }
}
