//! Registration form rules.

use crate::domain::{
    EmailAddress, FieldErrors, FormData, Password, UserName, UserValidationError,
};

use super::{fields, messages};

/// Minimum length, in characters, of a password and its confirmation.
pub const PASSWORD_MIN: usize = 6;

/// Normalised registration: the confirmation has been checked and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: Password,
}

/// Why a registration form was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationRejection {
    /// One or more field rules failed.
    InvalidFields(FieldErrors),
    /// Field rules passed but the confirmation differs from the password.
    PasswordMismatch(FieldErrors),
}

impl RegistrationRejection {
    /// Field errors to show next to the inputs.
    pub fn errors(&self) -> &FieldErrors {
        match self {
            Self::InvalidFields(errors) | Self::PasswordMismatch(errors) => errors,
        }
    }

    /// Consume the rejection, keeping the field errors.
    pub fn into_errors(self) -> FieldErrors {
        match self {
            Self::InvalidFields(errors) | Self::PasswordMismatch(errors) => errors,
        }
    }
}

fn name_message(error: &UserValidationError) -> &'static str {
    match error {
        UserValidationError::NameTooLong { .. } => messages::USERNAME_TOO_LONG,
        _ => messages::USERNAME_TOO_SHORT,
    }
}

/// Rules for the sign-up form.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationSchema;

impl RegistrationSchema {
    /// Construct the schema.
    pub fn new() -> Self {
        Self
    }

    /// Apply the field rules, then the password confirmation rule.
    ///
    /// The confirmation is only compared once every field rule has passed.
    pub fn validate(&self, form: &FormData) -> Result<Registration, RegistrationRejection> {
        let mut errors = FieldErrors::new();

        let name = UserName::new(form.get(fields::USERNAME).unwrap_or_default())
            .map_err(|err| errors.push(fields::USERNAME, name_message(&err)))
            .ok();
        let email = EmailAddress::new(form.get(fields::EMAIL).unwrap_or_default())
            .map_err(|_| errors.push(fields::EMAIL, messages::INVALID_EMAIL))
            .ok();
        let password = Password::new(form.get(fields::PASSWORD).unwrap_or_default());
        if password.char_len() < PASSWORD_MIN {
            errors.push(fields::PASSWORD, messages::PASSWORD_TOO_SHORT);
        }
        let confirmation = Password::new(form.get(fields::CONFIRM_PASSWORD).unwrap_or_default());
        if confirmation.char_len() < PASSWORD_MIN {
            errors.push(fields::CONFIRM_PASSWORD, messages::PASSWORD_TOO_SHORT);
        }

        let (Some(name), Some(email)) = (name, email) else {
            return Err(RegistrationRejection::InvalidFields(errors));
        };
        if !errors.is_empty() {
            return Err(RegistrationRejection::InvalidFields(errors));
        }

        if password != confirmation {
            let mut mismatch = FieldErrors::new();
            mismatch.push(fields::PASSWORD, messages::PASSWORDS_DIFFER);
            mismatch.push(fields::CONFIRM_PASSWORD, messages::PASSWORDS_DIFFER);
            return Err(RegistrationRejection::PasswordMismatch(mismatch));
        }

        Ok(Registration {
            name,
            email,
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn schema() -> RegistrationSchema {
        RegistrationSchema::new()
    }

    fn form(username: &str, email: &str, password: &str, confirm: &str) -> FormData {
        FormData::from_pairs([
            (fields::USERNAME, username),
            (fields::EMAIL, email),
            (fields::PASSWORD, password),
            (fields::CONFIRM_PASSWORD, confirm),
        ])
    }

    #[rstest]
    fn accepts_a_matching_registration(schema: RegistrationSchema) {
        let registration = schema
            .validate(&form(" Ada ", "ada@example.com", "secret1", "secret1"))
            .expect("valid registration");
        assert_eq!(registration.name.as_ref(), "Ada");
        assert_eq!(registration.email.as_ref(), "ada@example.com");
        assert_eq!(registration.password.expose(), "secret1");
    }

    #[rstest]
    fn mismatch_flags_both_password_fields(schema: RegistrationSchema) {
        let rejection = schema
            .validate(&form("Ada", "ada@example.com", "secret1", "secret2"))
            .expect_err("mismatch must be rejected");
        assert!(matches!(
            rejection,
            RegistrationRejection::PasswordMismatch(_)
        ));
        let errors = rejection.errors();
        assert_eq!(errors.messages(fields::PASSWORD), [messages::PASSWORDS_DIFFER]);
        assert_eq!(
            errors.messages(fields::CONFIRM_PASSWORD),
            [messages::PASSWORDS_DIFFER]
        );
        assert!(!errors.contains(fields::EMAIL));
    }

    #[rstest]
    fn mismatch_is_not_checked_while_fields_are_invalid(schema: RegistrationSchema) {
        let rejection = schema
            .validate(&form("A", "ada@example.com", "secret1", "other12"))
            .expect_err("short name must be rejected");
        let errors = rejection.into_errors();
        assert_eq!(
            errors.messages(fields::USERNAME),
            [messages::USERNAME_TOO_SHORT]
        );
        assert!(!errors.contains(fields::PASSWORD));
    }

    #[rstest]
    fn overlong_name_has_its_own_message(schema: RegistrationSchema) {
        let name = "n".repeat(crate::domain::user::USER_FIELD_MAX + 1);
        let errors = schema
            .validate(&form(&name, "ada@example.com", "secret1", "secret1"))
            .expect_err("long name must be rejected")
            .into_errors();
        assert_eq!(
            errors.messages(fields::USERNAME),
            [messages::USERNAME_TOO_LONG]
        );
    }

    #[rstest]
    fn email_case_does_not_create_a_new_identity(schema: RegistrationSchema) {
        let registration = schema
            .validate(&form("Ada", "Ada@Example.COM", "secret1", "secret1"))
            .expect("valid registration");
        assert_eq!(registration.email.as_ref(), "ada@example.com");
    }

    #[rstest]
    #[case("short", "secret1", &[fields::PASSWORD])]
    #[case("secret1", "short", &[fields::CONFIRM_PASSWORD])]
    #[case("", "", &[fields::CONFIRM_PASSWORD, fields::PASSWORD])]
    fn short_passwords_are_reported_per_field(
        schema: RegistrationSchema,
        #[case] password: &str,
        #[case] confirm: &str,
        #[case] flagged: &[&str],
    ) {
        let rejection = schema
            .validate(&form("Ada", "ada@example.com", password, confirm))
            .expect_err("short password must be rejected");
        assert!(matches!(rejection, RegistrationRejection::InvalidFields(_)));
        assert_eq!(rejection.errors().fields().collect::<Vec<_>>(), flagged);
    }

    #[rstest]
    fn missing_fields_are_all_reported(schema: RegistrationSchema) {
        let errors = schema
            .validate(&FormData::default())
            .expect_err("empty form must be rejected")
            .into_errors();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            [
                fields::CONFIRM_PASSWORD,
                fields::EMAIL,
                fields::PASSWORD,
                fields::USERNAME
            ]
        );
    }
}
