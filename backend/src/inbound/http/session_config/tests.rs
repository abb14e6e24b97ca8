//! Unit tests for session configuration.

use std::collections::HashMap;

use super::test_utils::TempKeyFile;
use super::*;
use mockable::MockEnv;
use rstest::rstest;

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn release_vars(key: &TempKeyFile) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, key.path_str()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

fn release_error(vars: HashMap<&'static str, String>) -> SessionConfigError {
    match session_settings_from_env(&mock_env(vars), BuildMode::Release) {
        Ok(_) => panic!("release settings should be rejected"),
        Err(err) => err,
    }
}

#[rstest]
fn complete_release_settings_are_accepted() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN).expect("key file");
    let settings = session_settings_from_env(&mock_env(release_vars(&key)), BuildMode::Release)
        .expect("valid settings");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_requires_every_toggle(#[case] missing: &'static str) {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN).expect("key file");
    let mut vars = release_vars(&key);
    vars.remove(missing);
    let err = release_error(vars);
    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(SAMESITE_ENV, "sometimes")]
#[case(ALLOW_EPHEMERAL_ENV, "")]
fn release_rejects_malformed_toggles(#[case] name: &'static str, #[case] value: &str) {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN).expect("key file");
    let mut vars = release_vars(&key);
    vars.insert(name, value.to_owned());
    let err = release_error(vars);
    assert!(matches!(err, SessionConfigError::InvalidEnv { name: n, .. } if n == name));
}

#[rstest]
fn release_rejects_short_keys() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN - 1).expect("key file");
    let err = release_error(release_vars(&key));
    assert!(matches!(
        err,
        SessionConfigError::KeyTooShort { length, .. } if length == SESSION_KEY_MIN_LEN - 1
    ));
}

#[rstest]
fn release_rejects_missing_key_file() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN).expect("key file");
    let mut vars = release_vars(&key);
    vars.insert(KEY_FILE_ENV, "/nonexistent/invoicing/session_key".to_owned());
    assert!(matches!(release_error(vars), SessionConfigError::KeyRead { .. }));
}

#[rstest]
fn release_rejects_ephemeral_keys() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN).expect("key file");
    let mut vars = release_vars(&key);
    vars.insert(ALLOW_EPHEMERAL_ENV, "1".to_owned());
    assert!(matches!(
        release_error(vars),
        SessionConfigError::EphemeralNotAllowed
    ));
}

#[rstest]
fn release_rejects_insecure_same_site_none() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN).expect("key file");
    let mut vars = release_vars(&key);
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());
    assert!(matches!(
        release_error(vars),
        SessionConfigError::InsecureSameSiteNone
    ));
}

#[rstest]
fn debug_falls_back_to_safe_defaults() {
    let mut vars = HashMap::new();
    vars.insert(KEY_FILE_ENV, "/nonexistent/invoicing/session_key".to_owned());
    let settings = session_settings_from_env(&mock_env(vars), BuildMode::Debug)
        .expect("debug tolerates missing settings");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
#[case(0)]
#[case(8)]
#[case(SESSION_KEY_MIN_LEN - 1)]
fn debug_replaces_short_keys_with_an_ephemeral_one(#[case] length: usize) {
    let key = TempKeyFile::new(length).expect("key file");
    let settings = session_settings_from_env(&mock_env(release_vars(&key)), BuildMode::Debug)
        .expect("debug tolerates a short key");
    assert_eq!(settings.key.master().len(), 64);
}
