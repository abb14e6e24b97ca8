//! Process settings loaded via OrthoConfig.
//!
//! Values come from `INVOICING_*` environment variables, an optional config
//! file, and command-line flags, in increasing precedence.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Start-up settings for the HTTP server and its persistence adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "INVOICING")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; the server uses in-memory adapters without it.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl AppSettings {
    /// Parse the configured bind address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "INVOICING_BIND_ADDR",
        "INVOICING_DATABASE_URL",
        "INVOICING_POOL_MAX_SIZE",
        "INVOICING_RUN_MIGRATIONS",
    ];

    fn load() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("invoicing")]).expect("config should load")
    }

    fn only(set: Option<(&'static str, &str)>) -> Vec<(&'static str, Option<String>)> {
        VARS.iter()
            .map(|name| match set {
                Some((key, value)) if key == *name => (*name, Some(value.to_owned())),
                _ => (*name, None),
            })
            .collect()
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(only(None));

        let settings = load();
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert!(!settings.run_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("INVOICING_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "INVOICING_DATABASE_URL",
                Some("postgres://localhost/invoices".to_owned()),
            ),
            ("INVOICING_POOL_MAX_SIZE", Some("4".to_owned())),
            ("INVOICING_RUN_MIGRATIONS", Some("true".to_owned())),
        ]);

        let settings = load();
        assert_eq!(
            settings.bind_addr().expect("override parses").port(),
            9000
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/invoices")
        );
        assert_eq!(settings.pool_max_size(), 4);
        assert!(settings.run_migrations);
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env(only(Some(("INVOICING_DATABASE_URL", "   "))));

        assert!(load().database_url().is_none());
    }

    #[rstest]
    fn malformed_bind_address_is_reported() {
        let _guard = lock_env(only(Some(("INVOICING_BIND_ADDR", "not-an-address"))));

        assert!(load().bind_addr().is_err());
    }
}
