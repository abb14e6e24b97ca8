//! Builders for the HTTP state from either Diesel or fixture adapters.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use invoicing::domain::ports::{
    CredentialVerifier, FixtureCredentialVerifier, FixtureInvoiceRepository,
    FixturePasswordHasher, FixtureUserRepository, InvoiceRepository, PasswordHasher,
    UserRepository,
};
use invoicing::domain::{
    AuthenticationService, InvoiceActions, InvoiceListing, InvoiceSchema, RegistrationService,
    RegistrationSchema,
};
use invoicing::inbound::http::state::HttpState;
use invoicing::outbound::cache::InMemoryViewCache;
use invoicing::outbound::persistence::{DbPool, DieselInvoiceRepository, DieselUserRepository};
use invoicing::outbound::security::{Argon2PasswordHasher, RepositoryCredentialVerifier};

use super::ServerConfig;

/// Wire the driving ports over the given driven adapters.
///
/// The command and query sides share one view cache so mutations invalidate
/// what the listing serves.
fn wire<R, U, H, V>(invoices: Arc<R>, users: Arc<U>, hasher: Arc<H>, verifier: Arc<V>) -> HttpState
where
    R: InvoiceRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    V: CredentialVerifier + 'static,
{
    let cache = Arc::new(InMemoryViewCache::new());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    HttpState::new(
        Arc::new(InvoiceActions::new(
            Arc::clone(&invoices),
            Arc::clone(&cache),
            clock,
            InvoiceSchema::new(),
        )),
        Arc::new(InvoiceListing::new(invoices, cache)),
        Arc::new(RegistrationService::new(
            users,
            hasher,
            RegistrationSchema::new(),
        )),
        Arc::new(AuthenticationService::new(verifier)),
    )
}

fn diesel_state(pool: &DbPool) -> HttpState {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let hasher = Arc::new(Argon2PasswordHasher::new());
    let verifier = Arc::new(RepositoryCredentialVerifier::new(
        Arc::clone(&users),
        Arc::clone(&hasher),
    ));
    wire(
        Arc::new(DieselInvoiceRepository::new(pool.clone())),
        users,
        hasher,
        verifier,
    )
}

fn fixture_state() -> HttpState {
    wire(
        Arc::new(FixtureInvoiceRepository),
        Arc::new(FixtureUserRepository),
        Arc::new(FixturePasswordHasher),
        Arc::new(FixtureCredentialVerifier),
    )
}

/// Build handler state, using Diesel adapters when a pool is configured.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => diesel_state(pool),
        None => fixture_state(),
    }
}
