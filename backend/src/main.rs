//! Backend entry-point: loads settings, prepares persistence, and serves the
//! invoice and account form actions.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use invoicing::inbound::http::health::HealthState;
use invoicing::inbound::http::session_config::fingerprint::key_fingerprint;
use invoicing::inbound::http::session_config::{BuildMode, session_settings_from_env};
use invoicing::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use invoicing::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    info!(fingerprint = %key_fingerprint(&session.key), "session key loaded");

    let mut config = ServerConfig::new(session, bind_addr);
    match settings.database_url() {
        Some(url) => {
            if settings.run_migrations {
                let applied = run_pending_migrations(url)
                    .await
                    .map_err(std::io::Error::other)?;
                info!(applied, "database migrations applied");
            }
            let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; serving in-memory fixture adapters"),
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await
}
