//! Backend entry-point: loads settings, prepares the store and serves the
//! users and schedules API.

mod server;

use std::ffi::OsString;
use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use business_backend::example_data::ExampleDataSettings;
use business_backend::inbound::http::health::HealthState;
use business_backend::outbound::persistence::{DbPool, run_pending_migrations};

use server::{AppSettings, ServerConfig, build_http_state, create_server, drain_on};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    // Seeding settings come from the environment and config file only; the
    // command line belongs to `AppSettings`.
    let program = std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("business-backend"));
    let seeding = ExampleDataSettings::load_from_iter([program])
        .map_err(|err| io::Error::other(format!("failed to load example data settings: {err}")))?;

    let mut config = ServerConfig::new(settings.bind_addr()?);
    if let Some(pool_config) = settings.pool_config() {
        if settings.run_migrations() {
            run_pending_migrations(pool_config.database_url())
                .await
                .map_err(|err| io::Error::other(format!("migrations failed: {err}")))?;
            info!("database migrations applied");
        }
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|err| io::Error::other(format!("database pool failed: {err}")))?;
        config = config.with_db_pool(pool);
    } else {
        info!("no database URL configured; serving from the in-memory store");
    }

    let http_state = build_http_state(config.db_pool.as_ref(), &seeding)
        .await
        .map_err(|err| io::Error::other(format!("startup seeding failed: {err}")))?;

    let health_state = web::Data::new(HealthState::new());
    info!(bind_addr = %config.bind_addr, "starting server");
    let server = create_server(health_state.clone(), http_state, config)?;
    actix_web::rt::spawn(drain_on(ctrl_c(), health_state, server.handle()));
    server.await
}

/// Resolves on Ctrl-C. Never resolves when the handler cannot be installed.
async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
