//! Service entry-point: loads settings, wires REST endpoints, the brand event
//! feed and OpenAPI docs, then serves until shutdown.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), forbid(clippy::expect_used))]

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use server::{ServerConfig, ServerSettings, create_server};

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

    let settings = ServerSettings::load()
        .map_err(|error| std::io::Error::other(format!("load settings: {error}")))?;
    let allowed_origins = settings.allowed_origins().map_err(|error| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid allowed origin: {error}"),
        )
    })?;

    let config = ServerConfig::new(settings.bind_addr())
        .with_allowed_origins(allowed_origins)
        .with_event_capacity(settings.event_capacity());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::default_metrics());

    tracing::info!(bind_addr = %config.bind_addr(), "starting brand studio");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if actix_web::rt::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown requested, draining");
            health_state.begin_draining();
            handle.stop(true).await;
        }
    });
    server.await
}
