//! Backend entry-point: loads settings, connects the store and serves HTTP.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use event_ticket_api::config::AppSettings;
use event_ticket_api::inbound::http::health::HealthState;
use event_ticket_api::outbound::persistence::{MongoConfig, MongoStore};
use server::{ServerConfig, create_server, drain_on, shutdown_signal};

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

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load configuration: {e}")))?;

    let mut config =
        ServerConfig::new(settings.bind_addr()).with_request_timeout(settings.request_timeout());
    if let Some(uri) = settings.mongo_uri() {
        let store = MongoStore::connect(&MongoConfig::new(uri, settings.database()))
            .await
            .map_err(|e| io::Error::other(e.to_string()))?;
        config = config.with_store(store);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    drain_on(shutdown_signal(), server.handle(), health_state);
    server.await
}
