//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{error, info, warn};

use event_ticket_api::Trace;
use event_ticket_api::domain::ports::RecordRepository;
use event_ticket_api::domain::{Resource, ResourceService, Ticket, User};
use event_ticket_api::inbound::http::health::{HealthState, live, ready};
use event_ticket_api::inbound::http::json_error_handler;
use event_ticket_api::inbound::http::routes::{configure, not_found};
use event_ticket_api::outbound::memory::InMemoryRecordRepository;
use event_ticket_api::outbound::persistence::MongoStore;

/// Build the service for resource family `R`.
///
/// Uses the MongoDB collection when a store is connected, otherwise an
/// in-memory repository shared by every worker.
fn build_service<R: Resource>(
    store: Option<&MongoStore>,
    timeout: Duration,
) -> web::Data<ResourceService<R>> {
    let repository: Arc<dyn RecordRepository> = match store {
        Some(store) => Arc::new(store.repository_for::<R>()),
        None => Arc::new(InMemoryRecordRepository::default()),
    };
    web::Data::new(ResourceService::new(repository).with_timeout(timeout))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    users: web::Data<ResourceService<User>>,
    tickets: web::Data<ResourceService<Ticket>>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        users,
        tickets,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(users)
        .app_data(tickets)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(configure)
        .default_service(web::to(not_found))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        request_timeout,
        store,
    } = config;

    if store.is_none() {
        warn!("no MongoDB URI configured; falling back to in-memory store");
    }
    let users = build_service::<User>(store.as_ref(), request_timeout);
    let tickets = build_service::<Ticket>(store.as_ref(), request_timeout);

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            users: users.clone(),
            tickets: tickets.clone(),
        })
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
///
/// # Errors
/// Returns [`io::Error`] when the signal handlers cannot be installed.
pub async fn shutdown_signal() -> io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = terminate.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

/// Drain the instance once `signal` resolves.
///
/// Health checks switch to 503 before the server stops accepting connections, then
/// in-flight requests are allowed to finish.
pub fn drain_on<F>(signal: F, handle: ServerHandle, health_state: web::Data<HealthState>)
where
    F: Future<Output = io::Result<()>> + 'static,
{
    actix_web::rt::spawn(async move {
        if let Err(err) = signal.await {
            error!(error = %err, "failed to listen for shutdown signal");
            return;
        }
        info!("shutdown requested; draining");
        health_state.drain();
        handle.stop(true).await;
    });
}
