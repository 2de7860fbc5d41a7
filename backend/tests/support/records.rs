//! Shared helpers for record endpoint tests.

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use event_ticket_api::Trace;
use event_ticket_api::domain::ports::{RecordRepository, RecordRepositoryError, RecordStream};
use event_ticket_api::domain::{RecordFields, RecordId, ResourceService, StoredRecord, Ticket, User};
use event_ticket_api::inbound::http::json_error_handler;
use event_ticket_api::inbound::http::routes::{configure, not_found};
use event_ticket_api::outbound::memory::InMemoryRecordRepository;
use futures_util::{StreamExt, stream};

/// Build the full record app over the supplied repositories.
pub fn app_with(
    users: Arc<dyn RecordRepository>,
    tickets: Arc<dyn RecordRepository>,
    timeout: Duration,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let users: ResourceService<User> = ResourceService::new(users).with_timeout(timeout);
    let tickets: ResourceService<Ticket> = ResourceService::new(tickets).with_timeout(timeout);

    App::new()
        .app_data(web::Data::new(users))
        .app_data(web::Data::new(tickets))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(not_found))
}

/// App backed by fresh in-memory repositories.
pub fn in_memory_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    app_with(
        Arc::new(InMemoryRecordRepository::default()),
        Arc::new(InMemoryRecordRepository::default()),
        Duration::from_secs(5),
    )
}

/// Repository whose every call fails with a query error.
pub struct FailingRepository;

#[async_trait]
impl RecordRepository for FailingRepository {
    async fn insert(&self, _fields: &RecordFields) -> Result<RecordId, RecordRepositoryError> {
        Err(RecordRepositoryError::query("database error"))
    }

    async fn find_by_id(
        &self,
        _id: &RecordId,
    ) -> Result<Option<StoredRecord>, RecordRepositoryError> {
        Err(RecordRepositoryError::query("database error"))
    }

    async fn find_all(&self) -> Result<RecordStream, RecordRepositoryError> {
        Ok(stream::iter([Err(RecordRepositoryError::decode("bad document"))]).boxed())
    }

    async fn update_by_id(
        &self,
        _id: &RecordId,
        _fields: &RecordFields,
    ) -> Result<u64, RecordRepositoryError> {
        Err(RecordRepositoryError::query("database error"))
    }

    async fn delete_by_id(&self, _id: &RecordId) -> Result<u64, RecordRepositoryError> {
        Err(RecordRepositoryError::query("database error"))
    }
}

/// Repository whose calls never complete.
pub struct StalledRepository;

#[async_trait]
impl RecordRepository for StalledRepository {
    async fn insert(&self, _fields: &RecordFields) -> Result<RecordId, RecordRepositoryError> {
        std::future::pending().await
    }

    async fn find_by_id(
        &self,
        _id: &RecordId,
    ) -> Result<Option<StoredRecord>, RecordRepositoryError> {
        std::future::pending().await
    }

    async fn find_all(&self) -> Result<RecordStream, RecordRepositoryError> {
        std::future::pending().await
    }

    async fn update_by_id(
        &self,
        _id: &RecordId,
        _fields: &RecordFields,
    ) -> Result<u64, RecordRepositoryError> {
        std::future::pending().await
    }

    async fn delete_by_id(&self, _id: &RecordId) -> Result<u64, RecordRepositoryError> {
        std::future::pending().await
    }
}
