//! Generic create/read/update/delete orchestration for a resource family.
//!
//! A [`ResourceService`] owns the repository handle for one collection and
//! enforces the per-operation deadline. Every store call runs under
//! `tokio::time::timeout`; on expiry the in-flight future is dropped, which
//! cancels the driver call. Nothing is retried.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use futures_util::TryStreamExt;
use tracing::{debug, error, warn};

use crate::domain::ports::{RecordRepository, RecordRepositoryError};
use crate::domain::{Error, RecordFields, RecordId, Resource, StoredRecord};

/// Deadline applied to each service operation unless configured otherwise.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Resource service parameterised over the record type it serves.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use event_ticket_api::domain::{ResourceService, User};
/// use event_ticket_api::outbound::memory::InMemoryRecordRepository;
///
/// let users: ResourceService<User> =
///     ResourceService::new(Arc::new(InMemoryRecordRepository::default()));
/// ```
pub struct ResourceService<R> {
    repository: Arc<dyn RecordRepository>,
    timeout: Duration,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            timeout: self.timeout,
            resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceService<R> {
    /// Create a service backed by `repository` with the default deadline.
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self {
            repository,
            timeout: DEFAULT_OPERATION_TIMEOUT,
            resource: PhantomData,
        }
    }

    /// Override the per-operation deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Insert a validated record and return it with its new identifier.
    pub async fn create(&self, fields: RecordFields) -> Result<R, Error> {
        let id = self.bounded("insert", self.repository.insert(&fields)).await?;
        debug!(resource = R::LABEL, %id, "record created");
        Ok(R::from_stored(StoredRecord { id, fields }))
    }

    /// Fetch one record; a miss is reported as not found.
    pub async fn get(&self, id: &RecordId) -> Result<R, Error> {
        self.bounded("find_by_id", self.repository.find_by_id(id))
            .await?
            .map(R::from_stored)
            .ok_or_else(not_found::<R>)
    }

    /// Drain the collection into a list.
    ///
    /// The first undecodable document aborts the whole read.
    pub async fn list(&self) -> Result<Vec<R>, Error> {
        let repository = &self.repository;
        self.bounded("find_all", async move {
            repository
                .find_all()
                .await?
                .map_ok(R::from_stored)
                .try_collect::<Vec<R>>()
                .await
        })
        .await
    }

    /// Replace a record's fields and return the updated record.
    ///
    /// Returns `Ok(None)` when no record matched: unlike [`Self::delete`], an
    /// unmatched update is not an error.
    pub async fn update(&self, id: &RecordId, fields: RecordFields) -> Result<Option<R>, Error> {
        let repository = &self.repository;
        self.bounded("update_by_id", async move {
            let matched = repository.update_by_id(id, &fields).await?;
            if matched == 0 {
                return Ok(None);
            }
            let record = repository.find_by_id(id).await?.ok_or_else(|| {
                RecordRepositoryError::query("updated record disappeared before it could be re-read")
            })?;
            Ok::<_, RecordRepositoryError>(Some(R::from_stored(record)))
        })
        .await
    }

    /// Remove a record; zero deletions is reported as not found.
    pub async fn delete(&self, id: &RecordId) -> Result<(), Error> {
        let deleted = self.bounded("delete_by_id", self.repository.delete_by_id(id)).await?;
        if deleted == 0 {
            return Err(not_found::<R>());
        }
        debug!(resource = R::LABEL, %id, "record deleted");
        Ok(())
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, RecordRepositoryError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                error!(resource = R::LABEL, operation, error = %err, "record store call failed");
                Err(Error::internal(err.to_string()))
            }
            Err(_) => {
                warn!(
                    resource = R::LABEL,
                    operation,
                    timeout = ?self.timeout,
                    "record store call timed out"
                );
                Err(Error::internal(format!(
                    "{operation} timed out after {}ms",
                    self.timeout.as_millis()
                )))
            }
        }
    }
}

fn not_found<R: Resource>() -> Error {
    Error::not_found(format!("{} with specified ID not found!", R::LABEL))
}
