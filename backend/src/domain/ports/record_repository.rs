//! Port for document-store access, one instance per collection.

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use crate::domain::{RecordFields, RecordId, StoredRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by record store adapters.
    pub enum RecordRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "record store connection failed: {message}",
        /// A read or write was rejected or failed mid-flight.
        Query { message: String } => "record store query failed: {message}",
        /// A stored document could not be decoded into a record.
        Decode { message: String } => "record store returned an undecodable document: {message}",
    }
}

/// Lazy, one-shot sequence of every record in a collection, in store order.
pub type RecordStream = BoxStream<'static, Result<StoredRecord, RecordRepositoryError>>;

/// Thin pass-through to a document collection.
///
/// Identifiers that the store cannot interpret match nothing: lookups yield
/// `None` and mutations report zero affected documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Insert a new record and return the identifier the store assigned.
    async fn insert(&self, fields: &RecordFields) -> Result<RecordId, RecordRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(
        &self,
        id: &RecordId,
    ) -> Result<Option<StoredRecord>, RecordRepositoryError>;

    /// Open a stream over every record in the collection.
    async fn find_all(&self) -> Result<RecordStream, RecordRepositoryError>;

    /// Replace the fields of the matching record; returns the matched count.
    async fn update_by_id(
        &self,
        id: &RecordId,
        fields: &RecordFields,
    ) -> Result<u64, RecordRepositoryError>;

    /// Remove the matching record; returns the deleted count.
    async fn delete_by_id(&self, id: &RecordId) -> Result<u64, RecordRepositoryError>;
}
