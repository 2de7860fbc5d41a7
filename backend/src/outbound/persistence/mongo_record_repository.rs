//! MongoDB-backed `RecordRepository` implementation.
//!
//! One repository instance wraps one collection. Identifiers are the hex form
//! of the store's `ObjectId`; anything that does not parse as one is treated
//! as matching no document, so lookups and mutations never reach the server.

use async_trait::async_trait;
use futures_util::StreamExt;
use mongodb::Collection;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::error::ErrorKind;
use tracing::debug;

use crate::domain::ports::{RecordRepository, RecordRepositoryError, RecordStream};
use crate::domain::{RecordFields, RecordId, StoredRecord};

use super::documents::RecordDocument;

/// MongoDB implementation of the `RecordRepository` port.
#[derive(Clone)]
pub struct MongoRecordRepository {
    collection: Collection<RecordDocument>,
}

impl MongoRecordRepository {
    pub(super) fn new(collection: Collection<RecordDocument>) -> Self {
        Self { collection }
    }
}

/// Build an `_id` filter, or `None` when the identifier is not an `ObjectId`.
fn id_filter(id: &RecordId) -> Option<Document> {
    ObjectId::parse_str(AsRef::<str>::as_ref(id))
        .ok()
        .map(|oid| doc! { "_id": oid })
}

fn set_fields(fields: &RecordFields) -> Document {
    doc! {
        "$set": {
            "name": fields.name(),
            "location": fields.location(),
            "title": fields.title(),
        }
    }
}

fn decode_document(document: RecordDocument) -> Result<StoredRecord, RecordRepositoryError> {
    document
        .into_stored()
        .ok_or_else(|| RecordRepositoryError::decode("document has no _id"))
}

/// Map driver errors to domain record repository errors.
fn map_mongo_error(error: mongodb::error::Error) -> RecordRepositoryError {
    debug!(error = %error, "mongodb operation failed");

    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => {
            RecordRepositoryError::connection("database connection error")
        }
        ErrorKind::BsonDeserialization(err) => RecordRepositoryError::decode(err.to_string()),
        _ => RecordRepositoryError::query("database error"),
    }
}

#[async_trait]
impl RecordRepository for MongoRecordRepository {
    async fn insert(&self, fields: &RecordFields) -> Result<RecordId, RecordRepositoryError> {
        let result = self
            .collection
            .insert_one(RecordDocument::for_insert(fields))
            .await
            .map_err(map_mongo_error)?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| RecordId::new(oid.to_hex()))
            .ok_or_else(|| RecordRepositoryError::decode("inserted id is not an ObjectId"))
    }

    async fn find_by_id(
        &self,
        id: &RecordId,
    ) -> Result<Option<StoredRecord>, RecordRepositoryError> {
        let Some(filter) = id_filter(id) else {
            debug!(%id, "identifier is not an ObjectId; treating as no match");
            return Ok(None);
        };

        self.collection
            .find_one(filter)
            .await
            .map_err(map_mongo_error)?
            .map(decode_document)
            .transpose()
    }

    async fn find_all(&self) -> Result<RecordStream, RecordRepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?;

        Ok(cursor
            .map(|item| item.map_err(map_mongo_error).and_then(decode_document))
            .boxed())
    }

    async fn update_by_id(
        &self,
        id: &RecordId,
        fields: &RecordFields,
    ) -> Result<u64, RecordRepositoryError> {
        let Some(filter) = id_filter(id) else {
            return Ok(0);
        };

        let result = self
            .collection
            .update_one(filter, set_fields(fields))
            .await
            .map_err(map_mongo_error)?;
        Ok(result.matched_count)
    }

    async fn delete_by_id(&self, id: &RecordId) -> Result<u64, RecordRepositoryError> {
        let Some(filter) = id_filter(id) else {
            return Ok(0);
        };

        let result = self
            .collection
            .delete_one(filter)
            .await
            .map_err(map_mongo_error)?;
        Ok(result.deleted_count)
    }
}
