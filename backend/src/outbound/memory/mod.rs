//! Process-local `RecordRepository` used when no document store is configured.
//!
//! Records live for the lifetime of the process and are kept in insertion
//! order. Identifiers are freshly generated `ObjectId` hex strings, so ids
//! look the same as those issued by the MongoDB adapter.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use futures_util::{StreamExt, stream};
use mongodb::bson::oid::ObjectId;

use crate::domain::ports::{RecordRepository, RecordRepositoryError, RecordStream};
use crate::domain::{RecordFields, RecordId, StoredRecord};

/// In-memory implementation of the `RecordRepository` port.
///
/// Clones share the same backing collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordRepository {
    records: Arc<Mutex<Vec<StoredRecord>>>,
}

impl InMemoryRecordRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<StoredRecord>>, RecordRepositoryError> {
        self.records
            .lock()
            .map_err(|_| RecordRepositoryError::query("in-memory record store poisoned"))
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn insert(&self, fields: &RecordFields) -> Result<RecordId, RecordRepositoryError> {
        let id = RecordId::new(ObjectId::new().to_hex());
        self.lock()?.push(StoredRecord {
            id: id.clone(),
            fields: fields.clone(),
        });
        Ok(id)
    }

    async fn find_by_id(
        &self,
        id: &RecordId,
    ) -> Result<Option<StoredRecord>, RecordRepositoryError> {
        Ok(self
            .lock()?
            .iter()
            .find(|record| &record.id == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<RecordStream, RecordRepositoryError> {
        let snapshot = self.lock()?.clone();
        Ok(stream::iter(snapshot.into_iter().map(Ok)).boxed())
    }

    async fn update_by_id(
        &self,
        id: &RecordId,
        fields: &RecordFields,
    ) -> Result<u64, RecordRepositoryError> {
        let mut records = self.lock()?;
        match records.iter_mut().find(|record| &record.id == id) {
            Some(record) => {
                record.fields = fields.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: &RecordId) -> Result<u64, RecordRepositoryError> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|record| &record.id != id);
        Ok((before - records.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::TryStreamExt;
    use rstest::{fixture, rstest};

    fn fields(name: &str) -> RecordFields {
        RecordFields::new(
            Some(name.to_owned()),
            Some("Hall".to_owned()),
            Some("Gala".to_owned()),
        )
        .expect("valid fields")
    }

    #[fixture]
    fn repository() -> InMemoryRecordRepository {
        InMemoryRecordRepository::default()
    }

    #[rstest]
    #[tokio::test]
    async fn insert_then_find(repository: InMemoryRecordRepository) {
        let id = repository.insert(&fields("A")).await.expect("insert");

        let found = repository
            .find_by_id(&id)
            .await
            .expect("lookup")
            .expect("record present");
        assert_eq!(found.fields, fields("A"));
        assert!(ObjectId::parse_str(id.as_ref()).is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn find_all_preserves_insertion_order(repository: InMemoryRecordRepository) {
        let first = repository.insert(&fields("A")).await.expect("insert");
        let second = repository.insert(&fields("B")).await.expect("insert");

        let all: Vec<StoredRecord> = repository
            .find_all()
            .await
            .expect("stream")
            .try_collect()
            .await
            .expect("collect");
        let ids: Vec<&RecordId> = all.iter().map(|record| &record.id).collect();
        assert_eq!(ids, vec![&first, &second]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_reports_matched_count(repository: InMemoryRecordRepository) {
        let id = repository.insert(&fields("A")).await.expect("insert");

        let matched = repository
            .update_by_id(&id, &fields("Z"))
            .await
            .expect("update");
        assert_eq!(matched, 1);

        let unmatched = repository
            .update_by_id(&RecordId::new("missing"), &fields("Z"))
            .await
            .expect("update");
        assert_eq!(unmatched, 0);

        let found = repository.find_by_id(&id).await.expect("lookup");
        assert_eq!(found.map(|record| record.fields), Some(fields("Z")));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_is_not_repeatable(repository: InMemoryRecordRepository) {
        let id = repository.insert(&fields("A")).await.expect("insert");

        assert_eq!(repository.delete_by_id(&id).await.expect("delete"), 1);
        assert_eq!(repository.delete_by_id(&id).await.expect("delete"), 0);
        assert!(repository.find_by_id(&id).await.expect("lookup").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn clones_share_records(repository: InMemoryRecordRepository) {
        let clone = repository.clone();
        let id = clone.insert(&fields("A")).await.expect("insert");

        assert!(repository.find_by_id(&id).await.expect("lookup").is_some());
    }
}
