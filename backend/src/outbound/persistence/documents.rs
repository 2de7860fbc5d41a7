//! BSON document shape shared by the `users` and `ticket` collections.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::{RecordFields, RecordId, StoredRecord};

/// Stored form of a record. `_id` is omitted on insert so the store assigns it.
///
/// Missing text fields decode as empty strings; only type mismatches fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct RecordDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub title: String,
}

impl RecordDocument {
    pub fn for_insert(fields: &RecordFields) -> Self {
        Self {
            id: None,
            name: fields.name().to_owned(),
            location: fields.location().to_owned(),
            title: fields.title().to_owned(),
        }
    }

    /// Convert into a domain record; `None` when the document carries no `_id`.
    pub fn into_stored(self) -> Option<StoredRecord> {
        let id = self.id?;
        Some(StoredRecord {
            id: RecordId::new(id.to_hex()),
            fields: RecordFields::from_storage(self.name, self.location, self.title),
        })
    }
}
