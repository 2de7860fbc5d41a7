//! Ticket records.

use serde::Serialize;

use super::record::{RecordFields, RecordId, Resource, StoredRecord};

/// A ticket entry in the `ticket` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    id: RecordId,
    #[serde(flatten)]
    fields: RecordFields,
}

impl Ticket {
    pub fn new(id: RecordId, fields: RecordFields) -> Self {
        Self { id, fields }
    }
}

impl Resource for Ticket {
    const LABEL: &'static str = "Ticket";
    const COLLECTION: &'static str = "ticket";

    fn from_stored(record: StoredRecord) -> Self {
        Self::new(record.id, record.fields)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn fields(&self) -> &RecordFields {
        &self.fields
    }
}
