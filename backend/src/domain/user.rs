//! User records.

use serde::Serialize;

use super::record::{RecordFields, RecordId, Resource, StoredRecord};

/// A user entry in the `users` collection.
///
/// Serialises as `{"id", "name", "location", "title"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: RecordId,
    #[serde(flatten)]
    fields: RecordFields,
}

impl User {
    pub fn new(id: RecordId, fields: RecordFields) -> Self {
        Self { id, fields }
    }
}

impl Resource for User {
    const LABEL: &'static str = "User";
    const COLLECTION: &'static str = "users";

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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialises_fields_alongside_id() {
        let fields = RecordFields::new(
            Some("Ada".to_owned()),
            Some("London".to_owned()),
            Some("Engineer".to_owned()),
        )
        .expect("valid fields");
        let user = User::new(RecordId::new("65a1f0c2e4b0a1b2c3d4e5f6"), fields);

        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(
            value,
            json!({
                "id": "65a1f0c2e4b0a1b2c3d4e5f6",
                "name": "Ada",
                "location": "London",
                "title": "Engineer",
            })
        );
    }
}
