//! Record primitives shared by every resource family.
//!
//! Users and tickets have the same shape on the wire, but each family gets
//! its own type implementing [`Resource`] so the two cannot be mixed up.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the record store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a raw identifier. No format is enforced: unknown or malformed ids
    /// simply match nothing in the store.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields every record must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// `name`
    Name,
    /// `location`
    Location,
    /// `title`
    Title,
}

impl RequiredField {
    /// Field name as it appears in JSON bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Location => "location",
            Self::Title => "title",
        }
    }
}

/// Validation failure listing every required field that was absent or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordValidationError {
    missing: Vec<RequiredField>,
}

impl RecordValidationError {
    /// Fields that failed the non-empty check, in declaration order.
    pub fn missing(&self) -> &[RequiredField] {
        &self.missing
    }
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.missing.iter().map(|field| field.as_str()).collect();
        write!(f, "missing required fields: {}", names.join(", "))
    }
}

impl std::error::Error for RecordValidationError {}

/// The replaceable content of a record.
///
/// ## Invariants
/// - Values built through [`RecordFields::new`] have a non-empty `name`,
///   `location` and `title`.
/// - Values read back from the store are trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFields {
    name: String,
    location: String,
    title: String,
}

impl RecordFields {
    /// Validate and construct record fields.
    ///
    /// Absent (`None`) and empty values are both rejected, and the error
    /// reports all offending fields at once. Whitespace is content and is
    /// kept as given.
    ///
    /// # Examples
    /// ```
    /// use event_ticket_api::domain::RecordFields;
    ///
    /// let fields = RecordFields::new(Some("Ada".into()), Some("London".into()), Some("Gala".into()))
    ///     .expect("all fields present");
    /// assert_eq!(fields.name(), "Ada");
    ///
    /// let err = RecordFields::new(None, None, Some("Gala".into())).unwrap_err();
    /// assert_eq!(err.to_string(), "missing required fields: name, location");
    /// ```
    pub fn new(
        name: Option<String>,
        location: Option<String>,
        title: Option<String>,
    ) -> Result<Self, RecordValidationError> {
        let mut missing = Vec::new();
        let name = require(name, RequiredField::Name, &mut missing);
        let location = require(location, RequiredField::Location, &mut missing);
        let title = require(title, RequiredField::Title, &mut missing);

        match (name, location, title) {
            (Some(name), Some(location), Some(title)) if missing.is_empty() => Ok(Self {
                name,
                location,
                title,
            }),
            _ => Err(RecordValidationError { missing }),
        }
    }

    /// Rebuild fields from a stored document without re-validating them.
    pub(crate) fn from_storage(name: String, location: String, title: String) -> Self {
        Self {
            name,
            location,
            title,
        }
    }

    /// Name of the person or event the record describes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the record applies.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Title or role text.
    pub fn title(&self) -> &str {
        &self.title
    }
}

fn require(
    value: Option<String>,
    field: RequiredField,
    missing: &mut Vec<RequiredField>,
) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            missing.push(field);
            None
        }
    }
}

/// A record as held by the store: identifier plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: RecordId,
    pub fields: RecordFields,
}

/// A resource family served over HTTP and persisted in its own collection.
pub trait Resource: Serialize + Clone + Send + Sync + 'static {
    /// Capitalised singular label, used in messages such as
    /// "User successfully deleted!".
    const LABEL: &'static str;

    /// Name of the store collection holding this family.
    const COLLECTION: &'static str;

    /// Build the typed resource from a stored record.
    fn from_stored(record: StoredRecord) -> Self;

    /// Store-assigned identifier.
    fn id(&self) -> &RecordId;

    /// Record content.
    fn fields(&self) -> &RecordFields;
}
