//! The `Record` trait shared by every persisted entity

use serde::Serialize;
use serde_json::{Map, Value};

use super::ValidationError;

/// Shape of a single field, used to describe records in `/schema`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Required string
    String,
    /// Required integer within `min..=max`
    Integer { min: i64, max: i64 },
    /// Required `YYYY-MM-DD` date
    Date,
    /// Required array of strings
    StringList,
    /// Optional string with a default
    StringDefault(&'static str),
    /// Optional boolean with a default
    BoolDefault(bool),
}

impl FieldKind {
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::StringDefault(_) | Self::BoolDefault(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
        }
    }
}

/// A record kind stored in its own collection.
pub trait Record: Serialize + Sized + Send + Sync + 'static {
    /// Collection name, the lowercased entity name
    const COLLECTION: &'static str;

    /// Entity title reported in `/schema`
    const TITLE: &'static str;

    fn fields() -> &'static [FieldSpec];

    /// Validate a JSON object into a record.
    fn from_payload(payload: &Map<String, Value>) -> Result<Self, ValidationError>;

    /// Student this record points at, if it carries a soft reference.
    fn student_ref(&self) -> Option<&str> {
        None
    }
}
