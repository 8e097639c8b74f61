//! Maintenance issue record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{FieldKind, FieldSpec, Record};
use super::{PayloadReader, ValidationError};

/// Status given to issues that don't specify one
pub const DEFAULT_STATUS: &str = "open";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "student_id",
        FieldKind::String,
        "Reference to Student document _id (string)",
    ),
    FieldSpec::new("title", FieldKind::String, "Issue title"),
    FieldSpec::new(
        "description",
        FieldKind::String,
        "Detailed description of the issue",
    ),
    FieldSpec::new(
        "status",
        FieldKind::StringDefault(DEFAULT_STATUS),
        "Status: open, in_progress, resolved",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub student_id: String,
    pub title: String,
    pub description: String,
    pub status: String,
}

impl Record for Issue {
    const COLLECTION: &'static str = "issue";
    const TITLE: &'static str = "Issue";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn from_payload(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut reader = PayloadReader::new(payload);
        let issue = Self {
            student_id: reader.string("student_id"),
            title: reader.string("title"),
            description: reader.string("description"),
            status: reader.string_or("status", DEFAULT_STATUS),
        };
        reader.finish(issue)
    }

    fn student_ref(&self) -> Option<&str> {
        Some(&self.student_id)
    }
}
