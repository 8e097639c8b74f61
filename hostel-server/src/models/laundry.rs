//! Laundry request record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{FieldKind, FieldSpec, Record};
use super::{PayloadReader, ValidationError};

/// Status given to requests that don't specify one
pub const DEFAULT_STATUS: &str = "pending";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "student_id",
        FieldKind::String,
        "Reference to Student document _id (string)",
    ),
    FieldSpec::new("items", FieldKind::StringList, "List of items to be laundered"),
    FieldSpec::new(
        "preferred_date",
        FieldKind::Date,
        "Preferred date for laundry pickup",
    ),
    FieldSpec::new(
        "status",
        FieldKind::StringDefault(DEFAULT_STATUS),
        "Status of the request: pending, in_progress, done",
    ),
];

/// A laundry pickup request. `status` is free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaundryRequest {
    pub student_id: String,
    pub items: Vec<String>,
    pub preferred_date: NaiveDate,
    pub status: String,
}

impl Record for LaundryRequest {
    const COLLECTION: &'static str = "laundryrequest";
    const TITLE: &'static str = "Laundryrequest";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn from_payload(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut reader = PayloadReader::new(payload);
        let request = Self {
            student_id: reader.string("student_id"),
            items: reader.string_list("items"),
            preferred_date: reader.date("preferred_date"),
            status: reader.string_or("status", DEFAULT_STATUS),
        };
        reader.finish(request)
    }

    fn student_ref(&self) -> Option<&str> {
        Some(&self.student_id)
    }
}
