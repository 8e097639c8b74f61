//! Attendance record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{FieldKind, FieldSpec, Record};
use super::{PayloadReader, ValidationError};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "student_id",
        FieldKind::String,
        "Reference to Student document _id (string)",
    ),
    FieldSpec::new("day", FieldKind::Date, "Attendance date"),
    FieldSpec::new(
        "present",
        FieldKind::BoolDefault(true),
        "Whether the student is present",
    ),
];

/// One attendance mark. Several marks for the same student and day may
/// coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub student_id: String,
    pub day: NaiveDate,
    pub present: bool,
}

impl Record for AttendanceRecord {
    const COLLECTION: &'static str = "attendancerecord";
    const TITLE: &'static str = "Attendancerecord";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn from_payload(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut reader = PayloadReader::new(payload);
        let record = Self {
            student_id: reader.string("student_id"),
            day: reader.date("day"),
            present: reader.bool_or("present", true),
        };
        reader.finish(record)
    }

    fn student_ref(&self) -> Option<&str> {
        Some(&self.student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn present_defaults_to_true() {
        let value = json!({ "student_id": "s1", "day": "2024-01-15" });
        let record = AttendanceRecord::from_payload(value.as_object().unwrap()).unwrap();
        assert!(record.present);
    }

    #[test]
    fn rejects_impossible_date() {
        let value = json!({ "student_id": "s1", "day": "2023-02-30" });
        let err = AttendanceRecord::from_payload(value.as_object().unwrap()).unwrap_err();
        assert_eq!(err.fields()[0].field, "day");
    }
}
