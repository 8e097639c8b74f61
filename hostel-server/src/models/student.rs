//! Student record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{FieldKind, FieldSpec, Record};
use super::{PayloadReader, ValidationError};

/// Lowest accepted year of study
pub const MIN_YEAR: i64 = 1;

/// Highest accepted year of study
pub const MAX_YEAR: i64 = 6;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", FieldKind::String, "Full name of the student"),
    FieldSpec::new("email", FieldKind::String, "Email address"),
    FieldSpec::new("roll", FieldKind::String, "Roll number / student ID"),
    FieldSpec::new("room", FieldKind::String, "Room number"),
    FieldSpec::new("course", FieldKind::String, "Course / program"),
    FieldSpec::new(
        "year",
        FieldKind::Integer {
            min: MIN_YEAR,
            max: MAX_YEAR,
        },
        "Year of study",
    ),
];

/// A hostel resident. Email and roll are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub email: String,
    pub roll: String,
    pub room: String,
    pub course: String,
    pub year: i64,
}

impl Record for Student {
    const COLLECTION: &'static str = "student";
    const TITLE: &'static str = "Student";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn from_payload(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut reader = PayloadReader::new(payload);
        let student = Self {
            name: reader.string("name"),
            email: reader.string("email"),
            roll: reader.string("roll"),
            room: reader.string("room"),
            course: reader.string("course"),
            year: reader.int_in("year", MIN_YEAR, MAX_YEAR),
        };
        reader.finish(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldReason;
    use serde_json::json;

    fn payload(year: Value) -> Map<String, Value> {
        let value = json!({
            "name": "Asha Rao",
            "email": "asha@example.edu",
            "roll": "CS-042",
            "room": "B-12",
            "course": "B.Tech CSE",
            "year": year,
        });
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn accepts_every_year_in_range() {
        for year in MIN_YEAR..=MAX_YEAR {
            let student = Student::from_payload(&payload(json!(year))).unwrap();
            assert_eq!(student.year, year);
        }
    }

    #[test]
    fn rejects_years_out_of_range() {
        for year in [0, 7, 100] {
            let err = Student::from_payload(&payload(json!(year))).unwrap_err();
            assert_eq!(err.fields()[0].field, "year");
        }
    }

    #[test]
    fn rejects_string_year() {
        let err = Student::from_payload(&payload(json!("two"))).unwrap_err();
        assert_eq!(
            err.fields()[0].reason,
            FieldReason::WrongType { expected: "integer" }
        );
    }

    #[test]
    fn reports_missing_fields() {
        let mut map = payload(json!(2));
        map.remove("email");
        map.remove("room");
        let err = Student::from_payload(&map).unwrap_err();
        let fields: Vec<&str> = err.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "room"]);
    }

    #[test]
    fn has_no_student_reference() {
        let student = Student::from_payload(&payload(json!(1))).unwrap();
        assert!(student.student_ref().is_none());
    }
}
