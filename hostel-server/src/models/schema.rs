//! JSON-Schema style descriptions of every record, served at `/schema`

use serde_json::{json, Map, Value};

use super::record::{FieldKind, FieldSpec, Record};
use super::{AttendanceRecord, Issue, LaundryRequest, Menu, Student};

/// `student_id` -> `Student Id`
fn field_title(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn describe_field(spec: &FieldSpec) -> Value {
    let mut field = match spec.kind {
        FieldKind::String => json!({ "type": "string" }),
        FieldKind::Integer { min, max } => json!({
            "type": "integer",
            "minimum": min,
            "maximum": max,
        }),
        FieldKind::Date => json!({ "type": "string", "format": "date" }),
        FieldKind::StringList => json!({
            "type": "array",
            "items": { "type": "string" },
        }),
        FieldKind::StringDefault(default) => json!({ "type": "string", "default": default }),
        FieldKind::BoolDefault(default) => json!({ "type": "boolean", "default": default }),
    };

    if let Value::Object(map) = &mut field {
        map.insert("title".into(), Value::String(field_title(spec.name)));
        map.insert("description".into(), Value::String(spec.description.into()));
    }
    field
}

/// Describe one record kind.
pub fn describe<R: Record>() -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for spec in R::fields() {
        properties.insert(spec.name.to_owned(), describe_field(spec));
        if spec.kind.is_required() {
            required.push(Value::String(spec.name.to_owned()));
        }
    }

    json!({
        "title": R::TITLE,
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Every record kind keyed by its collection name.
pub fn all() -> Value {
    let mut schemas = Map::new();
    schemas.insert(Student::COLLECTION.into(), describe::<Student>());
    schemas.insert(LaundryRequest::COLLECTION.into(), describe::<LaundryRequest>());
    schemas.insert(
        AttendanceRecord::COLLECTION.into(),
        describe::<AttendanceRecord>(),
    );
    schemas.insert(Menu::COLLECTION.into(), describe::<Menu>());
    schemas.insert(Issue::COLLECTION.into(), describe::<Issue>());
    Value::Object(schemas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_fields() {
        assert_eq!(field_title("student_id"), "Student Id");
        assert_eq!(field_title("preferred_date"), "Preferred Date");
        assert_eq!(field_title("year"), "Year");
    }

    #[test]
    fn lists_every_entity() {
        let schemas = all();
        for key in ["student", "laundryrequest", "attendancerecord", "menu", "issue"] {
            assert!(schemas.get(key).is_some(), "missing schema for {}", key);
        }
    }

    #[test]
    fn defaulted_fields_are_not_required() {
        let schema = describe::<LaundryRequest>();
        let required = schema["required"].as_array().unwrap();
        assert!(!required.contains(&json!("status")));
        assert!(required.contains(&json!("items")));
        assert_eq!(schema["properties"]["status"]["default"], "pending");
    }

    #[test]
    fn year_carries_bounds() {
        let schema = describe::<Student>();
        assert_eq!(schema["properties"]["year"]["minimum"], 1);
        assert_eq!(schema["properties"]["year"]["maximum"], 6);
    }
}
