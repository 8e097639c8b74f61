//! Field-by-field reader over a JSON object payload
//!
//! Each accessor records a [`FieldError`] and hands back a placeholder when
//! the field is rejected, so a record can be assembled in one pass.
//! [`PayloadReader::finish`] then reports every offending field at once and
//! the placeholder record is discarded.

use chrono::NaiveDate;
use serde_json::{Map, Number, Value};

use super::validation::{FieldError, FieldReason, ValidationError};

/// Date format accepted for `day` / `preferred_date` fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const PLACEHOLDER_DATE: NaiveDate = NaiveDate::MIN;

pub struct PayloadReader<'a> {
    payload: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> PayloadReader<'a> {
    pub fn new(payload: &'a Map<String, Value>) -> Self {
        Self {
            payload,
            errors: Vec::new(),
        }
    }

    fn reject(&mut self, field: impl Into<String>, reason: FieldReason) {
        self.errors.push(FieldError::new(field, reason));
    }

    fn required(&mut self, field: &'static str) -> Option<&'a Value> {
        let value = self.payload.get(field);
        if value.is_none() {
            self.reject(field, FieldReason::Missing);
        }
        value
    }

    /// Required string field.
    pub fn string(&mut self, field: &'static str) -> String {
        match self.required(field) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.reject(field, FieldReason::WrongType { expected: "string" });
                String::new()
            }
            None => String::new(),
        }
    }

    /// Optional string field falling back to `default` when absent.
    pub fn string_or(&mut self, field: &'static str, default: &str) -> String {
        match self.payload.get(field) {
            None => default.to_owned(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.reject(field, FieldReason::WrongType { expected: "string" });
                String::new()
            }
        }
    }

    /// Optional boolean field falling back to `default` when absent.
    pub fn bool_or(&mut self, field: &'static str, default: bool) -> bool {
        match self.payload.get(field) {
            None => default,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.reject(field, FieldReason::WrongType { expected: "boolean" });
                default
            }
        }
    }

    /// Required integer field within `min..=max`. Integral floats such as
    /// `2.0` count as integers; numbers too large for `i64` are out of range.
    pub fn int_in(&mut self, field: &'static str, min: i64, max: i64) -> i64 {
        let Some(value) = self.required(field) else {
            return min;
        };

        let Value::Number(number) = value else {
            self.reject(field, FieldReason::WrongType { expected: "integer" });
            return min;
        };

        match integral(number) {
            Some(n) if (min..=max).contains(&n) => n,
            None if number.as_f64().is_some_and(|f| f.fract() != 0.0) => {
                self.reject(field, FieldReason::WrongType { expected: "integer" });
                min
            }
            _ => {
                self.reject(field, FieldReason::OutOfRange { min, max });
                min
            }
        }
    }

    /// Required `YYYY-MM-DD` date field. The string must already be in
    /// canonical form (zero-padded, no surrounding whitespace).
    pub fn date(&mut self, field: &'static str) -> NaiveDate {
        match self.required(field) {
            Some(Value::String(s)) => match NaiveDate::parse_from_str(s, DATE_FORMAT) {
                Ok(date) if date.format(DATE_FORMAT).to_string() == *s => date,
                _ => {
                    self.reject(field, FieldReason::InvalidDate);
                    PLACEHOLDER_DATE
                }
            },
            Some(_) => {
                self.reject(field, FieldReason::InvalidDate);
                PLACEHOLDER_DATE
            }
            None => PLACEHOLDER_DATE,
        }
    }

    /// Required array of strings. Offending elements are reported as
    /// `field[index]`.
    pub fn string_list(&mut self, field: &'static str) -> Vec<String> {
        let items = match self.required(field) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                self.reject(field, FieldReason::WrongType { expected: "array" });
                return Vec::new();
            }
            None => return Vec::new(),
        };

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.clone()),
                _ => self.reject(
                    format!("{}[{}]", field, index),
                    FieldReason::WrongType { expected: "string" },
                ),
            }
        }
        out
    }

    /// Report every rejected field, or hand back the assembled record.
    pub fn finish<T>(self, record: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(record)
        } else {
            Err(ValidationError::Fields(self.errors))
        }
    }
}

/// `number` as an `i64`, if it is a whole number that fits.
fn integral(number: &Number) -> Option<i64> {
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    #[test]
    fn collects_every_error() {
        let payload = object(json!({ "name": 7, "when": "yesterday" }));
        let mut reader = PayloadReader::new(&payload);
        reader.string("name");
        reader.date("when");
        reader.string("missing");

        let err = reader.finish(()).unwrap_err();
        let fields: Vec<&str> = err.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "when", "missing"]);
    }

    #[test]
    fn defaults_apply_only_when_absent() {
        let payload = object(json!({ "present": false }));
        let mut reader = PayloadReader::new(&payload);
        assert_eq!(reader.string_or("status", "open"), "open");
        assert!(!reader.bool_or("present", true));
        assert!(reader.finish(()).is_ok());
    }

    #[test]
    fn null_default_field_is_wrong_type() {
        let payload = object(json!({ "status": null }));
        let mut reader = PayloadReader::new(&payload);
        reader.string_or("status", "open");
        let err = reader.finish(()).unwrap_err();
        assert_eq!(
            err.fields()[0].reason,
            FieldReason::WrongType { expected: "string" }
        );
    }

    #[test]
    fn int_bounds_are_inclusive() {
        for year in 1..=6 {
            let payload = object(json!({ "year": year }));
            let mut reader = PayloadReader::new(&payload);
            assert_eq!(reader.int_in("year", 1, 6), year);
            assert!(reader.finish(()).is_ok());
        }

        for year in [0, 7, -1] {
            let payload = object(json!({ "year": year }));
            let mut reader = PayloadReader::new(&payload);
            reader.int_in("year", 1, 6);
            let err = reader.finish(()).unwrap_err();
            assert_eq!(
                err.fields()[0].reason,
                FieldReason::OutOfRange { min: 1, max: 6 }
            );
        }
    }

    #[test]
    fn integral_floats_count_as_integers() {
        let payload = object(json!({ "year": 2.0 }));
        let mut reader = PayloadReader::new(&payload);
        assert_eq!(reader.int_in("year", 1, 6), 2);
        assert!(reader.finish(()).is_ok());

        let payload = object(json!({ "year": 2.5 }));
        let mut reader = PayloadReader::new(&payload);
        reader.int_in("year", 1, 6);
        let err = reader.finish(()).unwrap_err();
        assert_eq!(
            err.fields()[0].reason,
            FieldReason::WrongType { expected: "integer" }
        );
    }

    #[test]
    fn huge_integers_are_out_of_range() {
        for year in [json!(u64::MAX), json!(1e30), json!(7.0)] {
            let payload = object(json!({ "year": year }));
            let mut reader = PayloadReader::new(&payload);
            reader.int_in("year", 1, 6);
            let err = reader.finish(()).unwrap_err();
            assert_eq!(
                err.fields()[0].reason,
                FieldReason::OutOfRange { min: 1, max: 6 }
            );
        }
    }

    #[test]
    fn non_numbers_are_wrong_type() {
        let payload = object(json!({ "year": "2" }));
        let mut reader = PayloadReader::new(&payload);
        reader.int_in("year", 1, 6);
        let err = reader.finish(()).unwrap_err();
        assert_eq!(
            err.fields()[0].reason,
            FieldReason::WrongType { expected: "integer" }
        );
    }

    #[test]
    fn list_elements_reported_by_index() {
        let payload = object(json!({ "items": ["shirt", 3, "socks"] }));
        let mut reader = PayloadReader::new(&payload);
        reader.string_list("items");
        let err = reader.finish(()).unwrap_err();
        assert_eq!(err.fields()[0].field, "items[1]");
    }

    #[test]
    fn parses_iso_dates() {
        let payload = object(json!({ "day": "2024-02-29" }));
        let mut reader = PayloadReader::new(&payload);
        let day = reader.date("day");
        assert!(reader.finish(()).is_ok());
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn non_canonical_dates_are_rejected() {
        for day in ["2024-1-5", " 2024-01-05", "2024-01-05 ", "2023-02-29"] {
            let payload = object(json!({ "day": day }));
            let mut reader = PayloadReader::new(&payload);
            reader.date("day");
            let err = reader.finish(()).unwrap_err();
            assert_eq!(err.fields()[0].reason, FieldReason::InvalidDate, "{:?}", day);
        }
    }
}
