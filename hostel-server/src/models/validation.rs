//! Validation error types

use std::fmt;

use serde::Serialize;

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldReason {
    /// Required field absent
    Missing,

    /// Present but not the expected JSON type
    WrongType { expected: &'static str },

    /// Integer outside the allowed inclusive range
    OutOfRange { min: i64, max: i64 },

    /// String that is not a `YYYY-MM-DD` calendar date
    InvalidDate,
}

impl fmt::Display for FieldReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "field required"),
            Self::WrongType { expected } => write!(f, "expected {}", expected),
            Self::OutOfRange { min, max } => {
                write!(f, "must be between {} and {}", min, max)
            }
            Self::InvalidDate => write!(f, "expected a date in YYYY-MM-DD format"),
        }
    }
}

/// One offending field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub reason: FieldReason,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: FieldReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

/// Wire form of a field error in 422 responses
#[derive(Debug, Serialize)]
pub struct FieldErrorBody {
    pub field: String,
    pub message: String,
}

impl From<&FieldError> for FieldErrorBody {
    fn from(e: &FieldError) -> Self {
        Self {
            field: e.field.clone(),
            message: e.reason.to_string(),
        }
    }
}

/// Validation error for record payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body parsed as JSON but is not an object
    NotAnObject,

    /// One or more fields failed their constraints
    Fields(Vec<FieldError>),
}

impl ValidationError {
    /// Offending fields, empty for a non-object payload.
    pub fn fields(&self) -> &[FieldError] {
        match self {
            Self::NotAnObject => &[],
            Self::Fields(fields) => fields,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "payload must be a JSON object"),
            Self::Fields(fields) => {
                let listed: Vec<String> = fields
                    .iter()
                    .map(|e| format!("{} ({})", e.field, e.reason))
                    .collect();
                write!(f, "invalid fields: {}", listed.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Fields(vec![
            FieldError::new("year", FieldReason::OutOfRange { min: 1, max: 6 }),
            FieldError::new("name", FieldReason::Missing),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid fields: year (must be between 1 and 6), name (field required)"
        );
    }

    #[test]
    fn not_an_object_has_no_fields() {
        assert!(ValidationError::NotAnObject.fields().is_empty());
    }
}
