//! Daily menu record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{FieldKind, FieldSpec, Record};
use super::{PayloadReader, ValidationError};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("day", FieldKind::Date, "Menu date"),
    FieldSpec::new("breakfast", FieldKind::String, "Breakfast items"),
    FieldSpec::new("lunch", FieldKind::String, "Lunch items"),
    FieldSpec::new("dinner", FieldKind::String, "Dinner items"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub day: NaiveDate,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

impl Record for Menu {
    const COLLECTION: &'static str = "menu";
    const TITLE: &'static str = "Menu";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn from_payload(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut reader = PayloadReader::new(payload);
        let menu = Self {
            day: reader.date("day"),
            breakfast: reader.string("breakfast"),
            lunch: reader.string("lunch"),
            dinner: reader.string("dinner"),
        };
        reader.finish(menu)
    }
}
