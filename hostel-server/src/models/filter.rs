//! Query-string filters for listing endpoints
//!
//! Each present, non-empty parameter becomes one equality condition.

use mongodb::bson::Document;
use serde::Deserialize;

fn equality(conditions: &[(&str, &Option<String>)]) -> Document {
    let mut filter = Document::new();
    for (field, value) in conditions {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            filter.insert(*field, value);
        }
    }
    filter
}

/// `GET /laundry?student_id=`
#[derive(Debug, Default, Deserialize)]
pub struct LaundryFilter {
    pub student_id: Option<String>,
}

impl LaundryFilter {
    pub fn to_document(&self) -> Document {
        equality(&[("student_id", &self.student_id)])
    }
}

/// `GET /attendance?student_id=`
#[derive(Debug, Default, Deserialize)]
pub struct AttendanceFilter {
    pub student_id: Option<String>,
}

impl AttendanceFilter {
    pub fn to_document(&self) -> Document {
        equality(&[("student_id", &self.student_id)])
    }
}

/// `GET /issues?student_id=&status=`
#[derive(Debug, Default, Deserialize)]
pub struct IssueFilter {
    pub student_id: Option<String>,
    pub status: Option<String>,
}

impl IssueFilter {
    pub fn to_document(&self) -> Document {
        equality(&[("student_id", &self.student_id), ("status", &self.status)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn empty_filter_matches_everything() {
        assert!(LaundryFilter::default().to_document().is_empty());
        assert!(IssueFilter::default().to_document().is_empty());
    }

    #[test]
    fn blank_values_are_ignored() {
        let filter = AttendanceFilter {
            student_id: Some(String::new()),
        };
        assert!(filter.to_document().is_empty());
    }

    #[test]
    fn issue_filter_combines_fields() {
        let filter = IssueFilter {
            student_id: Some("s1".into()),
            status: Some("open".into()),
        };
        assert_eq!(
            filter.to_document(),
            doc! { "student_id": "s1", "status": "open" }
        );
    }

    #[test]
    fn issue_filter_status_only() {
        let filter = IssueFilter {
            student_id: None,
            status: Some("resolved".into()),
        };
        assert_eq!(filter.to_document(), doc! { "status": "resolved" });
    }
}
