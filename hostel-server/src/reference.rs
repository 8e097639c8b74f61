//! Soft reference check for records that point at a student
//!
//! Only a lookup that completes and finds nothing blocks creation. A
//! disconnected store, an id that isn't an ObjectId, or a failing lookup
//! all leave the check inconclusive and creation goes ahead.

use mongodb::bson::oid::ObjectId;

use crate::db::{Gateway, StoreError};
use crate::http::error::ApiError;
use crate::models::{Record, Student};

/// Why a check could not decide
#[derive(Debug)]
pub enum Inconclusive {
    Disconnected,
    MalformedId,
    LookupFailed(StoreError),
}

/// Outcome of checking that a student exists
#[derive(Debug)]
pub enum ReferenceCheck {
    Found,
    NotFound,
    Inconclusive(Inconclusive),
}

impl ReferenceCheck {
    /// Reject the dependent record only when the student is known to be
    /// missing.
    pub fn enforce(self) -> Result<(), ApiError> {
        match self {
            Self::Found => Ok(()),
            Self::NotFound => Err(ApiError::ReferenceNotFound {
                resource: Student::TITLE,
            }),
            Self::Inconclusive(reason) => {
                tracing::debug!(?reason, "Student check inconclusive, creating anyway");
                Ok(())
            }
        }
    }
}

/// Look up the student referenced by `student_id`.
pub async fn check_student(gateway: &Gateway, student_id: &str) -> ReferenceCheck {
    if !gateway.is_connected() {
        return ReferenceCheck::Inconclusive(Inconclusive::Disconnected);
    }

    let Ok(id) = ObjectId::parse_str(student_id) else {
        return ReferenceCheck::Inconclusive(Inconclusive::MalformedId);
    };

    match gateway.find_by_id(Student::COLLECTION, id).await {
        Ok(Some(_)) => ReferenceCheck::Found,
        Ok(None) => ReferenceCheck::NotFound,
        Err(e) => ReferenceCheck::Inconclusive(Inconclusive::LookupFailed(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, StoreSettings};
    use mongodb::bson::doc;
    use std::sync::Arc;

    fn memory_gateway() -> Gateway {
        Gateway::with_store(Arc::new(MemoryStore::default()), StoreSettings::default())
    }

    #[tokio::test]
    async fn found_when_student_exists() {
        let gateway = memory_gateway();
        let id = gateway
            .insert(Student::COLLECTION, &doc! { "name": "Meera" })
            .await
            .unwrap();

        let check = check_student(&gateway, &id).await;
        assert!(matches!(check, ReferenceCheck::Found));
        assert!(check.enforce().is_ok());
    }

    #[tokio::test]
    async fn not_found_blocks() {
        let gateway = memory_gateway();
        let check = check_student(&gateway, &ObjectId::new().to_hex()).await;
        assert!(matches!(check, ReferenceCheck::NotFound));
        assert!(matches!(
            check.enforce(),
            Err(ApiError::ReferenceNotFound { resource: "Student" })
        ));
    }

    #[tokio::test]
    async fn malformed_id_is_inconclusive() {
        let gateway = memory_gateway();
        let check = check_student(&gateway, "student-42").await;
        assert!(matches!(
            check,
            ReferenceCheck::Inconclusive(Inconclusive::MalformedId)
        ));
        assert!(check.enforce().is_ok());
    }

    #[tokio::test]
    async fn disconnected_is_inconclusive() {
        let gateway = Gateway::disconnected(StoreSettings::default());
        let check = check_student(&gateway, &ObjectId::new().to_hex()).await;
        assert!(matches!(
            check,
            ReferenceCheck::Inconclusive(Inconclusive::Disconnected)
        ));
        assert!(check.enforce().is_ok());
    }
}
