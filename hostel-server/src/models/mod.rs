//! Record schemas with validation at construction
//!
//! Incoming payloads are validated into typed records before they reach
//! the gateway. Invalid input returns ValidationError, not panic.

pub mod attendance;
pub mod filter;
pub mod issue;
pub mod laundry;
pub mod menu;
pub mod payload;
pub mod record;
pub mod schema;
pub mod student;
pub mod validation;

pub use attendance::AttendanceRecord;
pub use filter::{AttendanceFilter, IssueFilter, LaundryFilter};
pub use issue::Issue;
pub use laundry::LaundryRequest;
pub use menu::Menu;
pub use payload::PayloadReader;
pub use record::{FieldKind, FieldSpec, Record};
pub use student::Student;
pub use validation::{FieldError, FieldReason, ValidationError};
