//! Route handlers organized by resource

pub mod attendance;
pub mod diagnostics;
pub mod issues;
pub mod laundry;
pub mod menu;
pub mod records;
pub mod root;
pub mod students;
