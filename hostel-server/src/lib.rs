//! hostel-server: HTTP backend for hostel management
//!
//! Create and list endpoints over five record kinds (students, laundry
//! requests, attendance records, daily menus, maintenance issues), each
//! stored in its own document collection.

pub mod db;
pub mod http;
pub mod models;
pub mod reference;

pub use db::{Gateway, StoreError, StoreSettings};
pub use http::{build_router, run_server, AppState, ServerConfig};
