//! Persistence gateway - document store access
//!
//! # Design Principles
//!
//! - One store handle opened at startup and shared by every request
//! - A failed startup leaves the gateway disconnected instead of aborting
//! - Handlers never see the storage technology, only `Gateway`
//! - No retries, batching or caching; every list is a fresh query

pub mod gateway;
pub mod memory;
pub mod mongo;
pub mod store;

pub use gateway::{render_document, Gateway, StoreSettings};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DocumentStore, StoreError};
