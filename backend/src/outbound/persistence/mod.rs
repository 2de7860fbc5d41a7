//! MongoDB persistence adapters.
//!
//! - **Thin adapters**: repositories only translate between BSON documents
//!   and domain records. No business logic resides here.
//! - **Internal documents**: the BSON document shape (`documents.rs`) never
//!   leaves this module.
//! - **Shared client**: the driver pools connections internally; one
//!   [`MongoStore`] is built at startup and cloned into each repository.
//! - **Typed errors**: driver errors are mapped to
//!   [`RecordRepositoryError`](crate::domain::ports::RecordRepositoryError).
//!
//! # Example
//!
//! ```ignore
//! use event_ticket_api::domain::User;
//! use event_ticket_api::outbound::persistence::{MongoConfig, MongoStore};
//!
//! let store = MongoStore::connect(&MongoConfig::new("mongodb://localhost:27017", "api_event_ticket")).await?;
//! let users = store.repository_for::<User>();
//! ```

mod client;
mod documents;
mod mongo_record_repository;

pub use client::{MongoConfig, MongoStore, StoreConnectError};
pub use mongo_record_repository::MongoRecordRepository;
