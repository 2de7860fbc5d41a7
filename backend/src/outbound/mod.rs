//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: MongoDB-backed record repositories.
//! - **memory**: process-local record repository for tests and for running
//!   without a database.
//!
//! Adapters only translate between domain types and store representations.

pub mod memory;
pub mod persistence;
