//! Domain primitives, services and ports.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure type.
//! - `RecordFields` / `RecordId` / `StoredRecord`: record primitives and the
//!   entity validator.
//! - `Resource`, `User`, `Ticket`: the two resource families.
//! - `ResourceService`: generic orchestration with the store deadline.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod ports;
pub mod record;
pub mod resource_service;
pub mod ticket;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::record::{
    RecordFields, RecordId, RecordValidationError, RequiredField, Resource, StoredRecord,
};
pub use self::resource_service::{DEFAULT_OPERATION_TIMEOUT, ResourceService};
pub use self::ticket::Ticket;
pub use self::trace_id::TraceId;
pub use self::user::User;

/// Header carrying the request trace identifier on every response.
pub const TRACE_ID_HEADER: &str = "trace-id";
