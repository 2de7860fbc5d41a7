//! HTTP inbound adapter exposing the record endpoints.

pub mod envelope;
pub mod error;
pub mod health;
pub mod resources;
pub mod routes;

pub use error::{ApiResult, json_error_handler};
