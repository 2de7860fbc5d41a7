//! Uniform response envelope.
//!
//! Every response body, success or failure, has the shape
//! `{"status": <int>, "message": "success" | "error", "data": {"data": <payload>}}`.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Serialize, Serializer};

/// Outcome label carried in the envelope's `message` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The request was handled; `data` holds the result.
    Success,
    /// The request failed; `data` holds the error message.
    Error,
}

#[derive(Debug, Serialize)]
struct Payload<T> {
    data: T,
}

/// Response body wrapper shared by every handler.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use event_ticket_api::inbound::http::envelope::Envelope;
///
/// let body = serde_json::to_value(Envelope::success(StatusCode::OK, "hi")).unwrap();
/// assert_eq!(body["message"], "success");
/// assert_eq!(body["data"]["data"], "hi");
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    #[serde(serialize_with = "status_as_u16")]
    status: StatusCode,
    message: Outcome,
    data: Payload<T>,
}

fn status_as_u16<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a successful payload.
    pub fn success(status: StatusCode, data: T) -> Self {
        Self::new(status, Outcome::Success, data)
    }

    /// Wrap a failure payload, usually the error message.
    pub fn error(status: StatusCode, data: T) -> Self {
        Self::new(status, Outcome::Error, data)
    }

    fn new(status: StatusCode, message: Outcome, data: T) -> Self {
        Self {
            status,
            message,
            data: Payload { data },
        }
    }

    /// Status code carried by the envelope.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Render as a JSON response whose HTTP status matches the envelope.
    pub fn respond(self) -> HttpResponse {
        HttpResponse::build(self.status).json(self)
    }
}
