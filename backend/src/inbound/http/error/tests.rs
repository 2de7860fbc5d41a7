//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::domain::TraceId;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> TraceId {
    TRACE_ID.parse().expect("valid UUID")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn render(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("envelope JSON");
    (status, trace_id, body)
}

#[rstest]
#[actix_web::test]
async fn error_response_is_enveloped_with_trace_header(expected_trace_id: TraceId) {
    let error = TraceId::scope(expected_trace_id, async {
        Error::not_found("User with specified ID not found!")
    })
    .await;

    let (status, trace_id, body) = render(&error).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(trace_id.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({
            "status": 404,
            "message": "error",
            "data": {"data": "User with specified ID not found!"}
        })
    );
}

#[rstest]
fn error_without_trace_id_omits_trace_header() {
    let response = ResponseError::error_response(&Error::invalid_request("bad"));
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}

#[rstest]
#[actix_web::test]
async fn internal_messages_are_passed_through() {
    let (_, _, body) = render(&Error::internal("find_by_id timed out after 10000ms")).await;
    assert_eq!(body["status"], 500);
    assert_eq!(body["data"]["data"], "find_by_id timed out after 10000ms");
}

#[test]
fn json_errors_become_bad_requests() {
    let req = TestRequest::default().to_http_request();
    let err = json_error_handler(JsonPayloadError::ContentType, &req);

    assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST);
}
