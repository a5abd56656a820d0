//! Tests for HTTP error mapping.

use super::*;
use crate::domain::{EntityKind, Violation};
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn body_of(error: &Error) -> (StatusCode, Option<String>, Value) {
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
    let body = serde_json::from_slice(&bytes).expect("problem JSON");
    (status, trace_id, body)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found(EntityKind::User, 1), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn not_found_body_has_title_and_detail_only() {
    let (status, _, body) = body_of(&Error::not_found(EntityKind::Schedule, 99)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "title": "Resource Not Found",
            "detail": "ScheduleEntity (id = 99) is not found."
        })
    );
}

#[rstest]
#[actix_web::test]
async fn validation_body_lists_invalid_params_in_order() {
    let error = Error::validation(vec![
        Violation::new("username", "must not be blank"),
        Violation::new("username", "size must be between 1 and 256"),
    ]);
    let (_, _, body) = body_of(&error).await;
    assert_eq!(
        body,
        json!({
            "title": "Bad Request",
            "detail": BAD_REQUEST_DETAIL,
            "invalidParams": [
                {"name": "username", "reason": "must not be blank"},
                {"name": "username", "reason": "size must be between 1 and 256"}
            ]
        })
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_request_body_omits_invalid_params() {
    let (_, _, body) = body_of(&Error::invalid_request("expected integer")).await;
    assert_eq!(
        body,
        json!({"title": "Bad Request", "detail": BAD_REQUEST_DETAIL})
    );
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_and_keep_trace_header() {
    let error = Error::internal("connection string leaked").with_trace_id(TRACE_ID);
    let (status, trace_id, body) = body_of(&error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(trace_id.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({"title": "Internal Server Error", "detail": "Internal server error"})
    );
}

#[rstest]
#[actix_web::test]
async fn unavailable_store_detail_is_not_echoed() {
    let error = Error::service_unavailable(
        "user repository unavailable: password authentication failed for user \"app\"",
    );
    let (status, _, body) = body_of(&error).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({"title": "Service Unavailable", "detail": "Service temporarily unavailable"})
    );
}

#[rstest]
#[actix_web::test]
async fn errors_without_trace_id_omit_header() {
    let (_, trace_id, _) = body_of(&Error::service_unavailable("pool exhausted")).await;
    assert!(trace_id.is_none());
}
