//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::invalid_input("query is required")
}

#[rstest]
#[case(Error::invalid_input("bad"), ErrorCode::InvalidInput)]
#[case(Error::unauthenticated("login required"), ErrorCode::Unauthenticated)]
#[case(Error::search_unavailable("down"), ErrorCode::SearchUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidInput, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values(base_error: Error) {
    let result = base_error.try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_snake_case_code_and_camel_case_fields(base_error: Error) {
    let error = base_error
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "field": "query" }));
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "invalid_input",
            "message": "query is required",
            "traceId": TRACE_ID,
            "details": { "field": "query" },
        })
    );
}

#[rstest]
fn omits_absent_optional_fields() {
    let value = serde_json::to_value(Error::unauthenticated("login required"))
        .expect("serialise error");
    assert!(value.get("traceId").is_none());
    assert!(value.get("details").is_none());
    assert_eq!(value["code"], "unauthenticated");
}
