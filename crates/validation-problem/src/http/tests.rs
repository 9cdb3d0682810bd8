//! Tests for the Actix problem-response adapter.

use actix_web::body::to_bytes;
use actix_web::http::header;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;

async fn response_parts(document: &ProblemDocument) -> (StatusCode, String, Value) {
    let response = ResponseError::error_response(document);
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content type is set")
        .to_str()
        .expect("content type is valid UTF-8")
        .to_owned();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("body is valid JSON");
    (status, content_type, body)
}

#[rstest]
fn status_code_is_bad_request() {
    let document = handle_binding_failures(Vec::new());
    assert_eq!(ResponseError::status_code(&document), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_rt::test]
async fn response_carries_the_problem_media_type_and_document() {
    let document = handle_binding_failures(vec![FieldFailure::new(
        "email",
        "must be a well-formed email",
    )]);

    let (status, content_type, body) = response_parts(&document).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, PROBLEM_JSON);
    assert_eq!(
        body,
        json!({
            "status": 400,
            "title": "Bean validation error",
            "detail": "One or more fields were invalid. See 'errors' for details.",
            "errors": {"email": "must be a well-formed email"},
        })
    );
}

#[rstest]
#[actix_rt::test]
async fn empty_failure_collections_produce_a_complete_response() {
    let document = handle_constraint_violations(Vec::new());

    let (status, content_type, body) = response_parts(&document).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, PROBLEM_JSON);
    assert_eq!(
        body,
        json!({
            "status": 400,
            "title": "Bean validation error",
            "detail": "One or more fields were invalid. See 'errors' for details.",
            "errors": {},
        })
    );
}

#[rstest]
fn both_entry_points_converge_on_the_same_document() {
    let from_binding = handle_binding_failures(vec![FieldFailure::new(
        "email",
        "must be a well-formed email",
    )]);
    let from_constraints = handle_constraint_violations(vec![ConstraintFailure::new(
        "createUser.arg0.email",
        "must be a well-formed email",
    )]);

    assert_eq!(from_binding, from_constraints);
}
