use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use tower::ServiceExt;

use crate::intake::application_router;
use crate::intake::domain::AccountId;
use crate::intake::router::submit_handler;
use crate::intake::service::{SUBMISSION_FAILED_MESSAGE, SUBMISSION_RECEIVED_MESSAGE};

#[tokio::test]
async fn submit_handler_accepts_valid_drafts() {
    let harness = happy_harness();

    let response = submit_handler(State(harness.service.clone()), Ok(axum::Json(amara_draft()))).await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "received");
    assert_eq!(payload["message"], SUBMISSION_RECEIVED_MESSAGE);
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_invalid_draft() {
    let harness = happy_harness();
    let mut draft = amara_draft();
    draft.email.clear();

    let response = submit_handler(State(harness.service.clone()), Ok(axum::Json(draft))).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], SUBMISSION_FAILED_MESSAGE);
    assert!(harness.calls().is_empty());
}

#[tokio::test]
async fn submit_handler_returns_bad_gateway_for_backend_failures() {
    for case in [
        harness(Err(rejected_signup()), Ok(())),
        harness(Ok(None), Ok(())),
        harness(
            Ok(Some(AccountId("u-1".to_string()))),
            Err(rejected_insert()),
        ),
    ] {
        let response =
            submit_handler(State(case.service.clone()), Ok(axum::Json(amara_draft()))).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let payload = read_json_body(response).await;
        assert_eq!(payload["error"], SUBMISSION_FAILED_MESSAGE);
    }
}

#[tokio::test]
async fn submit_route_accepts_json_payloads() {
    let harness = happy_harness();
    let router = application_router(harness.service.clone());

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&amara_draft()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(harness.store.rows().len(), 1);
}

async fn post_json(
    harness: &Harness,
    body: impl Into<axum::body::Body>,
) -> axum::response::Response {
    application_router(harness.service.clone())
        .oneshot(
            axum::http::Request::post("/api/v1/applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .expect("route executes")
}

#[tokio::test]
async fn submit_route_treats_null_university_as_absent() {
    let harness = happy_harness();
    let body = serde_json::json!({
        "fullName": "Amara Obi",
        "email": "amara@example.com",
        "phone": "+254700000000",
        "highSchool": "Nairobi High",
        "university": null,
        "fieldOfWork": "technology",
    });

    let response = post_json(&harness, serde_json::to_vec(&body).unwrap()).await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let rows = harness.store.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].university, None);
}

#[tokio::test]
async fn submit_route_answers_malformed_json_with_generic_message() {
    let harness = happy_harness();

    let response = post_json(&harness, "{not json").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], SUBMISSION_FAILED_MESSAGE);
    assert!(harness.calls().is_empty());
}

#[tokio::test]
async fn submit_route_answers_mistyped_fields_with_generic_message() {
    let harness = happy_harness();

    let response = post_json(&harness, r#"{"fullName": 42}"#).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload, serde_json::json!({ "error": SUBMISSION_FAILED_MESSAGE }));
    assert!(harness.calls().is_empty());
}

#[tokio::test]
async fn submit_route_rejects_field_of_work_outside_offered_values() {
    let harness = happy_harness();
    let mut draft = amara_draft();
    draft.field_of_work = "TECHNOLOGY".to_string();

    let response = post_json(&harness, serde_json::to_vec(&draft).unwrap()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(harness.store.rows().is_empty());
    assert!(harness.calls().is_empty());
}
