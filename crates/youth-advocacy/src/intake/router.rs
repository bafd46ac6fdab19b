use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{error, warn};

use super::backend::{ApplicationStore, IdentityService};
use super::domain::ApplicationDraft;
use super::service::{
    ApplicationIntakeService, SubmissionError, SUBMISSION_FAILED_MESSAGE,
    SUBMISSION_RECEIVED_MESSAGE,
};

/// JSON endpoint accepting a complete draft in one request.
pub fn application_router<I, S>(service: Arc<ApplicationIntakeService<I, S>>) -> Router
where
    I: IdentityService + 'static,
    S: ApplicationStore + 'static,
{
    Router::new()
        .route("/api/v1/applications", post(submit_handler::<I, S>))
        .with_state(service)
}

pub(crate) async fn submit_handler<I, S>(
    State(service): State<Arc<ApplicationIntakeService<I, S>>>,
    payload: Result<Json<ApplicationDraft>, JsonRejection>,
) -> Response
where
    I: IdentityService + 'static,
    S: ApplicationStore + 'static,
{
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable application payload");
            return failure(StatusCode::UNPROCESSABLE_ENTITY, SUBMISSION_FAILED_MESSAGE);
        }
    };

    match service.submit(&draft).await {
        Ok(_) => {
            let payload = json!({
                "status": "received",
                "message": SUBMISSION_RECEIVED_MESSAGE,
            });
            (StatusCode::ACCEPTED, Json(payload)).into_response()
        }
        Err(err) => {
            error!(stage = err.stage(), error = %err, "error submitting application");
            let status = match &err {
                SubmissionError::InvalidDraft(_) => StatusCode::UNPROCESSABLE_ENTITY,
                SubmissionError::Auth(_)
                | SubmissionError::MissingIdentity
                | SubmissionError::Insert(_) => StatusCode::BAD_GATEWAY,
            };
            failure(status, err.user_message())
        }
    }
}

fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
