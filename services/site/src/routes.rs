use crate::infra::{copyright_year, AppState};
use crate::pages;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Extension, Form, Json, Router};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;
use youth_advocacy::intake::{
    application_router, ApplicationForm, ApplicationIntakeService, ApplicationStore, DraftField,
    IdentityService, SubmissionError, SubmitOutcome,
};

/// Landing page, HTML form handler, JSON intake API and the operational endpoints.
pub(crate) fn site_router<I, S>(service: Arc<ApplicationIntakeService<I, S>>) -> Router
where
    I: IdentityService + 'static,
    S: ApplicationStore + 'static,
{
    let pages = Router::new()
        .route("/", get(landing_endpoint))
        .route("/apply", post(apply_endpoint::<I, S>))
        .with_state(service.clone());

    application_router(service)
        .merge(pages)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn landing_endpoint() -> Html<String> {
    Html(pages::landing_page(&ApplicationForm::new(), None, copyright_year()).into_string())
}

/// Applies every posted input to a fresh form, submits it and re-renders the page with the
/// outcome: an acknowledgement on success, the error panel and the typed values otherwise.
pub(crate) async fn apply_endpoint<I, S>(
    State(service): State<Arc<ApplicationIntakeService<I, S>>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> (StatusCode, Html<String>)
where
    I: IdentityService + 'static,
    S: ApplicationStore + 'static,
{
    let mut form = ApplicationForm::new();
    for (name, value) in fields {
        match name.parse::<DraftField>() {
            Ok(field) => form.update_field(field, value),
            Err(err) => debug!(%err, "skipping unrecognised form input"),
        }
    }

    let status = match form.submit(service.as_ref()).await {
        SubmitOutcome::Received(_) => StatusCode::OK,
        SubmitOutcome::Failed(SubmissionError::InvalidDraft(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
        // Unreachable while every request builds its own form.
        SubmitOutcome::AlreadySubmitting => StatusCode::CONFLICT,
    };

    let acknowledgement = form.take_acknowledgement();
    let page = pages::landing_page(&form, acknowledgement, copyright_year());
    (status, Html(page.into_string()))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
