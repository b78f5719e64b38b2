use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::{RepositoryError, SessionId, SessionRepository};
use super::service::{AuthoringService, AuthoringServiceError, SessionSnapshot};

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub document_type: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFieldRequest {
    #[serde(default)]
    pub value: String,
}

/// Router builder exposing the guided authoring flow over HTTP.
pub fn authoring_router<R>(service: Arc<AuthoringService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/sessions", post(create_handler::<R>))
        .route(
            "/api/v1/sessions/:session_id",
            get(snapshot_handler::<R>).delete(discard_handler::<R>),
        )
        .route(
            "/api/v1/sessions/:session_id/fields/:field_id",
            put(update_field_handler::<R>),
        )
        .route("/api/v1/sessions/:session_id/next", post(next_handler::<R>))
        .route("/api/v1/sessions/:session_id/prev", post(prev_handler::<R>))
        .route(
            "/api/v1/sessions/:session_id/generate",
            post(generate_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<AuthoringService<R>>>,
    Json(request): Json<CreateSessionRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.create(&request.document_type) {
        Ok(snapshot) => (StatusCode::CREATED, Json(snapshot)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn snapshot_handler<R>(
    State(service): State<Arc<AuthoringService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(service.snapshot(&SessionId(session_id)).await)
}

pub(crate) async fn discard_handler<R>(
    State(service): State<Arc<AuthoringService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.discard(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_field_handler<R>(
    State(service): State<Arc<AuthoringService<R>>>,
    Path((session_id, field_id)): Path<(String, String)>,
    Json(request): Json<UpdateFieldRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(
        service
            .update_field(&SessionId(session_id), &field_id, request.value)
            .await,
    )
}

pub(crate) async fn next_handler<R>(
    State(service): State<Arc<AuthoringService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(service.next_step(&SessionId(session_id)).await)
}

pub(crate) async fn prev_handler<R>(
    State(service): State<Arc<AuthoringService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(service.prev_step(&SessionId(session_id)).await)
}

pub(crate) async fn generate_handler<R>(
    State(service): State<Arc<AuthoringService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    respond(service.generate(&SessionId(session_id)).await)
}

fn respond(result: Result<SessionSnapshot, AuthoringServiceError>) -> Response {
    match result {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AuthoringServiceError) -> Response {
    let status = match &err {
        AuthoringServiceError::DocumentType(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AuthoringServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AuthoringServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AuthoringServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
