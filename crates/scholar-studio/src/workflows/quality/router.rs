use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::super::authoring::DocumentType;
use super::QualityEngine;

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub text: String,
    pub document_type: String,
}

/// Router exposing the rubric as a stateless endpoint.
pub fn quality_router(engine: Arc<QualityEngine>) -> Router {
    Router::new()
        .route("/api/v1/quality/assess", post(assess_handler))
        .with_state(engine)
}

pub(crate) async fn assess_handler(
    State(engine): State<Arc<QualityEngine>>,
    Json(request): Json<AssessRequest>,
) -> Response {
    match request.document_type.parse::<DocumentType>() {
        Ok(document_type) => {
            let report = engine.assess(&request.text, document_type);
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
