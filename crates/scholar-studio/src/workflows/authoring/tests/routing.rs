use std::sync::Arc;
use std::time::Duration;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::authoring::{authoring_router, AuthoringService};

#[tokio::test]
async fn create_route_returns_created_session() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/sessions",
            json!({ "document_type": "sop" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("session_id").is_some());
    assert_eq!(payload["document_type"], "sop");
    assert_eq!(payload["total_steps"], 6);
    assert_eq!(payload["current_step"]["id"], "basic");
}

#[tokio::test]
async fn create_route_rejects_unknown_document_type() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/sessions",
            json!({ "document_type": "cover_letter" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .map(|message| message.contains("cover_letter"))
        .unwrap_or(false));
}

#[tokio::test]
async fn missing_session_returns_not_found() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(empty_request(Method::GET, "/api/v1/sessions/session-404404"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn registry_failures_map_to_internal_error() {
    let service = AuthoringService::new(Arc::new(UnavailableRepository), Duration::ZERO);
    let router = authoring_router(Arc::new(service));

    let response = router
        .oneshot(empty_request(Method::POST, "/api/v1/sessions/session-1/next"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn field_updates_and_generation_flow_through_routes() {
    let (service, _) = build_service();
    let id = service.create("sop").expect("session created").session_id;
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/sessions/{id}/fields/full_name"),
            json!({ "value": "Katherine Johnson" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let missing = payload["current_step"]["missing_required"]
        .as_array()
        .expect("missing list");
    assert!(!missing.iter().any(|id| id == "full_name"));

    let response = router
        .clone()
        .oneshot(empty_request(
            Method::POST,
            &format!("/api/v1/sessions/{id}/generate"),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload["generated_document"]
        .as_str()
        .map(|text| text.contains("Full Name: Katherine Johnson"))
        .unwrap_or(false));
    assert_eq!(payload["progress"][0]["complete"], true);

    let response = router
        .clone()
        .oneshot(empty_request(Method::DELETE, &format!("/api/v1/sessions/{id}")))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(empty_request(Method::GET, &format!("/api/v1/sessions/{id}")))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn navigation_routes_clamp_at_the_edges() {
    let (service, _) = build_service();
    let id = service.create("cv").expect("session created").session_id;
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(empty_request(Method::POST, &format!("/api/v1/sessions/{id}/prev")))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload["current_step_index"], 0);
    assert_eq!(payload["is_first_step"], true);

    let response = router
        .oneshot(empty_request(Method::POST, &format!("/api/v1/sessions/{id}/next")))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload["current_step_index"], 1);
    assert_eq!(payload["current_step"]["id"], "education");
}
