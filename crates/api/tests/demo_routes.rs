//! Integration tests for the demo routes and the `RequestParams` extractor.

mod common;

use assert_matches::assert_matches;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use common::{body_json, build_test_app, get, send};
use jsonreply_api::extract::RequestParams;
use jsonreply_core::Guard;
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns the success envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_envelope() {
    let response = get(build_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["friendlyMessage"], "Service healthy");
    assert_eq!(json["body"]["status"], "ok");
    assert!(json["body"]["version"].is_string());
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(build_test_app(), "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(request_id.is_some(), "Response must contain an x-request-id header");
}

// ---------------------------------------------------------------------------
// Test: GET /items/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn known_item_returns_200() {
    let response = get(build_test_app(), "/items/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"body": {"id": "1", "name": "widget"}, "friendlyMessage": "Object Found"})
    );
}

#[tokio::test]
async fn unknown_item_returns_404() {
    let response = get(build_test_app(), "/items/99").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Not Found", "friendlyMessage": "No item with id 99"})
    );
}

// ---------------------------------------------------------------------------
// Test: POST /items
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_item_from_body_returns_201() {
    let response = send(
        build_test_app(),
        Method::POST,
        "/items",
        Some(r#"{"name": "sprocket"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({"body": {"id": "3", "name": "sprocket"}, "friendlyMessage": "Item created"})
    );
}

#[tokio::test]
async fn create_item_from_query_returns_201() {
    let response = send(build_test_app(), Method::POST, "/items?name=gear", None).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["body"]["name"], "gear");
}

#[tokio::test]
async fn create_item_without_name_returns_400() {
    let response = send(build_test_app(), Method::POST, "/items", Some("{}")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "message": "Bad Request",
            "friendlyMessage": 400,
            "errors": ["Missing required parameter: name"]
        })
    );
}

#[tokio::test]
async fn create_item_with_blank_name_returns_422() {
    let response = send(
        build_test_app(),
        Method::POST,
        "/items",
        Some(r#"{"name": "  "}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["message"], "Validation Failed");
}

#[tokio::test]
async fn create_item_with_array_body_returns_400() {
    let response = send(build_test_app(), Method::POST, "/items", Some("[1]")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["errors"],
        json!(["Request body must be a JSON object"])
    );
}

#[tokio::test]
async fn create_item_from_form_body_returns_201() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/items")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=gear"))
        .unwrap();
    let response = build_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({"body": {"id": "3", "name": "gear"}, "friendlyMessage": "Item created"})
    );
}

#[tokio::test]
async fn unrecognized_content_type_leaves_body_absent() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/items")
        .header("content-type", "text/plain")
        .body(Body::from("name=gear"))
        .unwrap();
    let response = build_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["errors"],
        json!(["Missing required parameter: name"])
    );
}

// ---------------------------------------------------------------------------
// Test: remaining demo routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_item_returns_405() {
    let response = send(build_test_app(), Method::DELETE, "/items/1", None).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Unsupported Action", "friendlyMessage": "Items are read-only"})
    );
}

#[tokio::test]
async fn teapot_returns_418() {
    let response = get(build_test_app(), "/teapot").await;

    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    assert_eq!(
        body_json(response).await,
        json!({"message": "I am a teapot", "friendlyMessage": 418})
    );
}

#[tokio::test]
async fn admin_requires_role_header() {
    let response = get(build_test_app(), "/admin").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["friendlyMessage"], 401);
}

#[tokio::test]
async fn admin_rejects_non_admin_role() {
    let request = Request::builder()
        .uri("/admin")
        .header("x-role", "viewer")
        .body(Body::empty())
        .unwrap();
    let response = build_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Forbidden", "friendlyMessage": "Admin role required"})
    );
}

#[tokio::test]
async fn admin_accepts_admin_role() {
    let request = Request::builder()
        .uri("/admin")
        .header("x-role", "admin")
        .body(Body::empty())
        .unwrap();
    let response = build_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["body"], json!({"role": "admin"}));
}

#[tokio::test]
async fn boom_returns_500_with_error_detail() {
    let response = get(build_test_app(), "/boom").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Internal Server Error");
    assert_eq!(json["error"]["message"], "Failed to parse report size");
    assert!(json["error"]["stacktrace"]
        .as_str()
        .unwrap()
        .contains("invalid digit"));
}

// ---------------------------------------------------------------------------
// Test: RequestParams sees body, path and query together
// ---------------------------------------------------------------------------

async fn guarded(params: RequestParams) -> Response {
    match params.guard(["id", "name", "page"]) {
        Guard::Proceed => axum::Json(json!({"proceeded": true})).into_response(),
        Guard::Rejected(response) => response,
    }
}

fn guard_app() -> Router {
    Router::new().route("/things/{id}", post(guarded))
}

#[tokio::test]
async fn params_spread_across_containers_proceed() {
    let response = send(
        guard_app(),
        Method::POST,
        "/things/7?page=2",
        Some(r#"{"name": false}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"proceeded": true}));
}

#[tokio::test]
async fn missing_params_are_reported_in_order() {
    let response = send(guard_app(), Method::POST, "/things/7", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["errors"],
        json!([
            "Missing required parameter: name",
            "Missing required parameter: page"
        ])
    );
}

#[tokio::test]
async fn require_reports_missing_names() {
    let request = Request::builder()
        .uri("/things/7?name=x")
        .body(Body::empty())
        .unwrap();
    let params = <RequestParams as axum::extract::FromRequest<()>>::from_request(request, &())
        .await
        .unwrap();

    // Outside a router there are no recorded path parameters.
    assert_eq!(params.path, None);
    assert_matches!(params.require("name"), Ok(()));
    assert_matches!(
        params.require(["id", "name"]),
        Err(jsonreply_api::error::ApiError::BadRequest { errors, .. })
            if errors == vec!["Missing required parameter: id".to_string()]
    );
}

#[tokio::test]
async fn undecodable_path_param_is_not_reported_missing() {
    let response = send(
        guard_app(),
        Method::POST,
        "/things/%FF?page=1",
        Some(r#"{"name": "x"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let errors = body_json(response).await["errors"].clone();
    assert_eq!(errors.as_array().unwrap().len(), 1);
    let message = errors[0].as_str().unwrap();
    assert!(message.contains("UTF-8"), "unexpected error: {message}");
    assert!(!message.contains("Missing required parameter"));
}
