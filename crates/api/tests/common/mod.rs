use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build the demo application with the same layers the binary serves.
#[allow(dead_code)]
pub fn build_test_app() -> Router {
    jsonreply_api::routes::build_app()
}

/// Send a request with an optional JSON body through the router.
#[allow(dead_code)]
pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

/// Read the raw response body.
#[allow(dead_code)]
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Read and parse the response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
