use axum::response::Response;
use axum::{routing::get, Router};
use jsonreply_core::Success;
use serde::Serialize;

use crate::reply;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Response {
    reply::ok(
        Success::new(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        })
        .friendly_message("Service healthy"),
    )
}

pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
