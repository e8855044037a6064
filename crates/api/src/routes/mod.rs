pub mod demo;
pub mod health;

use axum::http::HeaderName;
use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the demo route tree.
///
/// ```text
/// GET    /health          200 health envelope
/// GET    /items/{id}      200 item, 404 unknown id
/// POST   /items           201 created, 400 missing name, 422 blank name
/// DELETE /items/{id}      405
/// GET    /teapot          418
/// GET    /admin           401 without x-role, 403 unless admin, 200 otherwise
/// GET    /boom            500 with error detail
/// ```
pub fn app_routes() -> Router {
    Router::new().merge(health::router()).merge(demo::router())
}

/// [`app_routes`] wrapped in the request-id and tracing layers the demo
/// binary serves.
pub fn build_app() -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    app_routes()
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
}
