use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jsonreply_core::{ResponseWriter, Status};
use serde::Serialize;

/// [`ResponseWriter`] that produces an axum [`Response`].
///
/// The body is serialized eagerly so the writer does not need to own it; a
/// serialization failure becomes axum's plain-text 500, same as returning a
/// `Json` that fails to serialize.
#[derive(Debug, Clone)]
pub struct AxumWriter {
    status: StatusCode,
}

impl AxumWriter {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }
}

impl Default for AxumWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseWriter for AxumWriter {
    type Output = Response;

    fn status(&mut self, status: Status) -> &mut Self {
        self.status = http_status(status);
        self
    }

    fn json<T: Serialize + ?Sized>(&mut self, body: &T) -> Response {
        (self.status, Json(body)).into_response()
    }
}

/// Map a formatter status onto the `http` crate's status type.
pub fn http_status(status: Status) -> StatusCode {
    match status {
        Status::Ok => StatusCode::OK,
        Status::Created => StatusCode::CREATED,
        Status::BadRequest => StatusCode::BAD_REQUEST,
        Status::Unauthorized => StatusCode::UNAUTHORIZED,
        Status::Forbidden => StatusCode::FORBIDDEN,
        Status::NotFound => StatusCode::NOT_FOUND,
        Status::UnsupportedAction => StatusCode::METHOD_NOT_ALLOWED,
        Status::Teapot => StatusCode::IM_A_TEAPOT,
        Status::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        Status::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
