//! Shortcuts that run a formatter operation against a fresh [`AxumWriter`].
//!
//! ```ignore
//! async fn show(Path(id): Path<u64>) -> Response {
//!     match find(id) {
//!         Some(item) => reply::ok(Success::new(item)),
//!         None => reply::not_found(Notice::new().friendly_message("No such item")),
//!     }
//! }
//! ```

use axum::response::Response;
use jsonreply_core::respond;
use jsonreply_core::{Failure, Notice, Rejection, Success};
use serde::Serialize;

use crate::writer::AxumWriter;

pub fn ok<T: Serialize>(data: Success<T>) -> Response {
    respond::ok(&mut AxumWriter::new(), data)
}

pub fn created<T: Serialize>(data: Success<T>) -> Response {
    respond::created(&mut AxumWriter::new(), data)
}

pub fn bad_request(data: Rejection) -> Response {
    respond::bad_request(&mut AxumWriter::new(), data)
}

pub fn unauthorized(data: Notice) -> Response {
    respond::unauthorized(&mut AxumWriter::new(), data)
}

pub fn forbidden(data: Notice) -> Response {
    respond::forbidden(&mut AxumWriter::new(), data)
}

pub fn not_found(data: Notice) -> Response {
    respond::not_found(&mut AxumWriter::new(), data)
}

pub fn unsupported_action(data: Notice) -> Response {
    respond::unsupported_action(&mut AxumWriter::new(), data)
}

pub fn teapot(data: Notice) -> Response {
    respond::teapot(&mut AxumWriter::new(), data)
}

pub fn invalid(data: Rejection) -> Response {
    respond::invalid(&mut AxumWriter::new(), data)
}

pub fn server_error(data: Failure) -> Response {
    respond::server_error(&mut AxumWriter::new(), data)
}
