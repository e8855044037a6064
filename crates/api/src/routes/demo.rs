//! Demo routes exercising every response category.
//!
//! The item catalogue is a fixed in-memory list; nothing is persisted.

use anyhow::Context;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use jsonreply_core::{Guard, Notice, Success};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::extract::RequestParams;
use crate::reply;

const CATALOGUE: [(&str, &str); 2] = [("1", "widget"), ("2", "gadget")];

/// Header carrying the caller's role on `/admin`.
pub const ROLE_HEADER: &str = "x-role";

#[derive(Debug, Serialize)]
struct Item {
    id: String,
    name: String,
}

fn find_item(id: &str) -> Option<Item> {
    CATALOGUE
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(id, name)| Item {
            id: id.to_string(),
            name: name.to_string(),
        })
}

/// GET /items/{id}
async fn show_item(params: RequestParams) -> ApiResult<Response> {
    params.require("id")?;
    let id = params.path_param("id").unwrap_or_default();

    let item = find_item(id)
        .ok_or_else(|| ApiError::NotFound(Some(format!("No item with id {id}"))))?;
    Ok(reply::ok(Success::new(item)))
}

/// POST /items
///
/// `name` may come from the JSON body or the query string.
async fn create_item(params: RequestParams) -> Response {
    if let Guard::Rejected(response) = params.guard(["name"]) {
        return response;
    }

    let name = params
        .body_field("name")
        .and_then(Value::as_str)
        .or_else(|| params.query_param("name"))
        .unwrap_or_default();
    if name.trim().is_empty() {
        return ApiError::invalid("name: must be a non-blank string").into_response();
    }

    let item = Item {
        id: (CATALOGUE.len() + 1).to_string(),
        name: name.to_string(),
    };
    reply::created(Success::new(item).friendly_message("Item created"))
}

/// DELETE /items/{id}
async fn delete_item() -> ApiResult<Response> {
    Err(ApiError::UnsupportedAction(Some("Items are read-only".into())))
}

/// GET /teapot
async fn teapot() -> Response {
    reply::teapot(Notice::new())
}

/// GET /admin
async fn admin(headers: HeaderMap) -> ApiResult<Response> {
    let role = headers
        .get(ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthorized(None))?;

    if role != "admin" {
        return Err(ApiError::Forbidden(None).with_friendly_message("Admin role required"));
    }
    Ok(reply::ok(Success::new(serde_json::json!({ "role": role }))))
}

/// GET /boom
async fn boom() -> ApiResult<Response> {
    let size = "twelve".parse::<u32>().context("Failed to parse report size")?;
    Ok(reply::ok(Success::new(size)))
}

pub fn router() -> Router {
    Router::new()
        .route("/items", post(create_item))
        .route("/items/{id}", get(show_item).delete(delete_item))
        .route("/teapot", get(teapot))
        .route("/admin", get(admin))
        .route("/boom", get(boom))
}
