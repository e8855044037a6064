//! Request parameter extractor for the required-parameter guard.

use std::collections::HashMap;
use std::ops::Deref;

use axum::body::Bytes;
use axum::extract::rejection::RawPathParamsRejection;
use axum::extract::{Form, FromRequest, FromRequestParts, Query, RawPathParams, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::response::Response;
use jsonreply_core::{missing_params, require_params, Guard, OneOrMany, ParamSources};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::writer::AxumWriter;

/// Body, path and query parameters of the incoming request.
///
/// Consumes the body, so it must be the last extractor of a handler. The body
/// container is filled from `application/json` (a non-empty body must be a
/// JSON object) or `application/x-www-form-urlencoded` bodies; any other
/// content type leaves it absent. Path parameters are absent when axum
/// recorded none for the route, and a path parameter that fails to decode is
/// a 400. The query container is absent when the query string cannot be
/// decoded.
///
/// ```ignore
/// async fn create(params: RequestParams) -> ApiResult<Response> {
///     params.require(["name"])?;
///     Ok(reply::created(Success::new(params.body.clone())))
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestParams(pub ParamSources);

impl<S> FromRequest<S> for RequestParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let path = match RawPathParams::from_request_parts(&mut parts, state).await {
            Ok(params) => Some(
                params
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect::<HashMap<_, _>>(),
            ),
            Err(RawPathParamsRejection::MissingPathParams(_)) => None,
            Err(rejection) => return Err(ApiError::bad_request(rejection.body_text())),
        };

        let query = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .ok()
            .map(|Query(query)| query);

        let body = match body_kind(&parts.headers) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
                    .await
                    .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
                parse_body(&bytes)?
            }
            BodyKind::Form => {
                let request = Request::from_parts(parts, body);
                let Form(fields) = Form::<HashMap<String, String>>::from_request(request, state)
                    .await
                    .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
                Some(form_body(fields))
            }
            BodyKind::Other => None,
        };

        Ok(RequestParams(ParamSources { body, path, query }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return BodyKind::Other;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence == "application/json" || essence.ends_with("+json") {
        BodyKind::Json
    } else if essence == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

fn form_body(fields: HashMap<String, String>) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
    )
}

fn parse_body(bytes: &[u8]) -> ApiResult<Option<Value>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let body: Value = serde_json::from_slice(bytes)
        .map_err(|err| ApiError::bad_request(format!("Invalid JSON body: {err}")))?;
    if !body.is_object() {
        return Err(ApiError::bad_request("Request body must be a JSON object"));
    }
    Ok(Some(body))
}

impl RequestParams {
    /// Guard in `?` form: `Err(ApiError::BadRequest)` listing every missing
    /// name when any is absent.
    pub fn require(&self, names: impl Into<OneOrMany>) -> ApiResult<()> {
        let missing = missing_params(&self.0, names);
        if missing.is_empty() {
            Ok(())
        } else {
            tracing::debug!(missing = ?missing, "Rejecting request with missing parameters");
            Err(ApiError::bad_request(missing))
        }
    }

    /// Guard in two-outcome form, with the 400 response already built on
    /// rejection.
    pub fn guard(&self, names: impl Into<OneOrMany>) -> Guard<Response> {
        require_params(&mut AxumWriter::new(), &self.0, names)
    }
}

impl Deref for RequestParams {
    type Target = ParamSources;

    fn deref(&self) -> &ParamSources {
        &self.0
    }
}
