use axum::response::{IntoResponse, Response};
use jsonreply_core::{Failure, Notice, OneOrMany, Rejection};
use validator::ValidationErrors;

use crate::reply;

/// Application-level error type for HTTP handlers.
///
/// Every variant maps onto one formatter operation, so handlers can return
/// `ApiResult<T>` and use `?` while still producing the standard envelopes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 400 with an `errors` list.
    #[error("Bad request: {}", .errors.join("; "))]
    BadRequest {
        errors: Vec<String>,
        friendly_message: Option<String>,
    },

    #[error("Unauthorized")]
    Unauthorized(Option<String>),

    #[error("Forbidden")]
    Forbidden(Option<String>),

    #[error("Not found")]
    NotFound(Option<String>),

    #[error("Unsupported action")]
    UnsupportedAction(Option<String>),

    #[error("I am a teapot")]
    Teapot(Option<String>),

    /// 422 with an `errors` list.
    #[error("Validation failed: {}", .errors.join("; "))]
    Invalid {
        errors: Vec<String>,
        friendly_message: Option<String>,
    },

    /// Anything unexpected. Written as a 500 with the error's message and
    /// context chain.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(errors: impl Into<OneOrMany>) -> Self {
        ApiError::BadRequest {
            errors: errors.into().into_vec(),
            friendly_message: None,
        }
    }

    pub fn invalid(errors: impl Into<OneOrMany>) -> Self {
        ApiError::Invalid {
            errors: errors.into().into_vec(),
            friendly_message: None,
        }
    }

    /// Attach a friendly message. No effect on [`ApiError::Internal`].
    pub fn with_friendly_message(self, message: impl Into<String>) -> Self {
        let message = Some(message.into());
        match self {
            ApiError::BadRequest { errors, .. } => ApiError::BadRequest {
                errors,
                friendly_message: message,
            },
            ApiError::Invalid { errors, .. } => ApiError::Invalid {
                errors,
                friendly_message: message,
            },
            ApiError::Unauthorized(_) => ApiError::Unauthorized(message),
            ApiError::Forbidden(_) => ApiError::Forbidden(message),
            ApiError::NotFound(_) => ApiError::NotFound(message),
            ApiError::UnsupportedAction(_) => ApiError::UnsupportedAction(message),
            ApiError::Teapot(_) => ApiError::Teapot(message),
            internal @ ApiError::Internal(_) => internal,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::invalid(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest {
                errors,
                friendly_message,
            } => reply::bad_request(Rejection {
                errors: errors.into(),
                friendly_message,
            }),
            ApiError::Unauthorized(friendly_message) => {
                reply::unauthorized(Notice { friendly_message })
            }
            ApiError::Forbidden(friendly_message) => reply::forbidden(Notice { friendly_message }),
            ApiError::NotFound(friendly_message) => reply::not_found(Notice { friendly_message }),
            ApiError::UnsupportedAction(friendly_message) => {
                reply::unsupported_action(Notice { friendly_message })
            }
            ApiError::Teapot(friendly_message) => reply::teapot(Notice { friendly_message }),
            ApiError::Invalid {
                errors,
                friendly_message,
            } => reply::invalid(Rejection {
                errors: errors.into(),
                friendly_message,
            }),
            ApiError::Internal(err) => reply::server_error(Failure::from_anyhow(&err)),
        }
    }
}
