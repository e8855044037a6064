//! Response formatter: one operation per response category.
//!
//! Each operation sets the status on the writer exactly once, writes exactly
//! one JSON envelope, and returns whatever the writer's `json` call returns.
//!
//! | Operation              | Status | Envelope   | Default `friendlyMessage` |
//! |------------------------|--------|------------|---------------------------|
//! | [`ok`]                 | 200    | success    | `"Object Found"`          |
//! | [`created`]            | 201    | success    | `"Created successfully"`  |
//! | [`bad_request`]        | 400    | validation | `400`                     |
//! | [`unauthorized`]       | 401    | error      | `401`                     |
//! | [`forbidden`]          | 403    | error      | `403`                     |
//! | [`not_found`]          | 404    | error      | `404`                     |
//! | [`unsupported_action`] | 405    | error      | `405`                     |
//! | [`teapot`]             | 418    | error      | `418`                     |
//! | [`invalid`]            | 422    | validation | `422`                     |
//! | [`server_error`]       | 500    | server     | n/a                       |

use serde::Serialize;

use crate::envelope::{
    ErrorDetail, ErrorEnvelope, FriendlyMessage, ServerErrorEnvelope, SuccessEnvelope,
    ValidationEnvelope,
};
use crate::one_or_many::OneOrMany;
use crate::status::Status;
use crate::writer::ResponseWriter;

pub const OBJECT_FOUND: &str = "Object Found";
pub const CREATED_SUCCESSFULLY: &str = "Created successfully";

/// Input for [`ok`] and [`created`].
#[derive(Debug, Clone, PartialEq)]
pub struct Success<T> {
    pub body: T,
    pub friendly_message: Option<String>,
}

impl<T> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            body,
            friendly_message: None,
        }
    }

    pub fn friendly_message(mut self, message: impl Into<String>) -> Self {
        self.friendly_message = Some(message.into());
        self
    }
}

/// Input for the plain 4xx operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    pub friendly_message: Option<String>,
}

impl Notice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn friendly_message(mut self, message: impl Into<String>) -> Self {
        self.friendly_message = Some(message.into());
        self
    }
}

/// Input for [`bad_request`] and [`invalid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub errors: OneOrMany,
    pub friendly_message: Option<String>,
}

impl Rejection {
    pub fn new(errors: impl Into<OneOrMany>) -> Self {
        Self {
            errors: errors.into(),
            friendly_message: None,
        }
    }

    pub fn friendly_message(mut self, message: impl Into<String>) -> Self {
        self.friendly_message = Some(message.into());
        self
    }
}

/// Input for [`server_error`].
///
/// Only values with the error capability produce detail; everything else
/// leaves `error` empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failure {
    pub error: Option<ErrorDetail>,
}

impl Failure {
    /// No error value available. Writes `"error": {}`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self {
            error: Some(ErrorDetail::capture(err)),
        }
    }

    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        Self {
            error: Some(ErrorDetail::from_anyhow(err)),
        }
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Self::from_anyhow(&err)
    }
}

/// 200 with a success envelope.
pub fn ok<W, T>(res: &mut W, data: Success<T>) -> W::Output
where
    W: ResponseWriter,
    T: Serialize,
{
    success(res, Status::Ok, data, OBJECT_FOUND)
}

/// 201 with a success envelope.
pub fn created<W, T>(res: &mut W, data: Success<T>) -> W::Output
where
    W: ResponseWriter,
    T: Serialize,
{
    success(res, Status::Created, data, CREATED_SUCCESSFULLY)
}

pub fn bad_request<W: ResponseWriter>(res: &mut W, data: Rejection) -> W::Output {
    rejection(res, Status::BadRequest, data)
}

pub fn unauthorized<W: ResponseWriter>(res: &mut W, data: Notice) -> W::Output {
    notice(res, Status::Unauthorized, data)
}

pub fn forbidden<W: ResponseWriter>(res: &mut W, data: Notice) -> W::Output {
    notice(res, Status::Forbidden, data)
}

pub fn not_found<W: ResponseWriter>(res: &mut W, data: Notice) -> W::Output {
    notice(res, Status::NotFound, data)
}

pub fn unsupported_action<W: ResponseWriter>(res: &mut W, data: Notice) -> W::Output {
    notice(res, Status::UnsupportedAction, data)
}

pub fn teapot<W: ResponseWriter>(res: &mut W, data: Notice) -> W::Output {
    notice(res, Status::Teapot, data)
}

/// 422 with a validation envelope.
pub fn invalid<W: ResponseWriter>(res: &mut W, data: Rejection) -> W::Output {
    rejection(res, Status::ValidationFailed, data)
}

/// 500. Logs the captured message when there is one.
pub fn server_error<W: ResponseWriter>(res: &mut W, data: Failure) -> W::Output {
    match &data.error {
        Some(detail) => tracing::error!(error = %detail.message, "Internal server error"),
        None => tracing::error!("Internal server error without error detail"),
    }

    let envelope = ServerErrorEnvelope {
        message: phrase(Status::ServerError),
        error: data.error,
    };
    res.status(Status::ServerError).json(&envelope)
}

fn success<W, T>(res: &mut W, status: Status, data: Success<T>, default: &str) -> W::Output
where
    W: ResponseWriter,
    T: Serialize,
{
    let envelope = SuccessEnvelope {
        body: data.body,
        friendly_message: FriendlyMessage::or_default(data.friendly_message, default.into()),
    };
    res.status(status).json(&envelope)
}

fn notice<W: ResponseWriter>(res: &mut W, status: Status, data: Notice) -> W::Output {
    let envelope = ErrorEnvelope {
        message: phrase(status),
        friendly_message: FriendlyMessage::or_default(
            data.friendly_message,
            FriendlyMessage::Code(status.code()),
        ),
    };
    res.status(status).json(&envelope)
}

fn rejection<W: ResponseWriter>(res: &mut W, status: Status, data: Rejection) -> W::Output {
    let envelope = ValidationEnvelope {
        message: phrase(status),
        friendly_message: FriendlyMessage::or_default(
            data.friendly_message,
            FriendlyMessage::Code(status.code()),
        ),
        errors: data.errors.into_vec(),
    };
    res.status(status).json(&envelope)
}

fn phrase(status: Status) -> &'static str {
    status.phrase().unwrap_or_default()
}
