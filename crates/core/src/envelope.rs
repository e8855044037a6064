//! JSON envelopes written as response bodies.
//!
//! Field order in each struct is the key order on the wire.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Human-oriented message shown next to the status phrase.
///
/// Error statuses fall back to their bare numeric code when the caller gives
/// no message, so this serializes as either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FriendlyMessage {
    Text(String),
    Code(u16),
}

impl FriendlyMessage {
    /// Use `custom` when it is present and non-empty, otherwise `default`.
    pub fn or_default(custom: Option<String>, default: FriendlyMessage) -> Self {
        match custom {
            Some(text) if !text.is_empty() => FriendlyMessage::Text(text),
            _ => default,
        }
    }
}

impl From<&str> for FriendlyMessage {
    fn from(text: &str) -> Self {
        FriendlyMessage::Text(text.to_string())
    }
}

impl From<String> for FriendlyMessage {
    fn from(text: String) -> Self {
        FriendlyMessage::Text(text)
    }
}

/// `{ body, friendlyMessage }` for 200 and 201.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEnvelope<T> {
    pub body: T,
    pub friendly_message: FriendlyMessage,
}

/// `{ message, friendlyMessage }` for 4xx statuses without detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub message: &'static str,
    pub friendly_message: FriendlyMessage,
}

/// `{ message, friendlyMessage, errors }` for 400 and 422.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationEnvelope {
    pub message: &'static str,
    pub friendly_message: FriendlyMessage,
    pub errors: Vec<String>,
}

/// `{ message, error }` for 500. `error` is `{}` when no detail was captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerErrorEnvelope {
    pub message: &'static str,
    #[serde(serialize_with = "detail_or_empty")]
    pub error: Option<ErrorDetail>,
}

fn detail_or_empty<S: Serializer>(
    detail: &Option<ErrorDetail>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match detail {
        Some(detail) => detail.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// Message and trace captured from an error value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub stacktrace: String,
}

impl ErrorDetail {
    /// Capture from anything implementing [`std::error::Error`].
    ///
    /// The trace is the error's display text followed by its `source()`
    /// chain, laid out the way `anyhow` prints a chain.
    pub fn capture<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let message = err.to_string();
        let mut stacktrace = message.clone();

        let mut causes = std::iter::successors(err.source(), |cause| cause.source()).peekable();
        if causes.peek().is_some() {
            stacktrace.push_str("\n\nCaused by:");
            for (depth, cause) in causes.enumerate() {
                stacktrace.push_str(&format!("\n    {depth}: {cause}"));
            }
        }
        if stacktrace.is_empty() {
            stacktrace = format!("{err:?}");
        }

        Self {
            message,
            stacktrace,
        }
    }

    /// Capture from an [`anyhow::Error`], including its backtrace when one
    /// was captured (`RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`).
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        Self {
            message: err.to_string(),
            stacktrace: format!("{err:?}"),
        }
    }
}
