//! Status codes used by the response formatter.

use std::fmt;

/// The fixed set of statuses the formatter can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Created,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    UnsupportedAction,
    /// 418. Not an error in practice, kept for clients that probe for it.
    Teapot,
    ValidationFailed,
    ServerError,
}

/// Phrases for every status that carries a `message` field.
///
/// 200 and 201 are absent: success envelopes only carry `friendlyMessage`.
static PHRASES: [(u16, &str); 8] = [
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Unsupported Action"),
    (418, "I am a teapot"),
    (422, "Validation Failed"),
    (500, "Internal Server Error"),
];

/// Look up the phrase for a numeric status code.
pub fn status_message(code: u16) -> Option<&'static str> {
    PHRASES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, phrase)| *phrase)
}

impl Status {
    pub const ALL: [Status; 10] = [
        Status::Ok,
        Status::Created,
        Status::BadRequest,
        Status::Unauthorized,
        Status::Forbidden,
        Status::NotFound,
        Status::UnsupportedAction,
        Status::Teapot,
        Status::ValidationFailed,
        Status::ServerError,
    ];

    /// Numeric HTTP status code.
    pub const fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Created => 201,
            Status::BadRequest => 400,
            Status::Unauthorized => 401,
            Status::Forbidden => 403,
            Status::NotFound => 404,
            Status::UnsupportedAction => 405,
            Status::Teapot => 418,
            Status::ValidationFailed => 422,
            Status::ServerError => 500,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Status phrase, or `None` for the success statuses.
    pub fn phrase(self) -> Option<&'static str> {
        status_message(self.code())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phrase() {
            Some(phrase) => write!(f, "{} {phrase}", self.code()),
            None => write!(f, "{}", self.code()),
        }
    }
}
