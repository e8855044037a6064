//! The response-writing target the formatter writes through.

use serde::Serialize;

use crate::error::WriteError;
use crate::status::Status;

/// A sink that accepts a status and then a JSON-serializable body.
///
/// The two calls chain: `res.status(Status::Ok).json(&body)`. Whatever
/// `json` returns is handed back unchanged to the formatter's caller.
pub trait ResponseWriter {
    type Output;

    fn status(&mut self, status: Status) -> &mut Self;

    fn json<T: Serialize + ?Sized>(&mut self, body: &T) -> Self::Output;
}

/// In-memory writer that keeps the status and the serialized body bytes.
///
/// Useful for hosts without their own response type, and for asserting on
/// exactly what the formatter wrote.
#[derive(Debug, Clone, Default)]
pub struct BufferedResponse {
    status: Option<Status>,
    status_writes: usize,
    body: Option<Vec<u8>>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last status set, if any.
    pub fn status_code(&self) -> Option<Status> {
        self.status
    }

    /// How many times a status was set on this writer.
    pub fn status_writes(&self) -> usize {
        self.status_writes
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// The written body parsed back into a JSON value.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|bytes| serde_json::from_slice(bytes).ok())
    }
}

impl ResponseWriter for BufferedResponse {
    type Output = Result<(), WriteError>;

    fn status(&mut self, status: Status) -> &mut Self {
        self.status = Some(status);
        self.status_writes += 1;
        self
    }

    fn json<T: Serialize + ?Sized>(&mut self, body: &T) -> Self::Output {
        if self.body.is_some() {
            return Err(WriteError::AlreadyWritten);
        }
        self.body = Some(serde_json::to_vec(body)?);
        Ok(())
    }
}
