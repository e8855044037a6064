//! axum integration for `jsonreply-core`.
//!
//! Exposes the response writer, reply shortcuts, error type, request
//! parameter extractor and the demo routes so integration tests and the
//! binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod reply;
pub mod routes;
pub mod writer;
