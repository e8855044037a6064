//! Framework-agnostic core for standardized JSON HTTP responses.
//!
//! - [`status`] -- the fixed status set and its phrase table.
//! - [`envelope`] -- the JSON envelopes written as response bodies.
//! - [`respond`] -- one formatter operation per response category.
//! - [`guard`] -- required-parameter checks over body/path/query.
//! - [`writer`] -- the response-writing target abstraction.

pub mod envelope;
pub mod error;
pub mod guard;
pub mod one_or_many;
pub mod respond;
pub mod status;
pub mod writer;

pub use envelope::{ErrorDetail, FriendlyMessage};
pub use guard::{missing_params, require_params, Guard, ParamSource, ParamSources};
pub use one_or_many::OneOrMany;
pub use respond::{Failure, Notice, Rejection, Success};
pub use status::{status_message, Status};
pub use writer::{BufferedResponse, ResponseWriter};
