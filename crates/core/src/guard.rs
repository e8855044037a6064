//! Required-parameter checks over a request's body, path and query.

use std::collections::HashMap;

use serde_json::Value;

use crate::one_or_many::OneOrMany;
use crate::respond::{self, Rejection};
use crate::writer::ResponseWriter;

/// Anything that can answer "does this request carry a parameter named X".
pub trait ParamSource {
    fn has_param(&self, name: &str) -> bool;
}

/// Body, path and query containers of a request.
///
/// Each container is optional; an absent container has no keys. Presence is
/// an exact key match, so a key whose value is `false`, `0`, `""` or `null`
/// still counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSources {
    /// Parsed body. Only a JSON object contributes keys.
    pub body: Option<Value>,
    pub path: Option<HashMap<String, String>>,
    pub query: Option<HashMap<String, String>>,
}

impl ParamSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_path<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.path = Some(collect_pairs(params));
        self
    }

    pub fn with_query<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query = Some(collect_pairs(params));
        self
    }

    pub fn body_field(&self, name: &str) -> Option<&Value> {
        self.body.as_ref()?.as_object()?.get(name)
    }

    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path.as_ref()?.get(name).map(String::as_str)
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.as_ref()?.get(name).map(String::as_str)
    }
}

fn collect_pairs<I, K, V>(params: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    params
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

impl ParamSource for ParamSources {
    fn has_param(&self, name: &str) -> bool {
        let in_body = self
            .body
            .as_ref()
            .and_then(Value::as_object)
            .is_some_and(|body| body.contains_key(name));
        let in_path = self.path.as_ref().is_some_and(|path| path.contains_key(name));
        let in_query = self.query.as_ref().is_some_and(|query| query.contains_key(name));

        in_body || in_path || in_query
    }
}

/// Outcome of [`require_params`].
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Guard<O> {
    /// Every name was present; nothing was written.
    Proceed,
    /// At least one name was missing; a 400 was written and this is what the
    /// writer returned.
    Rejected(O),
}

impl<O> Guard<O> {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Guard::Proceed)
    }

    pub fn rejected(self) -> Option<O> {
        match self {
            Guard::Proceed => None,
            Guard::Rejected(output) => Some(output),
        }
    }
}

/// One `"Missing required parameter: <name>"` line per absent name, in the
/// order the names were given.
pub fn missing_params<S>(source: &S, names: impl Into<OneOrMany>) -> Vec<String>
where
    S: ParamSource + ?Sized,
{
    names
        .into()
        .into_vec()
        .into_iter()
        .filter(|name| !source.has_param(name))
        .map(|name| format!("Missing required parameter: {name}"))
        .collect()
}

/// Check `names` against `source`; on any miss, write a 400 through `res`
/// with the missing-parameter messages as `errors`.
pub fn require_params<W, S>(
    res: &mut W,
    source: &S,
    names: impl Into<OneOrMany>,
) -> Guard<W::Output>
where
    W: ResponseWriter,
    S: ParamSource + ?Sized,
{
    let missing = missing_params(source, names);
    if missing.is_empty() {
        return Guard::Proceed;
    }

    tracing::debug!(missing = ?missing, "Rejecting request with missing parameters");
    Guard::Rejected(respond::bad_request(res, Rejection::new(missing)))
}
