//! Inputs that may be a single string or a list of strings.

use serde::Deserialize;
use validator::ValidationErrors;

/// A single string or an ordered list of strings.
///
/// Normalize with [`OneOrMany::into_vec`] before use; a single value becomes
/// a one-element list and a list is kept as given, empty or not.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for OneOrMany {
    fn from(values: &[&str]) -> Self {
        OneOrMany::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany {
    fn from(values: [&str; N]) -> Self {
        OneOrMany::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Flatten field-level validation failures into `"<field>: <message>"` lines.
///
/// Fields are sorted by name so the output order is stable. A failure with
/// no message falls back to its validation code.
impl From<ValidationErrors> for OneOrMany {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, Vec<String>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, failures)| {
                let messages = failures
                    .iter()
                    .map(|failure| match &failure.message {
                        Some(message) => message.to_string(),
                        None => failure.code.to_string(),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        OneOrMany::Many(
            fields
                .into_iter()
                .flat_map(|(field, messages)| {
                    messages
                        .into_iter()
                        .map(move |message| format!("{field}: {message}"))
                })
                .collect(),
        )
    }
}
