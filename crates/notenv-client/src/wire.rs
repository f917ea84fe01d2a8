use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{FetchError, FetchResult};

/// One key/value pair as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariableEntry {
    pub key: String,
    pub value: String,
}

/// Canonical success body: `{"variables": [{"key": ..., "value": ...}]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct VariablesResponse {
    pub variables: Vec<VariableEntry>,
}

/// Error body the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Accepted success body shapes, most specific first.
///
/// The canonical shape is the `variables` envelope; a bare entry list and a
/// plain string→string object are accepted for compatibility with older
/// backend versions.
#[derive(Deserialize)]
#[serde(untagged)]
enum SuccessBody {
    Envelope(VariablesResponse),
    List(Vec<VariableEntry>),
    Map(BTreeMap<String, String>),
}

/// Decode a 2xx response body into (key, value) pairs in wire order.
///
/// Duplicate keys are passed through unchanged; the store applies
/// last-write-wins when it is built.
pub fn parse_variables(body: &[u8]) -> FetchResult<Vec<(String, String)>> {
    let parsed: SuccessBody = serde_json::from_slice(body)
        .map_err(|e| FetchError::Parse(e.to_string()))?;
    let entries = match parsed {
        SuccessBody::Envelope(response) => response
            .variables
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect(),
        SuccessBody::List(entries) => entries
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect(),
        SuccessBody::Map(map) => map.into_iter().collect(),
    };
    Ok(entries)
}

/// Pull the backend's `message` field out of an error body, if the body is
/// JSON of the expected shape.
pub(crate) fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|e| e.message)
}
