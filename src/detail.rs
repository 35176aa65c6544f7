use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// The handful of EMR detail attributes the notification is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmrEventDetail {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub severity: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

#[derive(Error, Debug)]
#[error("failed to decode event detail - {0}")]
pub struct DecodeError(#[from] serde_json::Error);

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes the raw detail payload. Missing keys become empty strings, unknown
/// keys are ignored.
pub fn decode(detail: &[u8]) -> Result<EmrEventDetail, DecodeError> {
    Ok(serde_json::from_slice(detail)?)
}
