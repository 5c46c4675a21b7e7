//! Upstream response envelope

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiResult;

/// `code` value the upstream sends on success.
pub const CODE_SUCCESS: u16 = 200;

/// `code` value the upstream sends on failure.
pub const CODE_FAILURE: u16 = 500;

/// Fallback shown when a failure envelope carries no usable message.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// The `{code, message, data}` wrapper every upstream response uses.
///
/// `data` is kept untyped at this stage so a failure envelope with a null or
/// unrelated payload still decodes; it is only deserialized into the declared
/// result type once `code` says success. Older upstream builds spell the
/// diagnostic field `msg`, so both spellings are accepted.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub code: u16,
    #[serde(default, alias = "msg")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Any `code` other than 200 counts as failure, whatever the transport
    /// status was.
    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }

    /// Failure message with the fallback applied for missing or empty values.
    pub fn failure_message(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => UNKNOWN_ERROR,
        }
    }

    /// Strip the wrapper, deserializing the payload into the declared type.
    pub fn into_data<T: DeserializeOwned>(self) -> ApiResult<T> {
        Ok(serde_json::from_value(self.data)?)
    }
}
