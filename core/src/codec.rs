//! JSON encoding and decoding of request and response payloads.
//!
//! Decoding ignores fields the target type does not declare, so the client
//! keeps working when the API adds fields. None of the payload types opt into
//! `deny_unknown_fields`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;

/// Serialize `value` to its JSON wire form.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|e| Error::Encode(e.to_string()))
}

/// Deserialize a JSON body into `T`.
///
/// An empty or whitespace-only body is an error rather than a default value.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    if body.trim().is_empty() {
        return Err(Error::Decode("empty response body".to_string()));
    }
    serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))
}
