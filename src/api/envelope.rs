use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::FetchError;
use crate::utils::display_text;

/// The one `status` value that marks a successful envelope.
pub const SUCCESS_STATUS: &str = "success";

/// Reported when a failure envelope carries no `message`.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// A parsed `{status, ...}` envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedResponse<T> {
    Success(T),
    /// Business error with the server-supplied message.
    Failure(String),
}

/// Classify a raw response body.
///
/// `status` must be present. When it equals `"success"` the array under
/// `payload_key` must be present too and is decoded into `T`; any other status
/// yields [`FeedResponse::Failure`] without looking at the payload.
pub fn classify<T: DeserializeOwned>(body: &str, payload_key: &str) -> Result<FeedResponse<T>, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let Value::Object(mut obj) = value else {
        return Err(FetchError::Malformed("response is not a JSON object".into()));
    };

    let status = obj
        .get("status")
        .ok_or_else(|| FetchError::Malformed("missing `status` field".into()))?;

    if status.as_str() != Some(SUCCESS_STATUS) {
        let message = obj
            .get("message")
            .filter(|m| !m.is_null())
            .map(display_text)
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        return Ok(FeedResponse::Failure(message));
    }

    let payload = obj
        .remove(payload_key)
        .filter(|p| !p.is_null())
        .ok_or_else(|| FetchError::Malformed(format!("missing `{}` field", payload_key)))?;
    let items = serde_json::from_value(payload).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(FeedResponse::Success(items))
}
