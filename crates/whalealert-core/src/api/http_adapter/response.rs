use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ClientError};
use crate::types::Envelope;

/// Turn a fully-read response into the endpoint's envelope or an error.
///
/// - 200: decode as `T`; a vacuous decode is [`ClientError::IncorrectJson`].
/// - 404: [`ClientError::NotFound`], body ignored.
/// - anything else: decode as [`ApiError`] and return it.
///
/// Only the first JSON value of the body is read; anything after it is
/// ignored. JSON failures surface as [`ClientError::Decode`] in every branch.
pub(super) fn classify<T: Envelope>(status: StatusCode, body: &str) -> Result<T, ClientError> {
    if status == StatusCode::OK {
        let decoded: T = decode_first(body)?;
        if decoded.is_vacuous() {
            return Err(ClientError::IncorrectJson);
        }
        return Ok(decoded);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }
    let api_error: ApiError = decode_first(body)?;
    Err(ClientError::Api(api_error))
}

fn decode_first<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    match serde_json::Deserializer::from_str(body).into_iter::<T>().next() {
        Some(decoded) => decoded,
        // Blank body: let the parser report the EOF.
        None => serde_json::from_str(body),
    }
}
