use serde::{Deserialize, Serialize};

use crate::types::null_as_default;

/// Every failure a Whale Alert call can end in.
///
/// Messages are stable: wrapped errors are rendered transparently, so the
/// text a caller sees is exactly the underlying message.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("endpoint not found")]
    NotFound,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("incorrect JSON response")]
    IncorrectJson,
}

/// Client configuration problems, detected before any network I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("url is missing")]
    MissingUrl,

    #[error("access key is missing")]
    MissingAccessKey,
}

/// Invalid caller-supplied parameters, detected before any network I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("blockchain and hash are required")]
    MissingBlockchainOrHash,

    #[error("start must be greater than 0")]
    InvalidStart,
}

// ==============================================================================
// API Error Envelope
// ==============================================================================

/// Error body reported by the API on a non-2xx, non-404 response.
///
/// Displays as `message` only, which is the text the API wants shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: String,
    /// Optional underlying cause attached by the API.
    #[serde(rename = "error", default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}
