use tracing::{debug, trace};

use crate::args::{to_query, ApiArgument};
use crate::error::{ClientError, ConfigError};
use crate::types::Envelope;

use super::response::classify;

/// Header carrying the access key on every request.
pub const ACCESS_KEY_HEADER: &str = "X-WA-API-KEY";

/// Issue one authenticated GET and classify the response.
///
/// Fails with [`ConfigError`] before touching the network when the base URL
/// or access key is empty.
pub(super) async fn execute<T: Envelope>(
    http: &reqwest::Client,
    base_url: &str,
    access_key: &str,
    endpoint: &str,
    args: &[ApiArgument],
) -> Result<T, ClientError> {
    check_required(base_url, access_key)?;
    let url = build_url(base_url, endpoint, args);
    debug!(api.endpoint = endpoint, api.args = args.len(), "api call");

    let response = http
        .get(&url)
        .header(ACCESS_KEY_HEADER, access_key)
        .send()
        .await?;
    let status = response.status();

    let body = response.text().await?;
    debug!(api.endpoint = endpoint, %status, body_len = body.len(), "api response");
    trace!(api.endpoint = endpoint, body = %body, "api response body");

    classify(status, &body)
}

pub(super) fn check_required(base_url: &str, access_key: &str) -> Result<(), ConfigError> {
    if base_url.is_empty() {
        return Err(ConfigError::MissingUrl);
    }
    if access_key.is_empty() {
        return Err(ConfigError::MissingAccessKey);
    }
    Ok(())
}

/// `{base}/{endpoint}?{query}`. The `?` is kept even with no arguments.
pub(super) fn build_url(base_url: &str, endpoint: &str, args: &[ApiArgument]) -> String {
    format!("{base_url}/{endpoint}?{}", to_query(args))
}
