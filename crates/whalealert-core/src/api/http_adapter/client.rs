use std::fmt;

use async_trait::async_trait;

use crate::args::{ApiArgument, ToApiArguments, TransactionsRequest};
use crate::error::{ClientError, ValidationError};
use crate::types::{Envelope, StatusResponse, TransactionResponse, TransactionsResponse};

use super::super::{WhaleAlertApi, DEFAULT_URL};
use super::request::execute;

/// Whale Alert REST client over HTTP(S).
///
/// Immutable once built; clones share the underlying connection pool.
#[derive(Clone)]
pub struct WhaleAlertClient {
    http: reqwest::Client,
    url: String,
    key: String,
}

impl WhaleAlertClient {
    /// Start configuring a client. Nothing is set: pick a URL with
    /// [`ClientBuilder::default_url`] or [`ClientBuilder::url`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get<T: Envelope>(
        &self,
        endpoint: &str,
        args: &[ApiArgument],
    ) -> Result<T, ClientError> {
        execute(&self.http, &self.url, &self.key, endpoint, args).await
    }
}

impl fmt::Debug for WhaleAlertClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhaleAlertClient")
            .field("url", &self.url)
            .field("key", &if self.key.is_empty() { "" } else { "<redacted>" })
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WhaleAlertApi for WhaleAlertClient {
    async fn status(&self) -> Result<StatusResponse, ClientError> {
        self.get("status", &[]).await
    }

    async fn transaction(
        &self,
        blockchain: &str,
        hash: &str,
    ) -> Result<TransactionResponse, ClientError> {
        if blockchain.is_empty() || hash.is_empty() {
            return Err(ValidationError::MissingBlockchainOrHash.into());
        }
        self.get(&format!("transaction/{blockchain}/{hash}"), &[]).await
    }

    async fn transactions(
        &self,
        start: u64,
        mut request: TransactionsRequest,
    ) -> Result<TransactionsResponse, ClientError> {
        if start == 0 {
            return Err(ValidationError::InvalidStart.into());
        }
        request.start = start;
        self.get("transactions", &request.to_api_arguments()).await
    }
}

// ==============================================================================
// Builder
// ==============================================================================

/// Configuration for a [`WhaleAlertClient`].
///
/// Every setter overwrites the previous value. Empty URL or key are accepted
/// here and rejected by each call.
#[derive(Default)]
pub struct ClientBuilder {
    http: Option<reqwest::Client>,
    url: String,
    key: String,
}

impl ClientBuilder {
    /// Use the production API root, [`DEFAULT_URL`].
    pub fn default_url(self) -> Self {
        self.url(DEFAULT_URL)
    }

    /// Use a custom API root, e.g. a staging host or a local mock.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn access_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Send requests through an existing `reqwest` client instead of a new one.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> WhaleAlertClient {
        WhaleAlertClient {
            http: self.http.unwrap_or_default(),
            url: self.url,
            key: self.key,
        }
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("url", &self.url)
            .field("key", &if self.key.is_empty() { "" } else { "<redacted>" })
            .finish_non_exhaustive()
    }
}
