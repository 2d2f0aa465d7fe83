//! Whale Alert API abstraction layer.
//!
//! Defines the [`WhaleAlertApi`] trait and provides the HTTP implementation
//! ([`WhaleAlertClient`]) configured through [`ClientBuilder`].

mod http_adapter;

pub use http_adapter::{ClientBuilder, WhaleAlertClient, ACCESS_KEY_HEADER};

use async_trait::async_trait;

use crate::args::TransactionsRequest;
use crate::error::ClientError;
use crate::types::{StatusResponse, TransactionResponse, TransactionsResponse};

/// Production API root.
pub const DEFAULT_URL: &str = "https://api.whale-alert.io/v1";

/// The three read-only Whale Alert operations.
///
/// Required parameters are validated before any request is made; every
/// other failure is whatever the request pipeline reported.
#[async_trait]
pub trait WhaleAlertApi: Send + Sync {
    /// Current API status with the list of tracked blockchains.
    async fn status(&self) -> Result<StatusResponse, ClientError>;

    /// Look up the transfers of one transaction hash on `blockchain`.
    ///
    /// Both arguments must be non-empty.
    async fn transaction(
        &self,
        blockchain: &str,
        hash: &str,
    ) -> Result<TransactionResponse, ClientError>;

    /// List transactions since `start` (unix seconds, must be > 0).
    ///
    /// `start` replaces any value already set in `request`. Pagination is
    /// left to the caller: pass the returned cursor back in `request.cursor`.
    async fn transactions(
        &self,
        start: u64,
        request: TransactionsRequest,
    ) -> Result<TransactionsResponse, ClientError>;
}
