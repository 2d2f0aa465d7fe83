//! Domain entities and response envelopes for the Whale Alert API.
//!
//! Every field is `#[serde(default)]` and reads `null` as its zero value: the
//! API omits empty fields (a lookup with no hits returns
//! `{"result":"success","count":0}`), so absence and `null` both decode to the
//! zero value. Whether a decoded envelope carries anything at all is
//! answered by [`Envelope::is_vacuous`].
//!
//! API reference: <https://docs.whale-alert.io/>

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

// ==============================================================================
// Envelope Contract
// ==============================================================================

/// A top-level JSON object returned by an endpoint on HTTP 200.
pub trait Envelope: DeserializeOwned {
    /// True when the body decoded but carried none of the envelope's fields.
    ///
    /// Such a body was not actually of the expected shape and is reported as
    /// [`ClientError::IncorrectJson`](crate::ClientError::IncorrectJson).
    fn is_vacuous(&self) -> bool;
}

// ==============================================================================
// Entities
// ==============================================================================

/// A blockchain tracked by the API, with its supported asset symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blockchain {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Supported symbols. The API may include empty strings here.
    #[serde(deserialize_with = "null_as_default")]
    pub symbols: Vec<String>,
    /// Connectivity status, e.g. `connected`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// Owner information for one side of a transaction.
///
/// `owner` and `owner_type` are `unknown` when the address is unattributed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(deserialize_with = "null_as_default")]
    pub blockchain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub from: Owner,
    #[serde(deserialize_with = "null_as_default")]
    pub to: Owner,
    /// Unix timestamp in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub amount_usd: f64,
    /// Number of transfers aggregated into this entry.
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
}

// ==============================================================================
// Envelopes
// ==============================================================================

/// Body of `GET /status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub result: String,
    #[serde(deserialize_with = "null_as_default")]
    pub blockchain_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub blockchains: Vec<Blockchain>,
}

impl Envelope for StatusResponse {
    fn is_vacuous(&self) -> bool {
        self.result.is_empty() && self.blockchain_count == 0 && self.blockchains.is_empty()
    }
}

/// Body of `GET /transaction/{blockchain}/{hash}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub result: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
}

impl Envelope for TransactionResponse {
    fn is_vacuous(&self) -> bool {
        self.result.is_empty() && self.count == 0 && self.transactions.is_empty()
    }
}

/// Body of `GET /transactions`. `cursor` continues the listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub result: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cursor: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
}

impl Envelope for TransactionsResponse {
    fn is_vacuous(&self) -> bool {
        self.result.is_empty()
            && self.cursor.is_empty()
            && self.count == 0
            && self.transactions.is_empty()
    }
}

/// Treat an explicit JSON `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
