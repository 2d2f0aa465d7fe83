//! Query argument encoding.
//!
//! A request configuration maps to an ordered list of [`ApiArgument`]s, one
//! per field that is not at its zero value. Order follows the field table of
//! the configuration type and fixes the order of the final query string.

use url::form_urlencoded;

/// One `key=value` query argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiArgument {
    pub key: String,
    pub value: String,
}

impl ApiArgument {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Render as `key=value`, percent-encoding both sides.
    fn to_query_pair(&self) -> String {
        format!("{}={}", encode(&self.key), encode(&self.value))
    }
}

/// A request configuration that can be turned into query arguments.
pub trait ToApiArguments {
    fn to_api_arguments(&self) -> Vec<ApiArgument>;
}

/// Join arguments as `key1=value1&key2=value2`, in the given order.
///
/// An empty list yields an empty string.
pub fn to_query(args: &[ApiArgument]) -> String {
    args.iter()
        .map(ApiArgument::to_query_pair)
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

// ==============================================================================
// Transaction Listing Request
// ==============================================================================

/// Filters for `GET /transactions`. Zero-valued fields are not sent.
///
/// `start` is overwritten by the listing call with its validated argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionsRequest {
    /// Unix timestamp (seconds) of the earliest transaction.
    pub start: u64,
    /// Unix timestamp (seconds) of the latest transaction.
    pub end: u64,
    /// Pagination cursor returned by a previous listing.
    pub cursor: String,
    /// Minimum USD value of returned transactions.
    pub min_value: u64,
    /// Maximum number of results.
    pub limit: u64,
    /// Only return transactions of this currency symbol.
    pub currency: String,
}

type FieldEncoder<T> = fn(&T) -> Option<String>;

/// (key, encoder) per field, in declaration order. An encoder returns `None`
/// for the zero value.
const TRANSACTIONS_FIELDS: [(&str, FieldEncoder<TransactionsRequest>); 6] = [
    ("start", |r| number(r.start)),
    ("end", |r| number(r.end)),
    ("cursor", |r| text(&r.cursor)),
    ("min_value", |r| number(r.min_value)),
    ("limit", |r| number(r.limit)),
    ("currency", |r| text(&r.currency)),
];

impl ToApiArguments for TransactionsRequest {
    fn to_api_arguments(&self) -> Vec<ApiArgument> {
        TRANSACTIONS_FIELDS
            .iter()
            .filter_map(|(key, field)| field(self).map(|value| ApiArgument::new(*key, value)))
            .collect()
    }
}

fn number(value: u64) -> Option<String> {
    (value != 0).then(|| value.to_string())
}

fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
