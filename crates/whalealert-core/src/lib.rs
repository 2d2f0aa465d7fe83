pub mod api;
pub mod args;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use api::{ClientBuilder, WhaleAlertApi, WhaleAlertClient, DEFAULT_URL};
pub use args::{ApiArgument, ToApiArguments, TransactionsRequest};
pub use error::{ApiError, ClientError, ConfigError, ValidationError};
pub use types::{
    Blockchain, Envelope, Owner, StatusResponse, Transaction, TransactionResponse,
    TransactionsResponse,
};
