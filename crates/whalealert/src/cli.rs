use clap::{Parser, Subcommand};
use whalealert_core::{TransactionsRequest, DEFAULT_URL};

/// whalealert — query the Whale Alert API from the command line.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Whale Alert API key.
    #[arg(long, env = "WHALE_ALERT_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// API root URL.
    #[arg(long, default_value = DEFAULT_URL, env = "WHALE_ALERT_URL")]
    pub url: String,

    /// Print the decoded response as JSON instead of a text report.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show API status and the tracked blockchains.
    Status,

    /// Look up one transaction by blockchain and hash.
    Transaction {
        /// Blockchain name, e.g. `ethereum`.
        #[arg(long, env = "BLOCKCHAIN")]
        blockchain: String,

        /// Transaction hash.
        #[arg(long, env = "TRANSACTION_HASH")]
        hash: String,
    },

    /// List transactions since a unix timestamp.
    Transactions {
        /// Unix timestamp (seconds) of the earliest transaction.
        #[arg(long, env = "START_TIMESTAMP")]
        start: u64,

        /// Unix timestamp (seconds) of the latest transaction.
        #[arg(long)]
        end: Option<u64>,

        /// Cursor returned by a previous listing.
        #[arg(long)]
        cursor: Option<String>,

        /// Minimum USD value.
        #[arg(long)]
        min_value: Option<u64>,

        /// Maximum number of results.
        #[arg(long)]
        limit: Option<u64>,

        /// Only list this currency symbol.
        #[arg(long)]
        currency: Option<String>,
    },
}

/// Listing filters from the optional flags; unset flags stay zero and are not sent.
pub fn listing_request(
    end: Option<u64>,
    cursor: Option<String>,
    min_value: Option<u64>,
    limit: Option<u64>,
    currency: Option<String>,
) -> TransactionsRequest {
    TransactionsRequest {
        start: 0,
        end: end.unwrap_or_default(),
        cursor: cursor.unwrap_or_default(),
        min_value: min_value.unwrap_or_default(),
        limit: limit.unwrap_or_default(),
        currency: currency.unwrap_or_default(),
    }
}
