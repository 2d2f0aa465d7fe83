//! HTTP client for the Whale Alert REST API.
//!
//! Implements [`WhaleAlertApi`](super::WhaleAlertApi) over `reqwest`: URL and
//! header composition, the GET call, and classification of the response
//! into a typed envelope or a [`ClientError`](crate::ClientError).

mod client;
mod request;
mod response;

pub use client::{ClientBuilder, WhaleAlertClient};
pub use request::ACCESS_KEY_HEADER;
