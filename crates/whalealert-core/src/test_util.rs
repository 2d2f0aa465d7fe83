//! Shared test helpers for `whalealert-core` unit tests.
//!
//! [`spawn_mock`] runs an in-process HTTP server on a loopback port that
//! answers every request through a caller-supplied responder and records
//! what it received, so tests can assert on paths, query strings, headers,
//! and whether the network was touched at all.

use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Router;

use crate::api::ACCESS_KEY_HEADER;

/// What the mock server saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    /// Query string, `None` when absent or empty.
    pub query: Option<String>,
    pub access_key: Option<String>,
}

pub struct MockServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("mock request log poisoned").clone()
    }
}

/// Serve `respond` on `127.0.0.1:<ephemeral>` for the rest of the test.
pub async fn spawn_mock<F>(respond: F) -> MockServer
where
    F: Fn(&RecordedRequest) -> (StatusCode, String) + Clone + Send + Sync + 'static,
{
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);

    let router = Router::new().fallback(move |uri: Uri, headers: HeaderMap| {
        let log = Arc::clone(&log);
        let respond = respond.clone();
        async move {
            let recorded = RecordedRequest {
                path: uri.path().to_owned(),
                query: uri
                    .query()
                    .filter(|query| !query.is_empty())
                    .map(str::to_owned),
                access_key: headers
                    .get(ACCESS_KEY_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned),
            };
            let reply = respond(&recorded);
            log.lock().expect("mock request log poisoned").push(recorded);
            reply
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("loopback listener must bind");
    let addr = listener.local_addr().expect("listener must have an address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("mock server must run");
    });

    MockServer {
        url: format!("http://{addr}"),
        requests,
    }
}
