use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Router;
use whalealert_core::api::ACCESS_KEY_HEADER;

static TRACING_INIT: Once = Once::new();

pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("whalealert_core=debug")
                }),
            )
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

/// Loopback stand-in for the Whale Alert API.
pub struct FakeApi {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeApi {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serve `respond(access_key, path, query)` for the rest of the test.
pub async fn spawn<F>(respond: F) -> FakeApi
where
    F: Fn(&str, &str, &str) -> (StatusCode, &'static str) + Clone + Send + Sync + 'static,
{
    init_tracing();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let router = Router::new().fallback(move |uri: Uri, headers: HeaderMap| {
        let counter = Arc::clone(&counter);
        let respond = respond.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            let key = headers
                .get(ACCESS_KEY_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            let (status, body) = respond(key, uri.path(), uri.query().unwrap_or_default());
            (status, body)
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("loopback listener must bind");
    let addr = listener.local_addr().expect("listener must have an address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("fake api must run");
    });

    FakeApi {
        url: format!("http://{addr}"),
        hits,
    }
}

/// Value of `name` in a raw query string.
pub fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
