//! Common test utilities and helpers

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

use vaiz::{
    ClientConfig, Transport, TransportError, async_trait,
    http::{HttpRequest, HttpResponse},
};

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Create a test API key
#[allow(dead_code)]
pub fn test_api_key() -> String {
    "vaiz-test-key-0123456789abcdef".to_string()
}

/// Space id used by every test client
#[allow(dead_code)]
pub const TEST_SPACE_ID: &str = "64b7f0c2e4b0a1a2b3c4d5e6";

/// Configuration pointing at `base_url` with test credentials
#[allow(dead_code)]
pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        base_url: base_url.to_string(),
        ..ClientConfig::new(test_api_key(), TEST_SPACE_ID)
    }
}

/// Install a test subscriber so `RUST_LOG=vaiz=debug` shows request logs
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A transport that records requests and replays scripted outcomes
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a raw response
    pub fn respond(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::from_body(status, body)));
        self
    }

    /// Queue a `{"type":"ok","payload":...}` response
    pub fn respond_ok(&self, payload: serde_json::Value) -> &Self {
        let body = serde_json::json!({"type": "ok", "payload": payload});
        self.respond(200, serde_json::to_vec(&body).unwrap())
    }

    /// Queue a transport failure
    pub fn fail(&self, error: TransportError) -> &Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    /// Every request sent so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// JSON bodies of every request sent so far
    pub fn bodies(&self) -> Vec<serde_json::Value> {
        self.requests()
            .iter()
            .map(|r| serde_json::from_slice(r.body.as_deref().unwrap_or(b"null")).unwrap())
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted outcome".into())))
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
