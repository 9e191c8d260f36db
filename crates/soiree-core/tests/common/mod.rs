use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Method;
use serde_json::Value;
use soiree_core::{HttpRequest, HttpResponse, HttpTransport, Result, Soiree, SoireeBuilder};
use tempfile::TempDir;

/// In-process stand-in for the events API.
///
/// Routes match on method and path suffix; the newest matching route wins,
/// so a test can change the server's answer midway through.
#[derive(Default)]
pub struct StubServer {
    routes: Mutex<Vec<(Method, String, u16, Value)>>,
    requests: Mutex<Vec<HttpRequest>>,
}

#[allow(dead_code)]
impl StubServer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn route(&self, method: Method, path: &str, status: u16, body: Value) {
        self.routes
            .lock()
            .push((method, path.to_string(), status, body));
    }

    pub fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.url.ends_with(path))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl HttpTransport for StubServer {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().push(request.clone());
        let routes = self.routes.lock();
        let response = routes
            .iter()
            .rev()
            .find(|(method, path, _, _)| *method == request.method && request.url.ends_with(path))
            .map_or_else(
                || HttpResponse::new(404, "not found"),
                |(_, _, status, body)| HttpResponse::json(*status, body),
            );
        Ok(response)
    }
}

/// Helper function to create a client backed by a credential file in `temp_dir`
#[allow(dead_code)]
pub async fn create_test_soiree(temp_dir: &TempDir, server: Arc<StubServer>) -> Soiree {
    SoireeBuilder::new()
        .with_base_url("http://soiree.test")
        .with_credential_path(Some(temp_dir.path().join("token")))
        .with_hydration_timeout(Duration::from_secs(5))
        .with_transport(server)
        .logout_on_unauthorized(true)
        .build()
        .await
        .expect("Failed to create client")
}
