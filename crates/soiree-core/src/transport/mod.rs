//! HTTP client for the events API.
//!
//! [`ApiClient`] owns the API root and attaches the default headers to every
//! request:
//!
//! - `Content-Type: application/json` and `Accept: application/json`
//! - `Authorization: Bearer <token>` when the [`CredentialStore`] currently
//!   holds a credential
//!
//! The credential is read from the store when each request is built, so a
//! login that happens after the client was created applies to every later
//! request.
//!
//! Non-2xx responses are returned as [`SoireeError::Status`]. For 401 the
//! installed [`UnauthorizedHandler`] runs first; the caller still gets the
//! error.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   Services   │    │  ApiClient   │    │ HttpTransport│
//! │ session/     │───▶│ headers, URL │───▶│  (reqwest)   │
//! │ events/music │    │ status, 401  │    │              │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```

mod http;
mod unauthorized;

#[cfg(test)]
pub(crate) mod fake;

use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub use http::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use unauthorized::{IgnoreUnauthorized, UnauthorizedContext, UnauthorizedHandler};

use crate::{
    credentials::CredentialStore,
    error::{Result, SoireeError},
};

/// Cheaply cloneable handle to the configured API client.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    api_root: String,
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialStore>,
    unauthorized: RwLock<Arc<dyn UnauthorizedHandler>>,
}

impl ApiClient {
    /// Creates a client rooted at `api_root` (base address plus prefix).
    pub fn new(
        api_root: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        let api_root = api_root.into().trim_end_matches('/').to_string();
        Self {
            inner: Arc::new(ClientInner {
                api_root,
                transport,
                credentials,
                unauthorized: RwLock::new(Arc::new(IgnoreUnauthorized)),
            }),
        }
    }

    /// Installs the handler run on 401 responses, replacing the previous one.
    pub fn set_unauthorized_handler(&self, handler: Arc<dyn UnauthorizedHandler>) {
        *self.inner.unauthorized.write() = handler;
    }

    pub fn api_root(&self) -> &str {
        &self.inner.api_root
    }

    /// The credential store consulted for every request.
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.inner.credentials
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.inner.api_root, path.trim_start_matches('/'))
    }

    /// Sends one request and returns the raw response.
    ///
    /// # Errors
    ///
    /// - `SoireeError::Storage` if the credential cannot be read
    /// - `SoireeError::Transport` if the server cannot be reached
    /// - `SoireeError::Status` for any non-2xx response
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<HttpResponse> {
        let token = self.inner.credentials.load()?;

        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if let Some(token) = &token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let request = HttpRequest {
            method: method.clone(),
            url: self.endpoint(path),
            query: query
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            headers,
            body,
        };

        debug!("{} {}", request.method, request.url);
        let response = self.inner.transport.send(request).await?;

        if response.is_success() {
            return Ok(response);
        }

        if response.status == 401 {
            let handler = self.inner.unauthorized.read().clone();
            handler.on_unauthorized(&UnauthorizedContext {
                method: &method,
                path,
                token: token.as_deref(),
            });
        } else {
            warn!("{method} {path} failed with status {}", response.status);
        }

        Err(SoireeError::Status {
            status: response.status,
            body: response.body,
        })
    }

    /// `GET path?query`, response parsed as JSON.
    pub async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(Method::GET, path, query, None).await?;
        parse_body(&response)
    }

    /// `POST path` with a JSON body, response parsed as JSON.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::POST, path, &[], Some(body)).await?;
        parse_body(&response)
    }
}

/// Parses a response body; an empty body reads as JSON `null`.
fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    let body = response.body.trim();
    let body = if body.is_empty() { "null" } else { body };
    Ok(serde_json::from_str(body)?)
}
