//! Scripted in-memory transport for unit tests.

use std::{collections::VecDeque, time::Duration};

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Method;
use serde_json::Value;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::error::Result;

struct Route {
    method: Method,
    path: String,
    replies: VecDeque<(HttpResponse, Option<Duration>)>,
}

/// Answers requests from per-route queues and records everything it sees.
///
/// The last reply queued for a route is repeated once the queue runs dry.
/// Unscripted routes answer 404.
#[derive(Default)]
pub(crate) struct FakeTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(&self, method: Method, path: &str, status: u16, body: Value) {
        self.push(method, path, HttpResponse::json(status, &body), None);
    }

    pub(crate) fn reply_after(
        &self,
        method: Method,
        path: &str,
        delay: Duration,
        status: u16,
        body: Value,
    ) {
        self.push(method, path, HttpResponse::json(status, &body), Some(delay));
    }

    fn push(&self, method: Method, path: &str, response: HttpResponse, delay: Option<Duration>) {
        let mut routes = self.routes.lock();
        if let Some(route) = routes
            .iter_mut()
            .find(|r| r.method == method && r.path == path)
        {
            route.replies.push_back((response, delay));
        } else {
            routes.push(Route {
                method,
                path: path.to_string(),
                replies: VecDeque::from([(response, delay)]),
            });
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub(crate) fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.url.ends_with(path))
            .cloned()
            .collect()
    }

    fn next_reply(&self, request: &HttpRequest) -> (HttpResponse, Option<Duration>) {
        let mut routes = self.routes.lock();
        let route = routes
            .iter_mut()
            .find(|r| r.method == request.method && request.url.ends_with(&r.path));
        match route {
            Some(route) if route.replies.len() > 1 => route
                .replies
                .pop_front()
                .unwrap_or_else(|| (HttpResponse::new(404, ""), None)),
            Some(route) => route
                .replies
                .front()
                .cloned()
                .unwrap_or_else(|| (HttpResponse::new(404, ""), None)),
            None => (HttpResponse::new(404, "not found"), None),
        }
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().push(request.clone());
        let (response, delay) = self.next_reply(&request);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(response)
    }
}
