//! Hook for reacting to `401 Unauthorized` responses.

use log::debug;
use reqwest::Method;

/// What the client knows about a request the server refused to authorize.
#[derive(Debug, Clone, Copy)]
pub struct UnauthorizedContext<'a> {
    pub method: &'a Method,
    /// Endpoint path relative to the API root
    pub path: &'a str,
    /// Bearer token that was attached, if any
    pub token: Option<&'a str>,
}

/// Called by [`ApiClient`](super::ApiClient) before a 401 is returned to the
/// caller. The handler cannot swallow the error.
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self, context: &UnauthorizedContext<'_>);
}

/// Default handler: records the rejection and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreUnauthorized;

impl UnauthorizedHandler for IgnoreUnauthorized {
    fn on_unauthorized(&self, context: &UnauthorizedContext<'_>) {
        debug!(
            "{} {} was rejected as unauthorized (token attached: {})",
            context.method,
            context.path,
            context.token.is_some()
        );
    }
}
