//! User identity and authentication payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The authenticated user as reported by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Any further fields the server sends, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Best human-readable label for this user.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| match &self.id {
                Value::String(id) => id.clone(),
                other => other.to_string(),
            })
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

/// Response of both login and register.
///
/// Either field may be missing; a missing token leaves the session
/// without a persisted credential.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}
