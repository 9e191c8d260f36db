//! Login, registration and logout.

use log::{error, info};
use serde::Serialize;

use super::{SessionManager, SessionState, LOGIN_PATH, REGISTER_PATH};
use crate::{
    error::Result,
    models::{AuthResponse, LoginRequest, RegisterRequest},
};

impl SessionManager {
    /// Exchanges a username and password for a session.
    ///
    /// On success the token and user from the response replace the current
    /// session and the token is persisted. Returns `true` for every 2xx
    /// response, even one that carried no token.
    ///
    /// # Errors
    ///
    /// A request or credential storage error is logged and returned
    /// unchanged; the session is left as it was.
    pub async fn login(&self, username: &str, password: &str) -> Result<bool> {
        let request = LoginRequest { username, password };
        match self.authenticate(LOGIN_PATH, &request).await {
            Ok(_) => {
                info!("Logged in as {username}");
                Ok(true)
            }
            Err(e) => {
                error!("Login failed: {e}");
                Err(e)
            }
        }
    }

    /// Creates an account and signs in with it.
    ///
    /// Returns `true` when the server issued a token (the session is now
    /// authenticated) and `false` when it accepted the registration without
    /// one, for example when the account needs confirming first. This is
    /// the same polarity as [`SessionManager::login`].
    ///
    /// # Errors
    ///
    /// A request or credential storage error is logged and returned
    /// unchanged; the session is left as it was.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<bool> {
        let request = RegisterRequest {
            email,
            password,
            name,
        };
        match self.authenticate(REGISTER_PATH, &request).await {
            Ok(issued) => {
                info!("Registered {email} (token issued: {issued})");
                Ok(issued)
            }
            Err(e) => {
                error!("Registration failed: {e}");
                Err(e)
            }
        }
    }

    /// Clears the user, the token and the persisted credential.
    ///
    /// Always succeeds and may be called any number of times. A failure to
    /// remove the credential file is logged.
    pub fn logout(&self) {
        let mut session = self.inner.session.lock();
        self.inner.clear_locked(&mut session);
        info!("Logged out");
    }

    /// Posts credentials to `path` and installs the answer.
    async fn authenticate<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<bool> {
        let response: AuthResponse = self.inner.api.post_json(path, body).await?;
        self.install(response)
    }

    /// Replaces the session with an auth response. Returns whether a token
    /// was issued.
    ///
    /// The credential is written before the in-memory session changes, so a
    /// storage failure leaves both untouched.
    fn install(&self, response: AuthResponse) -> Result<bool> {
        let AuthResponse { token, user } = response;
        let mut session = self.inner.session.lock();

        match &token {
            Some(token) => self.inner.credentials().save(token)?,
            None => self.inner.credentials().clear()?,
        }

        let state = match (&token, &user) {
            (None, _) => SessionState::Anonymous,
            (Some(_), None) => SessionState::PendingHydration,
            (Some(_), Some(_)) => SessionState::Authenticated,
        };
        let issued = token.is_some();
        let hydrate_with = if user.is_none() { token.clone() } else { None };

        session.token = token;
        session.user = user;
        self.inner.publish(state);
        drop(session);

        if let Some(token) = hydrate_with {
            self.spawn_hydration(token);
        }

        Ok(issued)
    }
}
