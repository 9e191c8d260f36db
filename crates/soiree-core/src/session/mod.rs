//! Session management: the bearer credential and the user it belongs to.
//!
//! A [`SessionManager`] is created once per application context. At startup
//! it restores a persisted credential and reconciles it with the server
//! (hydration). The manager moves through these states:
//!
//! ```text
//!                  stored credential
//!   ┌───────────┐ ─────────────────▶ ┌──────────────────┐  /auth/user ok  ┌───────────────┐
//!   │ Anonymous │                    │ PendingHydration │ ──────────────▶ │ Authenticated │
//!   └───────────┘ ◀───── logout ──── └──────────────────┘                 └───────────────┘
//!         ▲                                   │ rejected / timed out             │
//!         │                                   ▼                                  │
//!         │                             ┌─────────┐                              │
//!         └──────────── logout ──────── │ Invalid │ ◀──────── 401 ───────────────┘
//!                                       └─────────┘
//! ```
//!
//! `Invalid` is transient: it is published so observers can tell a rejected
//! credential from a plain logout, then the session is logged out.
//!
//! ## Submodules
//!
//! - [`auth_ops`]: login, register and logout
//! - [`hydration`]: startup reconciliation and the 401 handler

pub mod auth_ops;
pub mod hydration;


use std::{fmt, sync::Arc, time::Duration};

use log::warn;
use parking_lot::Mutex;
use tokio::sync::watch;

pub use hydration::LogoutOnUnauthorized;

use crate::{credentials::CredentialStore, models::User, transport::ApiClient};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const USER_PATH: &str = "/auth/user";

/// Observable lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No credential
    Anonymous,
    /// Credential present, user not resolved yet
    PendingHydration,
    /// Credential and user present
    Authenticated,
    /// Credential was rejected by the server; about to become `Anonymous`
    Invalid,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Anonymous => "anonymous",
            SessionState::PendingHydration => "pending hydration",
            SessionState::Authenticated => "authenticated",
            SessionState::Invalid => "invalid",
        }
    }

    /// True once hydration has finished one way or the other.
    pub fn is_settled(&self) -> bool {
        matches!(self, SessionState::Anonymous | SessionState::Authenticated)
    }
}

/// Snapshot of the credential and identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    /// A cached credential is enough; the user may still be resolving.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Owns the current [`Session`] and keeps it in sync with the credential
/// store.
///
/// Cloning is cheap and every clone observes the same session.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInner>,
}

pub(crate) struct SessionInner {
    pub(crate) api: ApiClient,
    pub(crate) session: Mutex<Session>,
    pub(crate) state: watch::Sender<SessionState>,
    pub(crate) hydration_timeout: Duration,
}

impl SessionManager {
    /// Creates an anonymous manager without touching storage.
    ///
    /// Use [`SessionManager::start`] to restore a persisted credential.
    pub fn new(api: ApiClient, hydration_timeout: Duration) -> Self {
        let (state, _) = watch::channel(SessionState::Anonymous);
        Self {
            inner: Arc::new(SessionInner {
                api,
                session: Mutex::new(Session::default()),
                state,
                hydration_timeout,
            }),
        }
    }

    /// The client this session authenticates.
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Copy of the current credential and identity.
    pub fn session(&self) -> Session {
        self.inner.session.lock().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.session.lock().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.session.lock().user.clone()
    }

    /// True whenever a credential is cached, including while hydration is
    /// still in flight. Check [`SessionManager::state`] to require a
    /// resolved user.
    pub fn is_authenticated(&self) -> bool {
        self.inner.session.lock().is_authenticated()
    }

    pub fn state(&self) -> SessionState {
        *self.inner.state.borrow()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Waits until the session is `Anonymous` or `Authenticated`.
    ///
    /// Returns immediately when no hydration is in flight. Hydration is
    /// bounded by the configured timeout, so this always resolves.
    pub async fn wait_for_hydration(&self) -> SessionState {
        let mut receiver = self.inner.state.subscribe();
        let settled = receiver.wait_for(SessionState::is_settled).await;
        match settled {
            Ok(state) => *state,
            Err(_) => self.state(),
        }
    }
}

impl SessionInner {
    pub(crate) fn credentials(&self) -> &Arc<dyn CredentialStore> {
        self.api.credentials()
    }

    /// Publishes `next` if it differs from the current state.
    pub(crate) fn publish(&self, next: SessionState) {
        self.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    /// Clears the session and the persisted credential. The caller holds
    /// the session lock.
    pub(crate) fn clear_locked(&self, session: &mut Session) {
        session.user = None;
        session.token = None;
        if let Err(e) = self.credentials().clear() {
            warn!("Failed to remove persisted credential: {e}");
        }
        self.publish(SessionState::Anonymous);
    }
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &self.state())
            .field("api_root", &self.inner.api.api_root())
            .finish()
    }
}
