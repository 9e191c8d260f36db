//! Startup reconciliation of a cached credential with the server.

use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use log::{debug, info, warn};
use tokio::{task::JoinHandle, time::timeout};

use super::{
    SessionInner, SessionManager, SessionState, LOGIN_PATH, REGISTER_PATH, USER_PATH,
};
use crate::{
    error::{Result, SoireeError},
    models::User,
    transport::{ApiClient, UnauthorizedContext, UnauthorizedHandler},
};

impl SessionManager {
    /// Creates a manager and restores the persisted credential, if any.
    ///
    /// With a stored credential the manager starts in
    /// [`SessionState::PendingHydration`] and resolves the user in the
    /// background. Use [`SessionManager::wait_for_hydration`] to block on
    /// the outcome.
    ///
    /// # Errors
    ///
    /// Returns `SoireeError::Storage` if the credential cannot be read.
    pub async fn start(api: ApiClient, hydration_timeout: Duration) -> Result<Self> {
        let manager = Self::new(api, hydration_timeout);
        manager.restore()?;
        Ok(manager)
    }

    /// Loads the persisted credential and starts hydrating it.
    ///
    /// Returns the hydration task, or `None` when nothing was stored.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn restore(&self) -> Result<Option<JoinHandle<()>>> {
        let Some(token) = self.inner.credentials().load()? else {
            debug!("No persisted credential");
            return Ok(None);
        };

        {
            let mut session = self.inner.session.lock();
            session.token = Some(token.clone());
            session.user = None;
            self.inner.publish(SessionState::PendingHydration);
        }

        Ok(Some(self.spawn_hydration(token)))
    }

    pub(crate) fn spawn_hydration(&self, token: String) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { hydrate(inner, token).await })
    }

    /// A handler for [`ApiClient::set_unauthorized_handler`] that logs this
    /// session out when the server rejects its current credential.
    pub fn unauthorized_handler(&self) -> Arc<dyn UnauthorizedHandler> {
        Arc::new(LogoutOnUnauthorized {
            session: Arc::downgrade(&self.inner),
        })
    }
}

/// Resolves `token` to a user and applies the outcome if `token` is still
/// the session's credential.
async fn hydrate(inner: Arc<SessionInner>, token: String) {
    let limit = inner.hydration_timeout;
    let result = match timeout(limit, inner.api.get_json::<User>(USER_PATH, &[])).await {
        Ok(result) => result,
        Err(_) => Err(SoireeError::HydrationTimeout { limit }),
    };

    match result {
        Ok(user) => {
            let mut session = inner.session.lock();
            if session.token.as_deref() != Some(token.as_str()) {
                debug!("Discarding hydration result for a replaced credential");
                return;
            }
            info!("Restored session for {}", user.display_name());
            session.user = Some(user);
            inner.publish(SessionState::Authenticated);
        }
        Err(e) => {
            warn!("Persisted credential could not be verified: {e}");
            inner.invalidate(&token);
        }
    }
}

impl SessionInner {
    /// Marks `token` as rejected and logs out, unless the session has
    /// moved on to a different credential.
    pub(crate) fn invalidate(&self, token: &str) {
        let mut session = self.session.lock();
        if session.token.as_deref() != Some(token) {
            return;
        }
        self.publish(SessionState::Invalid);
        self.clear_locked(&mut session);
    }
}

/// Logs the session out when a request carrying its current token gets a
/// 401. Rejections from the login and register endpoints are ignored since
/// they describe the submitted password, not the cached credential.
pub struct LogoutOnUnauthorized {
    session: Weak<SessionInner>,
}

impl UnauthorizedHandler for LogoutOnUnauthorized {
    fn on_unauthorized(&self, context: &UnauthorizedContext<'_>) {
        if context.path == LOGIN_PATH || context.path == REGISTER_PATH {
            return;
        }
        let (Some(inner), Some(token)) = (self.session.upgrade(), context.token) else {
            return;
        };
        debug!("{} rejected the cached credential", context.path);
        inner.invalidate(token);
    }
}
