//! Builder for creating and configuring [`Soiree`] contexts.

use std::{path::Path, sync::Arc, time::Duration};

use log::debug;

use super::Soiree;
use crate::{
    config::ClientConfig,
    credentials::{CredentialStore, FileCredentialStore},
    error::Result,
    services::{EventService, MusicService},
    session::SessionManager,
    transport::{ApiClient, HttpTransport, ReqwestTransport},
    wizard::WizardStore,
};

/// Per-request timeout of the default HTTP transport.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for creating and configuring [`Soiree`] instances.
#[derive(Clone)]
pub struct SoireeBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    credentials: Option<Arc<dyn CredentialStore>>,
    logout_on_unauthorized: bool,
}

impl SoireeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            transport: None,
            credentials: None,
            logout_on_unauthorized: false,
        }
    }

    /// Replaces the whole configuration, e.g. with
    /// [`ClientConfig::from_env`].
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn with_path_prefix(mut self, path_prefix: impl Into<String>) -> Self {
        self.config.path_prefix = path_prefix.into();
        self
    }

    /// Sets a custom credential file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/soiree/token` or `~/.local/share/soiree/token`
    pub fn with_credential_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config.credential_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    pub fn with_hydration_timeout(mut self, timeout: Duration) -> Self {
        self.config.hydration_timeout = timeout;
        self
    }

    /// Uses `transport` instead of the default reqwest client.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Uses `credentials` instead of the credential file.
    pub fn with_credential_store(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Log the session out whenever the server rejects its credential with
    /// 401. Off by default: 401s are then only reported to the caller.
    pub fn logout_on_unauthorized(mut self, enabled: bool) -> Self {
        self.logout_on_unauthorized = enabled;
        self
    }

    /// Builds the context and starts restoring the persisted session.
    ///
    /// Returns as soon as hydration has been started; the session may still
    /// be [`PendingHydration`](crate::SessionState::PendingHydration).
    ///
    /// # Errors
    ///
    /// Returns `SoireeError::XdgDirectory` if the default credential path
    /// cannot be determined
    /// Returns `SoireeError::Transport` if the HTTP client cannot be built
    /// Returns `SoireeError::Storage` if the persisted credential cannot be
    /// read
    pub async fn build(self) -> Result<Soiree> {
        let Self {
            config,
            transport,
            credentials,
            logout_on_unauthorized,
        } = self;

        let credentials: Arc<dyn CredentialStore> = match credentials {
            Some(credentials) => credentials,
            None => {
                let path = match &config.credential_path {
                    Some(path) => path.clone(),
                    None => FileCredentialStore::default_path()?,
                };
                debug!("Using credential file {}", path.display());
                Arc::new(FileCredentialStore::new(path))
            }
        };

        let transport: Arc<dyn HttpTransport> = match transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(DEFAULT_REQUEST_TIMEOUT)?),
        };

        let api = ApiClient::new(config.api_root(), transport, credentials);
        let session = SessionManager::new(api.clone(), config.hydration_timeout);
        if logout_on_unauthorized {
            api.set_unauthorized_handler(session.unauthorized_handler());
        }
        session.restore()?;

        Ok(Soiree {
            events: EventService::new(api.clone()),
            music: MusicService::new(api.clone()),
            wizard: WizardStore::new(),
            session,
            api,
            config,
        })
    }
}

impl Default for SoireeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
