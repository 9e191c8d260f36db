//! Client configuration.
//!
//! The API address and path prefix are provided by the environment at start
//! time. Every value has a default so a bare `ClientConfig::default()` talks
//! to a local development server.

use std::{env, path::PathBuf, time::Duration};

use crate::error::{ConfigResultExt, Result};

/// Environment variable holding the API base address.
pub const ENV_API_URL: &str = "SOIREE_API_URL";
/// Environment variable holding the path prefix appended to the base address.
pub const ENV_API_PREFIX: &str = "SOIREE_API_PREFIX";
/// Environment variable overriding the credential file location.
pub const ENV_CREDENTIAL_FILE: &str = "SOIREE_CREDENTIAL_FILE";
/// Environment variable bounding session hydration, in seconds.
pub const ENV_HYDRATION_TIMEOUT: &str = "SOIREE_HYDRATION_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_HYDRATION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme, host and port of the API server
    pub base_url: String,

    /// Path prepended to every endpoint, e.g. `/api/v1`
    pub path_prefix: String,

    /// Credential file; `None` uses the XDG data directory
    pub credential_path: Option<PathBuf>,

    /// Upper bound on the startup `/auth/user` round-trip
    pub hydration_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            path_prefix: DEFAULT_API_PREFIX.to_string(),
            credential_path: None,
            hydration_timeout: DEFAULT_HYDRATION_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Reads the `SOIREE_*` variables, falling back to defaults for unset
    /// ones.
    ///
    /// # Errors
    ///
    /// Returns `SoireeError::Configuration` if the hydration timeout is not
    /// a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.base_url = url;
        }
        if let Some(prefix) = lookup(ENV_API_PREFIX) {
            config.path_prefix = prefix;
        }
        if let Some(path) = lookup(ENV_CREDENTIAL_FILE) {
            config.credential_path = Some(PathBuf::from(path));
        }
        if let Some(secs) = lookup(ENV_HYDRATION_TIMEOUT) {
            let secs: u64 = secs
                .trim()
                .parse()
                .config_context(format!("Invalid {ENV_HYDRATION_TIMEOUT}"))?;
            config.hydration_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Base address joined with the path prefix, without a trailing slash.
    pub fn api_root(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.path_prefix.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{prefix}")
        }
    }
}
