//! Persisted bearer credential.
//!
//! A single key is stored. The session manager writes it; the API client
//! reads it on every request.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use parking_lot::RwLock;

use crate::error::{Result, SoireeError};

/// Well-known storage key the credential lives under.
pub const CREDENTIAL_KEY: &str = "token";

/// Storage backend holding at most one credential.
pub trait CredentialStore: Send + Sync + fmt::Debug {
    /// Returns the stored credential, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Stores `token`, replacing any previous credential.
    fn save(&self, token: &str) -> Result<()>;

    /// Removes the stored credential. Removing a missing credential is not
    /// an error.
    fn clear(&self) -> Result<()>;
}

/// Credential kept in a file on disk, one token per file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$XDG_DATA_HOME/soiree/token`.
    pub fn with_default_path() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Returns the default credential path following the XDG Base Directory
    /// specification.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("soiree")
            .place_data_file(CREDENTIAL_KEY)
            .map_err(|e| SoireeError::XdgDirectory(e.to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| CREDENTIAL_KEY.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SoireeError::storage(&self.path, e)),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SoireeError::storage(parent, e))?;
        }

        // Write then rename so readers never observe a half-written token.
        let temp = self.temp_path();
        fs::write(&temp, token).map_err(|e| SoireeError::storage(&temp, e))?;
        restrict_permissions(&temp)?;
        fs::rename(&temp, &self.path).map_err(|e| SoireeError::storage(&self.path, e))?;

        debug!("Stored credential at {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed credential at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SoireeError::storage(&self.path, e)),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| SoireeError::storage(path, e))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

/// Process-local credential, used in tests and embedders that manage
/// persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.read().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write() = None;
        Ok(())
    }
}
