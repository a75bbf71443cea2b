//! Persistent token storage. The web shell keeps the access token under a
//! single browser-storage key; native shells keep it in a file under a data
//! directory. Both reduce to the same contract: one string value, absent when
//! unauthenticated.

use crate::errors::StorageError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File name holding the persisted access token inside the data directory.
const TOKEN_FILE: &str = "token";

/// Synchronous single-value store for the access token.
pub trait TokenStore: Send + Sync {
    /// Returns the persisted token, or `None` when unauthenticated.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persists the token, replacing any previous value.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Removes the persisted token. Removing an absent token is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory store for tests and shells that do not persist sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}

/// File-backed store keeping the token in `<data_dir>/token`.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(TOKEN_FILE),
        }
    }

    /// Path of the token file, mainly for diagnostics.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::new(format!(
                "Failed to read {}: {err}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                StorageError::new(format!("Failed to create {}: {err}", parent.display()))
            })?;
        }

        fs::write(&self.path, token).map_err(|err| {
            StorageError::new(format!("Failed to write {}: {err}", self.path.display()))
        })?;

        // The token file grants account access; keep it owner-readable only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|err| {
                StorageError::new(format!(
                    "Failed to restrict {}: {err}",
                    self.path.display()
                ))
            })?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::new(format!(
                "Failed to remove {}: {err}",
                self.path.display()
            ))),
        }
    }
}
