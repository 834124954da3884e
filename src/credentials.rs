//! Persistent session credential storage.
//!
//! The booking service issues an opaque bearer token on login/registration.
//! This module owns that token (plus the cached user record) behind the
//! [`CredentialStore`] port so the API client can read it on every request
//! and tests can substitute an in-memory store.
//!
//! The file store keeps `token` and `user` entries in a single JSON file at
//! `~/.vetdesk/credentials.json`. There is no expiry logic: a stale or
//! revoked token is only detected when the backend rejects a request.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::api::auth::User;
use crate::config::vetdesk_dir;

const CREDENTIALS_FILE: &str = "credentials.json";

/// An active session: the bearer token and the cached user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Opaque bearer token issued by the backend.
    pub token: String,
    /// User record cached at login; may be absent for older stores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Storage port for the session credential.
///
/// `read` returns `None` both when no credential was ever saved and when the
/// underlying store is unreadable; an unauthenticated request is the correct
/// behavior in either case, and the backend arbitrates from there.
pub trait CredentialStore: Send + Sync {
    /// Persist a credential, replacing any existing one.
    fn save(&self, credential: &Credential) -> io::Result<()>;
    /// Read the current credential, if any.
    fn read(&self) -> Option<Credential>;
    /// Remove the stored credential. Removing an absent credential is not
    /// an error.
    fn clear(&self) -> io::Result<()>;
}

/// File-backed credential store.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store at an explicit path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the default location (`~/.vetdesk/credentials.json`).
    pub fn default_location() -> io::Result<Self> {
        let dir = vetdesk_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine home directory")
        })?;
        Ok(Self::new(dir.join(CREDENTIALS_FILE)))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn save(&self, credential: &Credential) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(credential)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, contents)
    }

    fn read(&self) -> Option<Credential> {
        let contents = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory credential store for tests and embedding.
#[derive(Default)]
pub struct MemoryCredentialStore {
    credential: Mutex<Option<Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a store that already holds a token.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store
            .save(&Credential {
                token: token.to_string(),
                user: None,
            })
            .ok();
        store
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, credential: &Credential) -> io::Result<()> {
        let mut slot = self
            .credential
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "credential store poisoned"))?;
        *slot = Some(credential.clone());
        Ok(())
    }

    fn read(&self) -> Option<Credential> {
        self.credential.lock().ok()?.clone()
    }

    fn clear(&self) -> io::Result<()> {
        let mut slot = self
            .credential
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "credential store poisoned"))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_credential() -> Credential {
        Credential {
            token: "17|b9Qx3vCjW".to_string(),
            user: Some(User {
                id: 4,
                name: "Dr. Reyes".to_string(),
                email: "reyes@clinic.test".to_string(),
                role: Some("admin".to_string()),
            }),
        }
    }

    #[test]
    fn test_file_store_save_read_clear() {
        let dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));

        assert!(store.read().is_none());

        store.save(&sample_credential()).unwrap();
        let loaded = store.read().expect("credential should persist");
        assert_eq!(loaded.token, "17|b9Qx3vCjW");
        assert_eq!(loaded.user.unwrap().email, "reyes@clinic.test");

        store.clear().unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn test_file_store_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_overwrites_existing_credential() {
        let dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));

        store.save(&sample_credential()).unwrap();
        store
            .save(&Credential {
                token: "18|newToken".to_string(),
                user: None,
            })
            .unwrap();

        let loaded = store.read().unwrap();
        assert_eq!(loaded.token, "18|newToken");
        assert!(loaded.user.is_none());
    }

    #[test]
    fn test_file_store_corrupt_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "not json").unwrap();

        let store = FileCredentialStore::new(path);
        assert!(store.read().is_none());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert!(store.read().is_none());

        store.save(&sample_credential()).unwrap();
        assert_eq!(store.read().unwrap().token, "17|b9Qx3vCjW");

        store.clear().unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn test_credential_without_user_omits_field() {
        let credential = Credential {
            token: "tok".to_string(),
            user: None,
        };
        let json = serde_json::to_string(&credential).unwrap();
        assert!(!json.contains("user"));

        let parsed: Credential = serde_json::from_str(r#"{"token":"tok"}"#).unwrap();
        assert!(parsed.user.is_none());
    }
}
