//! Persisted auth session.
//!
//! Three keys survive restarts: `user`, `token` and `refreshToken`, each
//! stored as JSON. [`Session::rehydrate`] reads them once at startup.

use crate::error::SessionError;
use crate::models::{AuthResponse, User};
use crate::services::BearerToken;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// A persisted session entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// The signed-in user
    User,
    /// Bearer token
    Token,
    /// Refresh token
    RefreshToken,
}

impl SessionKey {
    /// Every key, in storage order
    pub const ALL: [Self; 3] = [Self::User, Self::Token, Self::RefreshToken];

    /// Storage name of the key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Token => "token",
            Self::RefreshToken => "refreshToken",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw key/value persistence for the session.
///
/// Values are JSON documents; absent keys read as `None`.
pub trait SessionStore: Send + Sync {
    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the backing storage cannot be read.
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError>;

    /// Write a value
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the backing storage cannot be written.
    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError>;

    /// Delete a value; deleting an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the backing storage cannot be written.
    fn remove(&self, key: SessionKey) -> Result<(), SessionError>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Store session files under `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the session files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: SessionKey) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        match std::fs::remove_file(self.path(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Process-local session, lost on exit.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    values: Mutex<HashMap<SessionKey, String>>,
}

impl InMemorySessionStore {
    /// An empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(&key).cloned())
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(&key);
        Ok(())
    }
}

/// Typed access to the persisted auth session.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    /// Wrap a raw store
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// A session that is never persisted
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySessionStore::new()))
    }

    fn load<T: DeserializeOwned>(&self, key: SessionKey) -> Result<Option<T>, SessionError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|_| SessionError::Corrupt { key: key.as_str() })
    }

    fn save<T: Serialize + ?Sized>(&self, key: SessionKey, value: &T) -> Result<(), SessionError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// The stored user
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Corrupt`] if the stored user does not decode.
    pub fn load_user(&self) -> Result<Option<User>, SessionError> {
        self.load(SessionKey::User)
    }

    /// The stored bearer token
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Corrupt`] if the stored token does not decode.
    pub fn load_token(&self) -> Result<Option<String>, SessionError> {
        self.load(SessionKey::Token)
    }

    /// Persist a fresh login or signup
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if any key cannot be written.
    pub fn save_auth(&self, auth: &AuthResponse) -> Result<(), SessionError> {
        self.save(SessionKey::User, &auth.user)?;
        self.save(SessionKey::Token, &auth.token)?;
        self.save(SessionKey::RefreshToken, &auth.refresh_token)
    }

    /// Merge `updated` into the stored user and persist the result.
    ///
    /// Returns the merged user.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the user cannot be read or written.
    pub fn merge_user(&self, updated: User) -> Result<User, SessionError> {
        let merged = match self.load_user()? {
            Some(stored) => stored.merged_with(updated),
            None => updated,
        };
        self.save(SessionKey::User, &merged)?;
        Ok(merged)
    }

    /// Forget the session
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if any key cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        SessionKey::ALL
            .into_iter()
            .try_for_each(|key| self.store.remove(key))
    }

    /// Restore the signed-in user at startup.
    ///
    /// Authorizes `token` with the stored bearer token. A corrupt session is
    /// cleared and treated as logged out.
    pub fn rehydrate(&self, token: &BearerToken) -> Option<User> {
        let restored = self
            .load_user()
            .and_then(|user| Ok((user, self.load_token()?)));

        match restored {
            Ok((user, stored_token)) => {
                if let Some(stored_token) = stored_token {
                    token.set(stored_token);
                }
                if let Some(user) = &user {
                    tracing::info!(user_id = user.id, "Restored session");
                }
                user
            },
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session");
                if let Err(e) = self.clear() {
                    tracing::warn!(error = %e, "Failed to clear session");
                }
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user() -> User {
        User {
            id: 3,
            name: "Lin".into(),
            second_name: "Park".into(),
            third_name: None,
            email: "lin@example.com".into(),
            phone_number: "+1".into(),
            payment_info: None,
            role_id: 2,
            role: Role {
                id: 2,
                kind: "user".into(),
                description: "Customer".into(),
            },
            token: None,
            refresh_token: None,
        }
    }

    fn auth() -> AuthResponse {
        AuthResponse {
            user: user(),
            token: "tok".into(),
            refresh_token: "ref".into(),
        }
    }

    #[test]
    fn test_file_store_layout() -> Result<(), SessionError> {
        let dir = tempfile::tempdir()?;
        let store = FileSessionStore::new(dir.path().join("session"));
        let session = Session::new(Arc::new(store.clone()));

        assert_eq!(session.load_user()?, None);
        session.save_auth(&auth())?;

        assert_eq!(store.get(SessionKey::Token)?.as_deref(), Some("\"tok\""));
        assert!(store.dir().join("refreshToken.json").exists());
        assert_eq!(session.load_user()?, Some(user()));

        session.clear()?;
        assert_eq!(store.get(SessionKey::User)?, None);
        session.clear()?;
        Ok(())
    }

    #[test]
    fn test_rehydrate_sets_token() -> Result<(), SessionError> {
        let session = Session::in_memory();
        session.save_auth(&auth())?;

        let token = BearerToken::default();
        assert_eq!(session.rehydrate(&token), Some(user()));
        assert_eq!(token.get().as_deref(), Some("tok"));
        Ok(())
    }

    #[test]
    fn test_corrupt_user_is_logged_out() -> Result<(), SessionError> {
        let store = Arc::new(InMemorySessionStore::new());
        store.set(SessionKey::User, "{not json")?;
        store.set(SessionKey::Token, "\"tok\"")?;
        let session = Session::new(store.clone());

        let token = BearerToken::default();
        assert_eq!(session.rehydrate(&token), None);
        assert_eq!(token.get(), None);
        assert_eq!(store.get(SessionKey::Token)?, None, "session cleared");
        Ok(())
    }

    #[test]
    fn test_merge_user_keeps_stored_token() -> Result<(), SessionError> {
        let session = Session::in_memory();
        let mut stored = user();
        stored.token = Some("embedded".into());
        session.save(SessionKey::User, &stored)?;

        let mut updated = user();
        updated.phone_number = "+2".into();
        let merged = session.merge_user(updated)?;

        assert_eq!(merged.phone_number, "+2");
        assert_eq!(merged.token.as_deref(), Some("embedded"));
        assert_eq!(session.load_user()?, Some(merged));
        Ok(())
    }
}
