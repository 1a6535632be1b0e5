//! Session credential lifecycle and persistence.
//!
//! Exactly one `Session` exists per running client. It owns the bearer token
//! every request reads, and mirrors it into a `TokenStore` so the credential
//! survives restarts until an explicit logout clears it.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use anyhow::Context;

/// Fixed file name the credential persists under.
const TOKEN_FILE: &str = "token";

/// Persistent backing for the session credential.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> anyhow::Result<Option<String>>;
    fn save(&self, token: &str) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;
}

/// Token store backed by a small file in the user data directory.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform user data directory (`<data>/stockline/token`).
    pub fn in_user_data_dir() -> anyhow::Result<Self> {
        let base = dirs::data_dir()
            .context("failed to determine user data directory for the token store")?;
        Ok(Self::new(base.join("stockline").join(TOKEN_FILE)))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> anyhow::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed to read token at {:?}", self.path)),
        }
    }

    fn save(&self, token: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create token directory at {:?}", parent))?;
        }
        std::fs::write(&self.path, token)
            .with_context(|| format!("failed to write token at {:?}", self.path))
    }

    fn clear(&self) -> anyhow::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to remove token at {:?}", self.path))
            }
        }
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> anyhow::Result<Option<String>> {
        Ok(self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, token: &str) -> anyhow::Result<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// The client's authentication state.
///
/// The in-memory token is authoritative: store failures are logged and do
/// not block a login or logout, they only cost persistence across restarts.
pub struct Session {
    token: RwLock<Option<String>>,
    store: Box<dyn TokenStore>,
}

impl Session {
    /// Create a session, loading any persisted credential from `store`.
    ///
    /// A load failure starts the session unauthenticated rather than failing
    /// construction.
    pub fn new(store: impl TokenStore + 'static) -> Self {
        let token = match store.load() {
            Ok(token) => token,
            Err(err) => {
                tracing::error!(error = %err, "failed to load persisted credential");
                None
            }
        };
        Self {
            token: RwLock::new(token),
            store: Box::new(store),
        }
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Store or clear the credential, mirroring the change to the store.
    ///
    /// Passing `None` logs the session out: subsequent requests go out
    /// unauthenticated.
    pub fn set_token(&self, token: Option<&str>) {
        {
            let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
            *guard = token.map(str::to_string);
        }

        let result = match token {
            Some(token) => self.store.save(token),
            None => self.store.clear(),
        };
        if let Err(err) = result {
            tracing::error!(error = %err, "failed to persist credential change");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself.
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
