//! Admin session guard.
//!
//! The session is the pair `token`/`role` persisted in a small JSON file.
//! Every command except `login` runs behind [`SessionGuard::require`].

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::FrameworkError;
use crate::clients::AuthClient;
use crate::domain::ROLE_ADMIN;
use crate::notice::UserFacing;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Not logged in. Run `login` first.")]
    NotAuthenticated,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Only administrators can sign in here (role: {0})")]
    NotAdmin(String),
    #[error("Session storage failed: {0}")]
    Storage(String),
    #[error(transparent)]
    Service(#[from] FrameworkError),
}

impl UserFacing for SessionError {
    fn user_message(&self) -> Option<String> {
        match self {
            SessionError::Service(e) => e.user_message(),
            local => Some(local.to_string()),
        }
    }
}

/// File-backed session storage.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing file means no session. A file that no longer parses is
    /// treated the same way.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(session) => Ok(Some(session)),
                Err(e) => {
                    warn!(error = %e, path = %self.path.display(), "Ignoring unreadable session file");
                    Ok(None)
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let text = serde_json::to_string_pretty(session).map_err(|e| SessionError::Storage(e.to_string()))?;
        fs::write(&self.path, text).map_err(|e| SessionError::Storage(e.to_string()))
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }
}

/// Gatekeeper for authenticated operations.
#[derive(Debug)]
pub struct SessionGuard {
    store: SessionStore,
    current: Option<Session>,
}

impl SessionGuard {
    pub fn from_store(store: SessionStore) -> Result<Self, SessionError> {
        let current = store.load()?;
        Ok(Self { store, current })
    }

    pub fn require(&self) -> Result<&Session, SessionError> {
        self.current.as_ref().ok_or(SessionError::NotAuthenticated)
    }

    /// Signs in as an administrator. Nothing is stored unless the backend
    /// accepts the credentials and reports the `admin` role.
    #[instrument(skip(self, auth, password))]
    pub async fn login(&mut self, auth: &AuthClient, email: &str, password: &str) -> Result<&Session, SessionError> {
        let reply = auth.login(email, password).await.map_err(|e| match e {
            FrameworkError::Rejected { status: 401, .. } => SessionError::InvalidCredentials,
            other => SessionError::Service(other),
        })?;

        if !reply.valid {
            return Err(SessionError::InvalidCredentials);
        }
        let role = reply.role.unwrap_or_default();
        if role != ROLE_ADMIN {
            warn!(role = %role, "Refusing non-admin login");
            return Err(SessionError::NotAdmin(role));
        }
        let token = reply
            .token
            .ok_or_else(|| SessionError::Service(FrameworkError::Decode("login reply has no token".into())))?;

        let session = Session { token, role };
        self.store.save(&session)?;
        info!("Admin session stored");
        Ok(&*self.current.insert(session))
    }

    /// Logs out on the backend, then forgets the local session. A failed
    /// backend call leaves the session in place.
    #[instrument(skip(self, auth))]
    pub async fn logout(&mut self, auth: &AuthClient) -> Result<(), SessionError> {
        self.require()?;
        auth.logout().await?;
        self.invalidate()
    }

    /// Drops the local session without contacting the backend.
    pub fn invalidate(&mut self) -> Result<(), SessionError> {
        debug!("Clearing session");
        self.store.clear()?;
        self.current = None;
        Ok(())
    }
}
