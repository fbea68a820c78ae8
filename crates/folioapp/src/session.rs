//! # Session Gate
//!
//! A single shared credential guards the editor. A successful match sets the
//! session flag; logout clears it. The flag never expires on its own.
//!
//! The gate is plain state handed to whoever needs it. [`SessionFile`] keeps
//! that state between CLI invocations, the way a browser tab keeps its
//! session storage.

use crate::error::{FolioError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILENAME: &str = "session.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub authenticated: bool,
    pub since: Option<DateTime<Utc>>,
}

pub struct SessionGate {
    secret: String,
    state: SessionState,
}

impl SessionGate {
    pub fn new(secret: impl Into<String>, state: SessionState) -> Self {
        Self {
            secret: secret.into(),
            state,
        }
    }

    /// Opens the session if `credential` matches the configured secret.
    pub fn login(&mut self, credential: &str) -> bool {
        if self.secret.is_empty() || credential != self.secret {
            tracing::warn!("login rejected");
            return false;
        }
        if !self.state.authenticated {
            self.state = SessionState {
                authenticated: true,
                since: Some(Utc::now()),
            };
        }
        tracing::info!("session opened");
        true
    }

    pub fn logout(&mut self) {
        self.state = SessionState::default();
        tracing::info!("session closed");
    }

    pub fn is_open(&self) -> bool {
        self.state.authenticated
    }

    pub fn check(&self) -> Result<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(FolioError::Unauthorized)
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

/// Session state persisted in the session directory.
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn in_dir(session_dir: &Path) -> Self {
        Self {
            path: session_dir.join(SESSION_FILENAME),
        }
    }

    pub fn load(&self) -> Result<SessionState> {
        if !self.path.exists() {
            return Ok(SessionState::default());
        }
        let content = fs::read_to_string(&self.path).map_err(FolioError::Io)?;
        let state = serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(state)
    }

    pub fn save(&self, state: &SessionState) -> Result<()> {
        if !state.authenticated {
            return self.clear();
        }
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(FolioError::Io)?;
        }
        let content = serde_json::to_string_pretty(state).map_err(FolioError::Serialization)?;
        fs::write(&self.path, content).map_err(FolioError::Io)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(FolioError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn wrong_credential_keeps_gate_closed() {
        let mut gate = SessionGate::new("s3cret", SessionState::default());
        assert!(!gate.login("guess"));
        assert!(!gate.is_open());
        assert!(matches!(gate.check(), Err(FolioError::Unauthorized)));
    }

    #[test]
    fn login_and_logout() {
        let mut gate = SessionGate::new("s3cret", SessionState::default());
        assert!(gate.login("s3cret"));
        assert!(gate.check().is_ok());
        assert!(gate.state().since.is_some());

        gate.logout();
        assert!(!gate.is_open());
        assert_eq!(gate.state(), &SessionState::default());
    }

    #[test]
    fn empty_secret_never_matches() {
        let mut gate = SessionGate::new("", SessionState::default());
        assert!(!gate.login(""));
    }

    #[test]
    fn session_file_persists_open_sessions_only() {
        let temp = tempdir().unwrap();
        let file = SessionFile::in_dir(temp.path());
        assert!(!file.load().unwrap().authenticated);

        let mut gate = SessionGate::new("pw", file.load().unwrap());
        gate.login("pw");
        file.save(gate.state()).unwrap();
        assert!(file.load().unwrap().authenticated);

        gate.logout();
        file.save(gate.state()).unwrap();
        assert!(!temp.path().join(SESSION_FILENAME).exists());
    }
}
