//! # Persistence Gateway
//!
//! The only way content reaches the sink. Saving is allowed in the
//! development environment only; anywhere else the request is refused before
//! the backend is touched. Reads are always allowed.
//!
//! Backend failures are reported as [`FolioError::Transport`] with the
//! underlying reason. The gateway never touches the document store; deciding
//! what a successful save means for the baseline is the workflow's job.

use crate::error::{FolioError, Result};
use crate::model::ContentDocument;
use crate::store::backend::ContentBackend;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Host environment, deciding whether content writes are permitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_editable(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

pub struct PersistenceGateway<B: ContentBackend> {
    backend: B,
    environment: Environment,
}

impl<B: ContentBackend> PersistenceGateway<B> {
    pub fn new(backend: B, environment: Environment) -> Self {
        Self {
            backend,
            environment,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The persisted document, or the default one if nothing was written yet.
    pub fn load(&self) -> Result<ContentDocument> {
        Ok(self.backend.read()?.unwrap_or_default())
    }

    /// Writes the whole document to the sink.
    pub fn save(&self, doc: &ContentDocument) -> Result<()> {
        if !self.environment.is_editable() {
            tracing::warn!(environment = %self.environment, "save refused");
            return Err(FolioError::NotPermitted(format!(
                "saving only works in development mode (current mode: {})",
                self.environment
            )));
        }

        tracing::debug!(location = %self.backend.location(), "writing content");
        self.backend.write(doc).map_err(|e| {
            let reason = match e {
                FolioError::Store(reason) => reason,
                other => other.to_string(),
            };
            FolioError::Transport(reason)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn doc() -> ContentDocument {
        ContentDocument {
            name: "Alice".into(),
            ..Default::default()
        }
    }

    #[test]
    fn refuses_outside_development_without_io() {
        let gateway = PersistenceGateway::new(MemBackend::new(), Environment::Production);
        let err = gateway.save(&doc()).unwrap_err();
        assert!(matches!(err, FolioError::NotPermitted(_)));
        assert_eq!(gateway.backend().write_attempts(), 0);
    }

    #[test]
    fn writes_full_document() {
        let gateway = PersistenceGateway::new(MemBackend::new(), Environment::Development);
        gateway.save(&doc()).unwrap();
        assert_eq!(gateway.load().unwrap(), doc());
    }

    #[test]
    fn backend_failure_becomes_transport_error() {
        let backend = MemBackend::new();
        backend.set_failure(Some("disk full"));
        let gateway = PersistenceGateway::new(backend, Environment::Development);

        match gateway.save(&doc()).unwrap_err() {
            FolioError::Transport(reason) => assert_eq!(reason, "disk full"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_defaults_when_empty() {
        let gateway = PersistenceGateway::new(MemBackend::new(), Environment::Production);
        assert_eq!(gateway.load().unwrap(), ContentDocument::default());
    }

    #[test]
    fn parses_environment_names() {
        assert_eq!(
            "Development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }
}
