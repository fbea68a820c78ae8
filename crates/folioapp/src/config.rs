//! # Configuration
//!
//! Folio configuration is a [`confique`] struct loaded in layers.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `FOLIO_MODE`, `FOLIO_CONTENT`, etc.
//! 2. **Site config**: `<site root>/.folio/folio.toml`.
//! 3. **Compiled defaults**: `#[config(default = ...)]` below.
//!
//! ## Available Settings
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | `mode` | `FOLIO_MODE` | `production` |
//! | `content_path` | `FOLIO_CONTENT` | `data/portfolio.json` |
//! | `admin_password` | `FOLIO_ADMIN_PASSWORD` | `admin123` |
//! | `notice_seconds` | `FOLIO_NOTICE_SECONDS` | `3` |
//! | `mail_from` | `FOLIO_MAIL_FROM` | `noreply@localhost` |
//! | `mail_to` | `FOLIO_MAIL_TO` | `owner@localhost` |
//! | `outbox_dir` | `FOLIO_OUTBOX` | `.folio/outbox` |
//!
//! Relative paths are resolved against the site root.

use crate::contact::MailSettings;
use crate::error::{FolioError, Result};
use crate::gateway::Environment;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "folio.toml";

/// Configuration for folio, stored in `folio.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Host environment. Only `development` allows saving.
    #[config(env = "FOLIO_MODE", default = "production")]
    pub mode: String,

    /// Content document, relative to the site root.
    #[config(env = "FOLIO_CONTENT", default = "data/portfolio.json")]
    pub content_path: String,

    /// Shared secret for the editor session.
    #[config(env = "FOLIO_ADMIN_PASSWORD", default = "admin123")]
    pub admin_password: String,

    /// How long status notices stay on display.
    #[config(env = "FOLIO_NOTICE_SECONDS", default = 3)]
    pub notice_seconds: u64,

    #[config(env = "FOLIO_MAIL_FROM", default = "noreply@localhost")]
    pub mail_from: String,

    #[config(env = "FOLIO_MAIL_TO", default = "owner@localhost")]
    pub mail_to: String,

    /// Where contact messages are spooled.
    #[config(env = "FOLIO_OUTBOX", default = ".folio/outbox")]
    pub outbox_dir: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            mode: "production".to_string(),
            content_path: "data/portfolio.json".to_string(),
            admin_password: "admin123".to_string(),
            notice_seconds: 3,
            mail_from: "noreply@localhost".to_string(),
            mail_to: "owner@localhost".to_string(),
            outbox_dir: ".folio/outbox".to_string(),
        }
    }
}

impl FolioConfig {
    /// Loads environment overrides on top of `config_dir/folio.toml`.
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(config_dir.join(CONFIG_FILENAME))
            .load()
            .map_err(|e| FolioError::Config(e.to_string()))
    }

    /// Loads a single file without looking at the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::builder()
            .file(path)
            .load()
            .map_err(|e| FolioError::Config(e.to_string()))
    }

    pub fn environment(&self) -> Result<Environment> {
        self.mode.parse().map_err(FolioError::Config)
    }

    pub fn notice_ttl(&self) -> chrono::Duration {
        let secs = i64::try_from(self.notice_seconds).unwrap_or(i64::MAX);
        chrono::Duration::seconds(secs)
    }

    pub fn content_file(&self, root: &Path) -> PathBuf {
        root.join(&self.content_path)
    }

    pub fn outbox(&self, root: &Path) -> PathBuf {
        root.join(&self.outbox_dir)
    }

    pub fn mail_settings(&self) -> MailSettings {
        MailSettings {
            from: self.mail_from.clone(),
            to: self.mail_to.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.environment().unwrap(), Environment::Production);
        assert_eq!(config.notice_ttl(), chrono::Duration::seconds(3));
        assert_eq!(
            config.content_file(Path::new("/site")),
            PathBuf::from("/site/data/portfolio.json")
        );
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = FolioConfig::from_file(&temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        let written = FolioConfig {
            mode: "development".to_string(),
            notice_seconds: 10,
            ..Default::default()
        };
        fs::write(&path, toml::to_string(&written).unwrap()).unwrap();

        let config = FolioConfig::from_file(&path).unwrap();
        assert_eq!(config.environment().unwrap(), Environment::Development);
        assert_eq!(config.notice_ttl(), chrono::Duration::seconds(10));
        assert_eq!(config.admin_password, "admin123");
    }

    #[test]
    fn test_partial_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "mail_to = \"me@example.com\"\n").unwrap();

        let config = FolioConfig::from_file(&path).unwrap();
        assert_eq!(config.mail_settings().to, "me@example.com");
        assert_eq!(config.mail_settings().from, "noreply@localhost");
    }

    #[test]
    fn test_unknown_mode_is_config_error() {
        let config = FolioConfig {
            mode: "staging".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.environment(), Err(FolioError::Config(_))));
    }
}
