//! # Site Context
//!
//! Every CLI invocation starts from a site root: the directory holding the
//! content document and the `.folio/` state directory.
//!
//! ## Resolution
//!
//! 1. The root is `--root` when given (relative paths are taken from the
//!    current directory), the current directory otherwise.
//! 2. Configuration is read from `<root>/.folio/folio.toml` plus environment
//!    overrides (see [`crate::config`]).
//! 3. Session state lives in `<root>/.folio/`, unless `FOLIO_SESSION_DIR`
//!    points elsewhere.
//!
//! ## Between Invocations
//!
//! A browser session keeps its working copy in memory. A CLI session lasts a
//! single process, so [`FolioContext::persist`] writes the session flag and,
//! when there are unsaved edits, the working copy to the session directory;
//! [`initialize`] picks both up again. A clean or logged-out session leaves
//! no draft behind.

use crate::api::FolioApi;
use crate::config::FolioConfig;
use crate::contact::SpoolSender;
use crate::error::Result;
use crate::gateway::PersistenceGateway;
use crate::session::{SessionGate, SessionFile};
use crate::store::draft::DraftFile;
use crate::store::fs_backend::FsBackend;
use crate::workflow::EditorWorkflow;
use std::path::{Path, PathBuf};

pub const STATE_DIR: &str = ".folio";
pub const SESSION_DIR_ENV: &str = "FOLIO_SESSION_DIR";

pub struct FolioContext {
    pub api: FolioApi<FsBackend>,
    pub config: FolioConfig,
    pub root: PathBuf,
    draft: DraftFile,
    session_file: SessionFile,
}

/// Resolves the site root and loads configuration, session and draft.
pub fn initialize(cwd: &Path, root_override: Option<PathBuf>) -> Result<FolioContext> {
    let root = match root_override {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };
    let state_dir = root.join(STATE_DIR);
    let session_dir = std::env::var(SESSION_DIR_ENV)
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(|| state_dir.clone());

    let config = FolioConfig::load(&state_dir)?;
    open(root, &session_dir, config)
}

/// Builds a context from already-resolved parts.
pub fn open(root: PathBuf, session_dir: &Path, config: FolioConfig) -> Result<FolioContext> {
    let environment = config.environment()?;
    let backend = FsBackend::new(config.content_file(&root));
    let gateway = PersistenceGateway::new(backend, environment);
    let baseline = gateway.load()?;

    let session_file = SessionFile::in_dir(session_dir);
    let draft = DraftFile::in_dir(session_dir);
    let session = session_file.load()?;

    let working = if session.authenticated {
        draft.load()?
    } else {
        None
    };
    let workflow = match working {
        Some(working) => {
            tracing::debug!(path = %draft.path().display(), "resuming draft");
            EditorWorkflow::resume(gateway, baseline, working, config.notice_ttl())
        }
        None => EditorWorkflow::with_document(gateway, baseline, config.notice_ttl()),
    };

    let gate = SessionGate::new(config.admin_password.clone(), session);
    tracing::debug!(
        root = %root.display(),
        mode = %environment,
        state = %workflow.state(),
        "context ready"
    );

    Ok(FolioContext {
        api: FolioApi::new(workflow, gate),
        config,
        root,
        draft,
        session_file,
    })
}

impl FolioContext {
    /// Writes session state and the working copy for the next invocation.
    pub fn persist(&self) -> Result<()> {
        let gate = self.api.gate();
        self.session_file.save(gate.state())?;

        let workflow = self.api.workflow();
        if gate.is_open() && workflow.is_dirty() {
            self.draft.save(workflow.document())
        } else {
            self.draft.clear()
        }
    }

    pub fn sender(&self) -> SpoolSender {
        SpoolSender::new(self.config.outbox(&self.root))
    }
}
