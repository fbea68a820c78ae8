use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    /// Save attempted while the host is not in an editable environment.
    #[error("Not permitted: {0}")]
    NotPermitted(String),

    /// The content sink rejected or failed the write.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not logged in: run `folio login` first")]
    Unauthorized,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
