//! Error types for Folio.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("No project with id '{0}'")]
    UnknownProject(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FolioError {
    /// Short machine-readable code, used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            FolioError::MissingField(_) => "missing_field",
            FolioError::UnknownProject(_) => "unknown_project",
            FolioError::Transport(_) => "transport",
            FolioError::Config(_) => "config",
            FolioError::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
