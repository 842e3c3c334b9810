//! Error types for the pathik runner

use thiserror::Error;

use pathik::{ConfigLoadError, PathikError};

/// Runner error type
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("{0}")]
    Pathik(#[from] PathikError),

    #[error("Search returned an invalid path: {0}")]
    InvalidPath(String),
}

impl From<pathik::SearchError> for RunError {
    fn from(e: pathik::SearchError) -> Self {
        RunError::Pathik(e.into())
    }
}

pub type Result<T> = std::result::Result<T, RunError>;
