//! Error types

use thiserror::Error;

/// Configuration rejected at the call that introduced it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScatterError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Failure to load or build a scene file
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Scatter(#[from] ScatterError),
}
