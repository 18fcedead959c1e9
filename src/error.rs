// Error types for ssostat.
// Covers cache filesystem access and JSON decoding of cache files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SsostatError {
    #[error("Cache directory not found: {0}")]
    CacheDirMissing(PathBuf),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SsostatError>;
