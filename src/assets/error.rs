//! Error types for asset discovery

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the champion asset tree
#[derive(Debug, Error)]
pub enum AssetError {
    /// A directory or file in the asset tree could not be read
    #[error("Assets unavailable at {}: {source}", path.display())]
    Unavailable {
        /// Path that failed
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// The platform file manager could not be launched
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        /// Folder we tried to open
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        AssetError::Unavailable {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, AssetError>;
