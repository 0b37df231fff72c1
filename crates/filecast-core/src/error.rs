//! Error types for `filecast-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error raised while touching `path` onto the closest variant.
    pub(crate) fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                CoreError::PermissionDenied(path.to_path_buf())
            }
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `filecast-core`.
pub type CoreResult<T> = Result<T, CoreError>;
