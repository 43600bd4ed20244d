use std::path::PathBuf;

use thiserror::Error;

/// Application-wide result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The listing root is missing, unreadable, or not a directory.
    #[error("directory unavailable: {}", .0.display())]
    DirectoryUnavailable(PathBuf),
}
