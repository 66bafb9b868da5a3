use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("source path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to walk {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("two files map to the same key '{0}'")]
    DuplicateKey(String),

    #[error(
        "invalid package name '{0}': expected ASCII letters, digits and underscores, not starting with a digit and not a Rust or Go keyword"
    )]
    InvalidPackageName(String),

    #[error("failed to render template: {0}")]
    Render(#[from] askama::Error),

    #[error("failed to back up {} to {}: {source}", .path.display(), .backup.display())]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Errors from `fs-err` already name the path involved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
