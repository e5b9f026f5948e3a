use std::io;
use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    #[error("This is not a git repository.")]
    NotARepository,

    #[error("Git command failed: {0}")]
    CommandFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Errors that abort a report run
///
/// Generator operations swallow command failures themselves, and a bad config
/// file only downgrades to defaults, so just discovery and writing the report
/// surface here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for git operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Alias kept for the git layer, which only ever fails with `GitError`
pub type Result<T> = GitResult<T>;
