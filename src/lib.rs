pub mod audit;
pub mod config;
pub mod error;
pub mod git;
pub mod report;

// Re-export commonly used types for convenience
pub use audit::CommandLog;
pub use config::Config;
pub use error::{AppError, AppResult, GitError, GitResult};
pub use git::Repository;
pub use report::{ChangeSet, ChangeStats, CommitRecord, ReportGenerator, RepositoryInfo};
