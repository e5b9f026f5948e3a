pub mod executor;
pub mod parser;
pub mod repository;

// Re-export commonly used types
pub use executor::{CommandOutput, GitExecutor};
pub use parser::{CommitRecord, LOG_DATE, LOG_FORMAT, parse_log};
pub use repository::Repository;
