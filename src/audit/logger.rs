use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Append-only history of the git commands a run executed
#[derive(Debug, Clone)]
pub struct CommandLog {
    log_path: PathBuf,
}

impl CommandLog {
    /// Create a CommandLog at ~/.config/gitreport/history.log
    pub fn new() -> std::io::Result<Self> {
        let dir = Config::config_dir().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string())
        })?;

        Self::with_path(dir.join("history.log"))
    }

    /// Create a CommandLog with a custom log path
    pub fn with_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let log_path = path.as_ref().to_path_buf();

        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(Self { log_path })
    }

    /// Log a command execution
    pub fn log_command(&self, command: &str, repo_path: &Path, exit_code: i32) -> std::io::Result<()> {
        self.append(&format!(
            "[{}] [{}] [{}] [exit:{}] {}\n",
            Utc::now().to_rfc3339(),
            current_user(),
            repo_path.display(),
            exit_code,
            command
        ))
    }

    /// Log a written report
    pub fn log_report(&self, report_path: &Path, repo_path: &Path) -> std::io::Result<()> {
        self.append(&format!(
            "[{}] [{}] [{}] [REPORT] {}\n",
            Utc::now().to_rfc3339(),
            current_user(),
            repo_path.display(),
            report_path.display()
        ))
    }

    fn append(&self, entry: &str) -> std::io::Result<()> {
        self.rotate_if_needed()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        file.write_all(entry.as_bytes())?;
        file.flush()
    }

    /// Rotate log file if it exceeds MAX_LOG_SIZE
    fn rotate_if_needed(&self) -> std::io::Result<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        if fs::metadata(&self.log_path)?.len() > MAX_LOG_SIZE {
            // history.log -> history.log.1
            fs::rename(&self.log_path, self.log_path.with_extension("log.1"))?;
        }

        Ok(())
    }

    /// Get the path to the log file
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

fn current_user() -> String {
    std::env::var("USER").unwrap_or_else(|_| "unknown".to_string())
}
