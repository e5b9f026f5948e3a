use crate::audit::CommandLog;
use crate::error::{GitError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of executing a git command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Executes git commands within a repository
#[derive(Debug)]
pub struct GitExecutor {
    repo_path: PathBuf,
    log: Option<CommandLog>,
}

impl GitExecutor {
    /// Create a new GitExecutor for the given repository path
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
            log: None,
        }
    }

    /// Record every executed command in the given history log
    pub fn with_log(mut self, log: CommandLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Execute a git command and return the output
    ///
    /// The command string should not include "git" prefix and is split on
    /// whitespace, so no argument may contain spaces. Arguments reach git
    /// verbatim with no shell in between.
    /// Example: executor.execute("diff --shortstat --staged")
    pub fn execute(&self, command: &str) -> Result<CommandOutput> {
        let args: Vec<&str> = command.split_whitespace().collect();
        if args.is_empty() {
            return Err(GitError::CommandFailed("Empty command".to_string()));
        }

        let output = Command::new("git")
            .args(&args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| GitError::CommandFailed(format!("Failed to execute git: {}", e)))?;

        self.process_output(output, command)
    }

    /// Process command output into CommandOutput struct
    fn process_output(&self, output: Output, command: &str) -> Result<CommandOutput> {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);
        let success = output.status.success();

        if let Some(log) = &self.log {
            let line = format!("git {}", command);
            if let Err(e) = log.log_command(&line, &self.repo_path, exit_code) {
                eprintln!("Warning: failed to write command history: {}", e);
            }
        }

        if !success {
            return Err(GitError::CommandFailed(format!(
                "Command 'git {}' failed with exit code {}: {}",
                command,
                exit_code,
                stderr.trim()
            )));
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
            success,
        })
    }

    /// Get the command history log, if one is attached
    pub fn log(&self) -> Option<&CommandLog> {
        self.log.as_ref()
    }
}
