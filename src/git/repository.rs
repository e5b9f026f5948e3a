use crate::audit::CommandLog;
use crate::error::{GitError, Result};
use crate::git::executor::GitExecutor;
use std::env;
use std::path::{Path, PathBuf};

/// A git work tree and the executor used to query it
#[derive(Debug)]
pub struct Repository {
    path: PathBuf,
    executor: GitExecutor,
}

impl Repository {
    /// Detect git repository from current working directory
    pub fn discover() -> Result<Self> {
        let current_dir = env::current_dir().map_err(GitError::IoError)?;

        Self::discover_from(&current_dir)
    }

    /// Detect git repository starting from a specific directory
    ///
    /// Asks git itself, so `GIT_DIR`, worktrees and ceiling directories are
    /// honoured. A bare repository or the inside of `.git` is not a work tree.
    pub fn discover_from<P: AsRef<Path>>(start_path: P) -> Result<Self> {
        let locator = GitExecutor::new(start_path.as_ref());

        let inside = locator
            .execute("rev-parse --is-inside-work-tree")
            .map(|output| output.stdout.trim() == "true")
            .unwrap_or(false);
        if !inside {
            return Err(GitError::NotARepository);
        }

        let toplevel = locator
            .execute("rev-parse --show-toplevel")
            .map_err(|_| GitError::NotARepository)?;
        let toplevel = toplevel.stdout.trim();
        if toplevel.is_empty() {
            return Err(GitError::NotARepository);
        }

        Ok(Self::new(toplevel))
    }

    /// Create a Repository for a known work tree root
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let executor = GitExecutor::new(&path);

        Self { path, executor }
    }

    /// Record every git command this repository runs in `log`
    pub fn with_log(mut self, log: CommandLog) -> Self {
        self.executor = GitExecutor::new(&self.path).with_log(log);
        self
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the top-level directory
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Run a query and return its trimmed stdout
    ///
    /// Failures are reported on stderr and read as "no data".
    pub fn query(&self, command: &str) -> String {
        match self.executor.execute(command) {
            Ok(output) => output.stdout.trim().to_string(),
            Err(e) => {
                eprintln!("Error running command: git {}", command);
                eprintln!("Error message: {}", e);
                String::new()
            }
        }
    }

    /// Like [`Repository::query`] but silent on failure
    pub fn query_quiet(&self, command: &str) -> String {
        self.executor
            .execute(command)
            .map(|output| output.stdout.trim().to_string())
            .unwrap_or_default()
    }

    /// Get the current branch name, `None` when HEAD is detached
    pub fn current_branch(&self) -> Option<String> {
        let branch = self.query("branch --show-current");
        if branch.is_empty() { None } else { Some(branch) }
    }

    /// Get the upstream ref of the current branch, e.g. `origin/main`
    pub fn upstream(&self) -> Option<String> {
        let upstream = self.query_quiet("rev-parse --abbrev-ref @{u}");
        if upstream.is_empty() { None } else { Some(upstream) }
    }

    /// Get the URL of the named remote
    pub fn remote_url(&self, remote: &str) -> Option<String> {
        let url = self.query_quiet(&format!("remote get-url {}", remote));
        if url.is_empty() { None } else { Some(url) }
    }

    /// Get the git executor for this repository
    pub fn executor(&self) -> &GitExecutor {
        &self.executor
    }
}
