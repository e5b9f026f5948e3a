use chrono::{Local, NaiveDateTime};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::AppResult;
use crate::git::{LOG_DATE, LOG_FORMAT, Repository, parse_log};
use crate::report::model::{
    ChangeKind, ChangeSet, ChangeStats, CommitRecord, NO_REMOTE, RepositoryInfo, TrackingStatus,
};
use crate::report::render::{render_report, report_file_name};

/// Collects everything a change report needs from one repository
///
/// The upstream is resolved once at construction, and the remote is fetched
/// at most once, the first time upstream data is needed.
#[derive(Debug)]
pub struct ReportGenerator {
    repo: Repository,
    config: Config,
    tracking: TrackingStatus,
    fetched: Cell<bool>,
}

impl ReportGenerator {
    pub fn new(repo: Repository, config: Config) -> Self {
        let tracking = TrackingStatus::from_upstream(repo.upstream());

        Self {
            repo,
            config,
            tracking,
            fetched: Cell::new(false),
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    pub fn tracking(&self) -> &TrackingStatus {
        &self.tracking
    }

    /// Gather name, remote URL, branch and tracking status
    pub fn gather_repo_info(&self) -> RepositoryInfo {
        let toplevel = self.repo.query("rev-parse --show-toplevel");
        let name = Path::new(&toplevel)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.repo.name());

        let remote_url = self
            .repo
            .remote_url(&self.config.git.remote)
            .unwrap_or_else(|| NO_REMOTE.to_string());

        // Detached HEAD has no branch name
        let branch = self.repo.current_branch().unwrap_or_default();

        RepositoryInfo {
            name,
            remote_url,
            branch,
            tracking: self.tracking.clone(),
        }
    }

    /// Commits not yet on the upstream, or the latest commits without one
    ///
    /// Newest first, in `git log` order.
    pub fn list_commits(&self) -> Vec<CommitRecord> {
        let command = match self.tracking.upstream() {
            None => format!(
                "log {} {} -{}",
                LOG_FORMAT, LOG_DATE, self.config.report.commit_limit
            ),
            Some(upstream) => {
                self.ensure_fetched();
                format!("log {}..HEAD {} {}", upstream, LOG_FORMAT, LOG_DATE)
            }
        };

        parse_log(&self.repo.query(&command))
    }

    /// Diffs worth reporting
    ///
    /// Without an upstream: staged and unstaged changes, falling back to the
    /// last commit when the working tree is clean. With one: a single diff
    /// against it. Empty diffs are left out, so an upstream identical to HEAD
    /// yields an empty set and the report reads "No changes found.".
    pub fn collect_changes(&self) -> ChangeSet {
        let mut changes = ChangeSet::new();

        match self.tracking.upstream() {
            None => {
                let staged = self.repo.query("diff --staged");
                let unstaged = self.repo.query("diff");

                if staged.is_empty() && unstaged.is_empty() {
                    changes.push(ChangeKind::LastCommit, self.repo.query("diff HEAD~1 HEAD"));
                } else {
                    changes.push(ChangeKind::Staged, staged);
                    changes.push(ChangeKind::Unstaged, unstaged);
                }
            }
            Some(upstream) => {
                self.ensure_fetched();
                let diff = self.repo.query(&format!("diff {} HEAD", upstream));
                changes.push(ChangeKind::VsUpstream, diff);
            }
        }

        changes
    }

    /// Shortstat summary following the same branching as [`Self::collect_changes`]
    pub fn collect_statistics(&self) -> ChangeStats {
        let details = match self.tracking.upstream() {
            None => {
                let staged = self.repo.query("diff --shortstat --staged");
                let unstaged = self.repo.query("diff --shortstat");

                if staged.is_empty() && unstaged.is_empty() {
                    let last_commit = self.repo.query("diff --shortstat HEAD~1 HEAD");
                    if last_commit.is_empty() {
                        "No changes in last commit".to_string()
                    } else {
                        format!("Last commit: {}", last_commit)
                    }
                } else {
                    let mut details = if staged.is_empty() {
                        "No staged changes".to_string()
                    } else {
                        format!("Staged changes: {}", staged)
                    };
                    if !unstaged.is_empty() {
                        details.push_str(&format!("\nUnstaged changes: {}", unstaged));
                    }
                    details
                }
            }
            Some(upstream) => {
                self.ensure_fetched();
                let stats = self.repo.query(&format!("diff --shortstat {} HEAD", upstream));
                if stats.is_empty() {
                    "No changes".to_string()
                } else {
                    stats
                }
            }
        };

        ChangeStats::new(details)
    }

    /// Collect everything and render it, stamped with `generated_at`
    pub fn render(&self, generated_at: NaiveDateTime) -> (RepositoryInfo, String) {
        let info = self.gather_repo_info();
        let commits = self.list_commits();
        let changes = self.collect_changes();
        let stats = self.collect_statistics();

        let text = render_report(&info, &commits, &changes, &stats, generated_at);
        (info, text)
    }

    /// Generate the report and write it into `output_dir`
    ///
    /// Returns the path of the written file.
    pub fn run(&self, output_dir: &Path) -> AppResult<PathBuf> {
        let generated_at = Local::now().naive_local();
        let (info, text) = self.render(generated_at);

        let output_path = output_dir.join(report_file_name(&info.name, generated_at));
        fs::write(&output_path, text)?;

        if let Some(log) = self.repo.executor().log()
            && let Err(e) = log.log_report(&output_path, self.repo.path())
        {
            eprintln!("Warning: failed to write command history: {}", e);
        }

        Ok(output_path)
    }

    fn ensure_fetched(&self) {
        if self.config.git.fetch && !self.fetched.replace(true) {
            self.repo.query("fetch");
        }
    }
}
