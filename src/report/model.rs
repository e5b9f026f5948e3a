use std::fmt;

pub use crate::git::parser::CommitRecord;

/// Sentinel shown when the configured remote has no URL
pub const NO_REMOTE: &str = "No remote configured";

/// Basic facts about the repository a report describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub name: String,
    pub remote_url: String,
    pub branch: String,
    pub tracking: TrackingStatus,
}

/// Whether the current branch tracks a remote branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingStatus {
    TrackingRemote { upstream: String },
    NoUpstream,
}

impl TrackingStatus {
    pub fn from_upstream(upstream: Option<String>) -> Self {
        match upstream {
            Some(upstream) => TrackingStatus::TrackingRemote { upstream },
            None => TrackingStatus::NoUpstream,
        }
    }

    /// The upstream ref, e.g. `origin/main`
    pub fn upstream(&self) -> Option<&str> {
        match self {
            TrackingStatus::TrackingRemote { upstream } => Some(upstream),
            TrackingStatus::NoUpstream => None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, TrackingStatus::TrackingRemote { .. })
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingStatus::TrackingRemote { .. } => write!(f, "Tracking remote branch"),
            TrackingStatus::NoUpstream => write!(f, "No upstream configured"),
        }
    }
}

/// Category of a diff in the changes section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Staged,
    Unstaged,
    LastCommit,
    VsUpstream,
}

impl ChangeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Staged => "Staged Changes",
            ChangeKind::Unstaged => "Unstaged Changes",
            ChangeKind::LastCommit => "Last Commit Changes",
            ChangeKind::VsUpstream => "Changes vs Upstream",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One labelled diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub kind: ChangeKind,
    pub diff: String,
}

/// Ordered diffs; empty diffs are never stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    entries: Vec<ChangeEntry>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diff, ignoring it when it is blank
    pub fn push(&mut self, kind: ChangeKind, diff: impl Into<String>) {
        let diff = diff.into();
        if !diff.trim().is_empty() {
            self.entries.push(ChangeEntry { kind, diff });
        }
    }

    pub fn entries(&self) -> &[ChangeEntry] {
        &self.entries
    }

    pub fn get(&self, kind: ChangeKind) -> Option<&ChangeEntry> {
        self.entries.iter().find(|entry| entry.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Free-form insertion/deletion summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeStats {
    pub details: String,
}

impl ChangeStats {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }
}
