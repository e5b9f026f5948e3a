use chrono::NaiveDateTime;

use crate::report::model::{ChangeSet, ChangeStats, CommitRecord, RepositoryInfo};

/// Render the Markdown report
///
/// Pure: the same inputs and `generated_at` always give the same text.
pub fn render_report(
    info: &RepositoryInfo,
    commits: &[CommitRecord],
    changes: &ChangeSet,
    stats: &ChangeStats,
    generated_at: NaiveDateTime,
) -> String {
    let mut lines: Vec<String> = vec![
        "# Repository Change Report\n".to_string(),
        format!("Generated on: {}\n", generated_at.format("%Y-%m-%d %H:%M:%S")),
        "## Repository Information\n".to_string(),
        format!("- **Repository:** {}", info.name),
        format!("- **Remote URL:** {}", info.remote_url),
        format!("- **Branch:** {}", info.branch),
        format!("- **Status:** {}\n", info.tracking),
    ];

    if info.tracking.is_tracking() {
        lines.push("## Unpushed Commits\n".to_string());
    } else {
        lines.push("## Latest Commits\n".to_string());
    }

    if commits.is_empty() {
        lines.push("No commits found.".to_string());
    }
    for commit in commits {
        lines.push(format!(
            "- **{}** - {} - {}\n  {}",
            commit.hash,
            commit.date.format("%Y-%m-%d"),
            commit.author,
            commit.subject
        ));
    }

    lines.push("\n## Changes\n".to_string());

    if changes.is_empty() {
        lines.push("No changes found.".to_string());
    }
    for entry in changes.entries() {
        lines.push(format!("### {}\n", entry.kind));
        lines.push("```diff".to_string());
        lines.push(entry.diff.clone());
        lines.push("```\n".to_string());
    }

    lines.push("## Change Statistics\n".to_string());
    if stats.details.is_empty() {
        lines.push("No statistics available\n".to_string());
    } else {
        lines.push(format!("{}\n", stats.details));
    }

    lines.join("\n")
}

/// File name for a report on `repo_name` generated at `generated_at`
pub fn report_file_name(repo_name: &str, generated_at: NaiveDateTime) -> String {
    format!(
        "{}_changes_{}.md",
        repo_name,
        generated_at.format("%Y%m%d_%H%M%S")
    )
}
