use chrono::NaiveDate;
use std::fmt;

/// `git log` pretty format understood by [`parse_log`]
pub const LOG_FORMAT: &str = "--pretty=format:%h|%an|%ad|%s";

/// Date style matching the `%Y-%m-%d` dates [`parse_log`] expects
pub const LOG_DATE: &str = "--date=short";

/// Parse git log output produced with [`LOG_FORMAT`] and [`LOG_DATE`]
///
/// Author names and subjects may both contain `|`, so the date is taken to be
/// the first field after the hash that parses as a date. Lines without one
/// are skipped; the rest of the listing is unaffected.
pub fn parse_log(output: &str) -> Vec<CommitRecord> {
    output.lines().filter_map(parse_log_line).collect()
}

fn parse_log_line(line: &str) -> Option<CommitRecord> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 4 {
        return None;
    }

    // Leave at least one field for the author and one for the subject
    let (date_index, date) = parts[..parts.len() - 1]
        .iter()
        .enumerate()
        .skip(2)
        .find_map(|(i, field)| {
            NaiveDate::parse_from_str(field, "%Y-%m-%d")
                .ok()
                .map(|date| (i, date))
        })?;

    Some(CommitRecord {
        hash: parts[0].to_string(),
        author: parts[1..date_index].join("|"),
        date,
        subject: parts[date_index + 1..].join("|"),
    })
}

/// Represents a commit from git log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub hash: String,
    pub author: String,
    pub date: NaiveDate,
    pub subject: String,
}

impl fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.hash, self.date, self.author, self.subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log() {
        let output = "abc1234|Test User|2024-03-01|Initial commit\ndef5678|Jo Doe|2024-03-02|Add README";
        let commits = parse_log(output);

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].hash, "abc1234");
        assert_eq!(commits[0].author, "Test User");
        assert_eq!(commits[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(commits[0].subject, "Initial commit");
        assert_eq!(commits[1].hash, "def5678");
        assert_eq!(commits[1].subject, "Add README");
    }

    #[test]
    fn test_parse_log_subject_with_pipes() {
        let output = "abc1234|Test User|2024-03-01|feat: a | b | c";
        let commits = parse_log(output);

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].subject, "feat: a | b | c");
    }

    #[test]
    fn test_parse_log_empty_subject() {
        let commits = parse_log("abc1234|Test User|2024-03-01|");

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].subject, "");
    }

    #[test]
    fn test_parse_log_skips_short_lines() {
        let output = "garbage\nabc1234|Test User|2024-03-01|Kept\n\n";
        let commits = parse_log(output);

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].subject, "Kept");
    }

    #[test]
    fn test_parse_log_author_with_pipes() {
        let output = "abc1234|Ann | Team|2024-03-02|Team commit\ndef5678|Test User|2024-03-01|Solo commit";
        let commits = parse_log(output);

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].author, "Ann | Team");
        assert_eq!(commits[0].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(commits[0].subject, "Team commit");
        assert_eq!(commits[1].author, "Test User");
    }

    #[test]
    fn test_parse_log_author_and_subject_with_pipes() {
        let commits = parse_log("abc1234|a|b|2024-03-01|x | 2024-01-01 | y");

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].author, "a|b");
        assert_eq!(commits[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(commits[0].subject, "x | 2024-01-01 | y");
    }

    #[test]
    fn test_parse_log_invalid_date_skips_only_that_line() {
        let output = "abc1234|Test User|yesterday|Subject\ndef5678|Test User|2024-03-01|Kept";
        let commits = parse_log(output);

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].hash, "def5678");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_log("").is_empty());
    }

    #[test]
    fn test_display() {
        let commit = CommitRecord {
            hash: "abc1234".to_string(),
            author: "Test User".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            subject: "Initial commit".to_string(),
        };
        assert_eq!(commit.to_string(), "abc1234 2024-03-01 Test User Initial commit");
    }
}
