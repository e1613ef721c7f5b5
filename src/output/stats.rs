//! Run summary for a finished scrape

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Repository table written for one topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicResult {
    pub title: String,

    /// Number of repository rows written
    pub repositories: usize,

    /// Path of the written CSV file
    pub path: PathBuf,
}

/// What a scrape run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Path of the topics table
    pub topics_path: PathBuf,

    /// Number of topics extracted from the topics directory
    pub topics_found: usize,

    /// Repository tables written, in topic order
    pub topics: Vec<TopicResult>,
}

impl RunSummary {
    pub fn new(started_at: DateTime<Utc>, topics_path: PathBuf) -> Self {
        Self {
            started_at,
            finished_at: None,
            topics_path,
            topics_found: 0,
            topics: Vec::new(),
        }
    }

    /// Total repository rows across all topics
    pub fn total_repositories(&self) -> usize {
        self.topics.iter().map(|t| t.repositories).sum()
    }

    /// Titles of topics whose repository table came out empty
    pub fn empty_topics(&self) -> Vec<&str> {
        self.topics
            .iter()
            .filter(|t| t.repositories == 0)
            .map(|t| t.title.as_str())
            .collect()
    }

    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}

/// Prints a run summary to stdout
pub fn print_summary(summary: &RunSummary) {
    println!("=== Scrape Summary ===\n");

    println!("Overview:");
    println!("  Started: {}", summary.started_at);
    if let Some(seconds) = summary.duration_seconds() {
        println!("  Duration: {}s", seconds);
    }
    println!(
        "  Topics found: {} (saved to {})",
        summary.topics_found,
        summary.topics_path.display()
    );
    println!("  Topics scraped: {}", summary.topics.len());
    println!("  Repositories saved: {}", summary.total_repositories());
    println!();

    let empty = summary.empty_topics();
    if !empty.is_empty() {
        println!("Topics without repositories ({}):", empty.len());
        for title in empty {
            println!("  - {}", title);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn result(title: &str, repositories: usize) -> TopicResult {
        TopicResult {
            title: title.to_string(),
            repositories,
            path: PathBuf::from(format!("topics/{}.csv", title)),
        }
    }

    #[test]
    fn test_summary_totals() {
        let started = Utc::now();
        let mut summary = RunSummary::new(started, PathBuf::from("Topics_Information/topics_information.csv"));
        summary.topics_found = 3;
        summary.topics = vec![result("3D", 20), result("Ajax", 0), result("Algorithm", 12)];

        assert_eq!(summary.total_repositories(), 32);
        assert_eq!(summary.empty_topics(), vec!["Ajax"]);
        assert_eq!(summary.duration_seconds(), None);

        summary.finished_at = Some(started + Duration::seconds(90));
        assert_eq!(summary.duration_seconds(), Some(90));
    }
}
