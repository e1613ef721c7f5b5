//! CSV tables for topics and repositories
//!
//! Files always start with a header row, so an empty table still yields a
//! header-only file. Parent directories are created as needed and existing
//! files are overwritten.

use crate::crawler::{RepositoryEntry, Topic, REPOSITORY_HEADERS, TOPIC_HEADERS};
use crate::output::OutputResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the topics table (`Topic,Description,Link`)
pub fn write_topics(path: &Path, topics: &[Topic]) -> OutputResult<()> {
    write_table(path, &TOPIC_HEADERS, topics)
}

/// Writes one topic's repository table (`Username,Repository,Stars,Repo URL`)
pub fn write_repositories(path: &Path, repositories: &[RepositoryEntry]) -> OutputResult<()> {
    write_table(path, &REPOSITORY_HEADERS, repositories)
}

/// Reads a topics table written by [`write_topics`]
pub fn read_topics(path: &Path) -> OutputResult<Vec<Topic>> {
    read_table(path)
}

/// Reads a repository table written by [`write_repositories`]
pub fn read_repositories(path: &Path) -> OutputResult<Vec<RepositoryEntry>> {
    read_table(path)
}

/// Output path of a topic's repository table
///
/// The title is sanitized so it always names a single file inside `dir`.
///
/// # Example
///
/// ```
/// use github_topics_scraper::output::repository_csv_path;
/// use std::path::Path;
///
/// let path = repository_csv_path(Path::new("topics"), "Node.js");
/// assert_eq!(path, Path::new("topics/Node.js.csv"));
/// ```
pub fn repository_csv_path(dir: &Path, title: &str) -> PathBuf {
    let mut name = sanitize_filename::sanitize(title.trim());
    if name.is_empty() {
        name = "untitled".to_string();
    }
    dir.join(format!("{}.csv", name))
}

fn write_table<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> OutputResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Header row is written by hand so that zero rows still produce it
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

fn read_table<T: DeserializeOwned>(path: &Path) -> OutputResult<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
