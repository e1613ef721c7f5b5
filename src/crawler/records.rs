//! Tabular records produced by a scrape

use serde::{Deserialize, Serialize};

/// Column headers of the topics table, in field order
pub const TOPIC_HEADERS: [&str; 3] = ["Topic", "Description", "Link"];

/// Column headers of a repository table, in field order
pub const REPOSITORY_HEADERS: [&str; 4] = ["Username", "Repository", "Stars", "Repo URL"];

/// One topic card from the topics directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(rename = "Topic")]
    pub title: String,

    #[serde(rename = "Description")]
    pub description: String,

    /// Absolute URL of the topic page
    #[serde(rename = "Link")]
    pub link: String,
}

/// One repository listed under a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    /// Owner login
    #[serde(rename = "Username")]
    pub username: String,

    #[serde(rename = "Repository")]
    pub repository: String,

    /// Star count exactly as displayed (e.g. "94.8k")
    #[serde(rename = "Stars")]
    pub stars: String,

    /// Absolute URL of the repository
    #[serde(rename = "Repo URL")]
    pub repo_url: String,
}
