//! Output module for scraped tables and run summaries
//!
//! This module handles:
//! - Writing and reading the topics and repository CSV tables
//! - Naming per-topic output files
//! - Summarizing a finished run

mod csv_output;
mod error;
pub mod stats;

pub use csv_output::{
    read_repositories, read_topics, repository_csv_path, write_repositories, write_topics,
};
pub use error::{OutputError, OutputResult};
pub use stats::{print_summary, RunSummary, TopicResult};
