//! Crawler module for GitHub topics and their repositories
//!
//! This module contains the core scraping logic, including:
//! - HTML extraction of topic and repository records
//! - Bounded "load more" pagination
//! - The topics and per-topic repository scrapers
//! - Overall run coordination

mod coordinator;
mod paginator;
mod parser;
mod records;
mod repositories;
mod topics;

pub use coordinator::{run_scrape, Coordinator};
pub use paginator::{PaginationOutcome, Paginator};
pub use parser::{extract_repositories, extract_topics};
pub use records::{RepositoryEntry, Topic, REPOSITORY_HEADERS, TOPIC_HEADERS};
pub use repositories::scrape_topic_repositories;
pub use topics::scrape_topics;
