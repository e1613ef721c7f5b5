//! Scrape coordinator - main run orchestration
//!
//! Scrapes the topics directory once, then walks the topic table in order,
//! scraping and saving each topic's repositories. Topics are processed one
//! at a time and the first error ends the run; files already written stay
//! on disk.

use crate::browser::{ChromeBrowser, PageSource};
use crate::config::Config;
use crate::crawler::repositories::scrape_topic_repositories;
use crate::crawler::topics::scrape_topics;
use crate::output::{repository_csv_path, write_repositories, RunSummary, TopicResult};
use crate::Result;
use chrono::Utc;
use std::time::Instant;
use tracing::{info, warn};

/// Main scrape coordinator
pub struct Coordinator<S: PageSource> {
    config: Config,
    source: S,
}

impl<S: PageSource> Coordinator<S> {
    /// Creates a coordinator that opens pages through `source`
    pub fn new(config: Config, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives back the page source, e.g. to close the browser
    pub fn into_source(self) -> S {
        self.source
    }

    /// Runs the full scrape
    ///
    /// 1. Scrape and save the topics table
    /// 2. For each topic (up to `max_topics`), scrape its repositories
    /// 3. Save each repository table as `<repos_dir>/<topic title>.csv`
    pub async fn run(&self) -> Result<RunSummary> {
        let start_time = Instant::now();
        let mut summary = RunSummary::new(Utc::now(), self.config.output.topics_path());

        let topics = scrape_topics(&self.source, &self.config).await?;
        summary.topics_found = topics.len();

        let limit = self.config.output.max_topics.unwrap_or(topics.len());
        if limit < topics.len() {
            info!("Limiting repository scrape to {} of {} topics", limit, topics.len());
        }

        for (index, topic) in topics.iter().take(limit).enumerate() {
            info!(
                "Scraping topic {}/{}: {}",
                index + 1,
                limit.min(topics.len()),
                topic.title
            );

            let repositories =
                scrape_topic_repositories(&self.source, &self.config, &topic.link).await?;
            if repositories.is_empty() {
                warn!("No repositories found for topic {}", topic.title);
            }

            let path = repository_csv_path(&self.config.output.repos_dir, &topic.title);
            write_repositories(&path, &repositories)?;
            info!(
                "Saved {} ({} repositories)",
                path.display(),
                repositories.len()
            );

            summary.topics.push(TopicResult {
                title: topic.title.clone(),
                repositories: repositories.len(),
                path,
            });
        }

        summary.finished_at = Some(Utc::now());
        info!(
            "Scrape completed: {} topics, {} repositories in {:?}",
            summary.topics.len(),
            summary.total_repositories(),
            start_time.elapsed()
        );

        Ok(summary)
    }
}

/// Runs a complete scrape with a freshly launched browser
///
/// The browser is closed before returning, also when the scrape fails.
///
/// # Example
///
/// ```no_run
/// use github_topics_scraper::config::Config;
/// use github_topics_scraper::crawler::run_scrape;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_scrape(Config::default()).await?;
/// println!("{} topics scraped", summary.topics.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: Config) -> Result<RunSummary> {
    let browser = ChromeBrowser::launch(&config.browser).await?;
    let coordinator = Coordinator::new(config, browser);

    let result = coordinator.run().await;
    let closed = coordinator.into_source().close().await;

    let summary = result?;
    closed?;
    Ok(summary)
}
