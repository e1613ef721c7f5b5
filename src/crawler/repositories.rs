//! Per-topic repository scraper

use crate::browser::PageSource;
use crate::config::Config;
use crate::crawler::paginator::Paginator;
use crate::crawler::parser::extract_repositories;
use crate::crawler::records::RepositoryEntry;
use crate::crawler::topics::load_expanded;
use crate::Result;
use tracing::debug;
use url::Url;

/// Scrapes the repositories listed on one topic page
///
/// Writing the table is left to the caller.
pub async fn scrape_topic_repositories<S: PageSource>(
    source: &S,
    config: &Config,
    topic_url: &str,
) -> Result<Vec<RepositoryEntry>> {
    let base_url = Url::parse(&config.site.base_url)?;
    let paginator = Paginator::for_repositories(&config.pagination);

    let html = load_expanded(source, topic_url, &paginator).await?;
    let repositories = extract_repositories(&html, &base_url);
    debug!("{} repositories on {}", repositories.len(), topic_url);

    Ok(repositories)
}
