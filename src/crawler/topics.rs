//! Topics directory scraper

use crate::browser::{PageDriver, PageSource};
use crate::config::Config;
use crate::crawler::paginator::Paginator;
use crate::crawler::parser::extract_topics;
use crate::crawler::records::Topic;
use crate::output::write_topics;
use crate::Result;
use tracing::info;
use url::Url;

/// Scrapes the topics directory and writes the topics table
///
/// Opens the configured topics page, expands it with the topics paginator,
/// extracts every topic card, and writes the table to
/// [`crate::config::OutputConfig::topics_path`] before returning it.
pub async fn scrape_topics<S: PageSource>(source: &S, config: &Config) -> Result<Vec<Topic>> {
    let base_url = Url::parse(&config.site.base_url)?;
    let paginator = Paginator::for_topics(&config.pagination);

    info!("Loading topics from {}", config.site.topics_url);
    let html = load_expanded(source, &config.site.topics_url, &paginator).await?;

    let topics = extract_topics(&html, &base_url);
    info!("Found {} topics", topics.len());

    let path = config.output.topics_path();
    write_topics(&path, &topics)?;
    info!("Saved topics to {}", path.display());

    Ok(topics)
}

/// Opens `url`, paginates it, and returns the final HTML
///
/// The page is closed before returning, whether or not pagination succeeded.
pub(crate) async fn load_expanded<S: PageSource>(
    source: &S,
    url: &str,
    paginator: &Paginator,
) -> Result<String> {
    let page = source.open_page(url).await?;

    let html = match paginator.run(&page).await {
        Ok(_) => page.content().await,
        Err(e) => Err(e),
    };
    let closed = page.close().await;

    let html = html?;
    closed?;
    Ok(html)
}
