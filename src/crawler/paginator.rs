//! Bounded "load more" pagination
//!
//! A paginator probes a page for its "load more" control and keeps clicking
//! it until the control is gone or the click cap is reached. Only the absence
//! of the control is treated as a normal stop; a wait that times out is an
//! error and propagates to the caller.

use crate::browser::PageDriver;
use crate::config::PaginationConfig;
use crate::state::{PaginationState, StopReason};
use crate::Result;
use std::time::Duration;
use tracing::{debug, info};

/// Final result of paginating one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOutcome {
    /// Number of "load more" clicks performed
    pub clicks: u32,

    /// Why pagination stopped
    pub reason: StopReason,
}

/// Clicks a page's "load more" control a bounded number of times
#[derive(Debug, Clone)]
pub struct Paginator {
    max_clicks: u32,
    selector: String,
    wait_timeout: Duration,
    settle_delay: Duration,
}

impl Paginator {
    /// Creates a paginator with an explicit click cap and the shared timings
    pub fn new(max_clicks: u32, config: &PaginationConfig) -> Self {
        Self {
            max_clicks,
            selector: config.load_more_selector.clone(),
            wait_timeout: config.wait_timeout(),
            settle_delay: config.settle_delay(),
        }
    }

    /// Paginator for the topics directory
    pub fn for_topics(config: &PaginationConfig) -> Self {
        Self::new(config.topics_max_clicks, config)
    }

    /// Paginator for a single topic's repository listing
    pub fn for_repositories(config: &PaginationConfig) -> Self {
        Self::new(config.repos_max_clicks, config)
    }

    pub fn max_clicks(&self) -> u32 {
        self.max_clicks
    }

    /// Runs pagination on an already loaded page
    ///
    /// Each iteration probes for the control, waits for it, clicks it and
    /// pauses for the settle delay. The probe is skipped once the cap is spent.
    ///
    /// # Errors
    ///
    /// Propagates browser errors and [`crate::ScrapeError::Timeout`] from the
    /// wait step.
    pub async fn run<P: PageDriver>(&self, page: &P) -> Result<PaginationOutcome> {
        let mut state = PaginationState::start();

        loop {
            let present =
                state.clicks() < self.max_clicks && page.has_element(&self.selector).await?;
            state = state.after_probe(present, self.max_clicks);

            if let PaginationState::Done { clicks, reason } = state {
                debug!("Pagination of {} {}", page.url(), state);
                return Ok(PaginationOutcome { clicks, reason });
            }

            page.wait_for_element(&self.selector, self.wait_timeout)
                .await?;
            page.click(&self.selector).await?;
            state = state.after_click();

            info!("Iteration {}: loaded more content", state.clicks());

            tokio::time::sleep(self.settle_delay).await;
        }
    }
}
