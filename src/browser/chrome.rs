//! Chromium-backed browser session
//!
//! Launches one headless Chromium per run through the DevTools protocol and
//! hands out one tab per scraped URL.

use crate::browser::{PageDriver, PageSource};
use crate::config::BrowserConfig;
use crate::{Result, ScrapeError};
use chromiumoxide::browser::{Browser, HeadlessMode};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::task::{self, JoinHandle};
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A running Chromium instance and its CDP event-handler task
///
/// The handler task must outlive every page; it is aborted when the browser
/// is closed or dropped.
pub struct ChromeBrowser {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl ChromeBrowser {
    /// Launches Chromium with the given options
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Browser`] if the config cannot be built or the
    /// browser process fails to start.
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let mode = if config.headless {
            HeadlessMode::True
        } else {
            HeadlessMode::False
        };

        let mut builder = chromiumoxide::browser::BrowserConfig::builder()
            .headless_mode(mode)
            .request_timeout(Duration::from_secs(config.request_timeout_secs))
            .window_size(1920, 1080)
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--disable-extensions")
            .arg("--mute-audio");

        if let Some(path) = &config.chrome_executable {
            builder = builder.chrome_executable(path);
        }

        let browser_config = builder.build().map_err(ScrapeError::Browser)?;

        info!("Launching browser (headless: {})", config.headless);
        let (browser, mut handler) = Browser::launch(browser_config).await?;

        let handler = task::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::error!("Browser handler error: {:?}", e);
                }
            }
            debug!("Browser event handler task completed");
        });

        Ok(Self { browser, handler })
    }

    /// Closes the browser and waits for the process to exit
    pub async fn close(mut self) -> Result<()> {
        info!("Closing browser");
        self.browser.close().await?;
        self.browser.wait().await?;
        self.handler.abort();
        Ok(())
    }
}

impl Drop for ChromeBrowser {
    fn drop(&mut self) {
        self.handler.abort();
    }
}

impl PageSource for ChromeBrowser {
    type Page = ChromePage;

    async fn open_page(&self, url: &str) -> Result<ChromePage> {
        debug!("Opening page: {}", url);
        let page = self.browser.new_page(url).await?;
        page.wait_for_navigation().await?;

        Ok(ChromePage {
            page,
            url: url.to_string(),
        })
    }
}

/// One browser tab
pub struct ChromePage {
    page: Page,
    url: String,
}

impl PageDriver for ChromePage {
    fn url(&self) -> &str {
        &self.url
    }

    async fn has_element(&self, selector: &str) -> Result<bool> {
        let elements = self.page.find_elements(selector).await?;
        Ok(!elements.is_empty())
    }

    async fn wait_for_element(&self, selector: &str, timeout: Duration) -> Result<()> {
        let start = Instant::now();

        loop {
            if self.has_element(selector).await? {
                debug!("'{}' present after {:?}", selector, start.elapsed());
                return Ok(());
            }

            if start.elapsed() >= timeout {
                return Err(ScrapeError::Timeout {
                    selector: selector.to_string(),
                    url: self.url.clone(),
                    timeout_secs: timeout.as_secs(),
                });
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let element = self.page.find_element(selector).await?;
        element.click().await?;
        Ok(())
    }

    async fn content(&self) -> Result<String> {
        Ok(self.page.content().await?)
    }

    async fn close(self) -> Result<()> {
        self.page.close().await?;
        Ok(())
    }
}
