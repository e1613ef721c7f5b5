//! Browser session abstraction
//!
//! Scraping logic talks to pages through two small traits so it can run
//! against a real Chromium or against scripted pages in tests:
//! - [`PageSource`] opens a page on a URL
//! - [`PageDriver`] probes, waits, clicks and reads one open page

mod chrome;

pub use chrome::{ChromeBrowser, ChromePage};

use crate::Result;
use std::time::Duration;

/// Something that can open pages, usually a running browser
#[allow(async_fn_in_trait)]
pub trait PageSource {
    type Page: PageDriver;

    /// Opens a new page and navigates it to `url`
    async fn open_page(&self, url: &str) -> Result<Self::Page>;
}

/// Operations on a single loaded page
#[allow(async_fn_in_trait)]
pub trait PageDriver {
    /// The URL this page was opened on
    fn url(&self) -> &str;

    /// Returns true if at least one element matches `selector` right now
    async fn has_element(&self, selector: &str) -> Result<bool>;

    /// Waits until an element matches `selector`
    ///
    /// Fails with [`crate::ScrapeError::Timeout`] once `timeout` has elapsed.
    async fn wait_for_element(&self, selector: &str, timeout: Duration) -> Result<()>;

    /// Clicks the first element matching `selector`
    async fn click(&self, selector: &str) -> Result<()>;

    /// Current HTML of the page, including client-rendered content
    async fn content(&self) -> Result<String>;

    /// Closes the page
    async fn close(self) -> Result<()>;
}
