use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
///
/// Every section is optional; missing sections and keys fall back to the
/// built-in defaults, which scrape `https://github.com/topics` exactly as the
/// tool does with no config file at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub pagination: PaginationConfig,
    pub browser: BrowserConfig,
    pub output: OutputConfig,
}

/// Where to start scraping
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// The topics directory page
    #[serde(rename = "topics-url")]
    pub topics_url: String,

    /// Base URL that relative links on scraped pages are resolved against
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            topics_url: "https://github.com/topics".to_string(),
            base_url: "https://github.com/".to_string(),
        }
    }
}

/// "Load more" pagination behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Maximum number of "load more" clicks on the topics page
    #[serde(rename = "topics-max-clicks")]
    pub topics_max_clicks: u32,

    /// Maximum number of "load more" clicks on each topic's repository page
    #[serde(rename = "repos-max-clicks")]
    pub repos_max_clicks: u32,

    /// How long to wait for the control before clicking it (seconds)
    #[serde(rename = "wait-timeout-secs")]
    pub wait_timeout_secs: u64,

    /// Pause after each click (milliseconds)
    #[serde(rename = "settle-delay-ms")]
    pub settle_delay_ms: u64,

    /// CSS selector of the "load more" control
    #[serde(rename = "load-more-selector")]
    pub load_more_selector: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            topics_max_clicks: 5,
            repos_max_clicks: 4,
            wait_timeout_secs: 20,
            settle_delay_ms: 2000,
            load_more_selector: ".ajax-pagination-btn".to_string(),
        }
    }
}

impl PaginationConfig {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Browser launch options
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run Chromium without a visible window
    pub headless: bool,

    /// Explicit Chrome/Chromium binary; autodetected when absent
    #[serde(rename = "chrome-executable")]
    pub chrome_executable: Option<PathBuf>,

    /// Timeout for individual DevTools protocol requests (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            chrome_executable: None,
            request_timeout_secs: 30,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory holding the topics table
    #[serde(rename = "topics-dir")]
    pub topics_dir: PathBuf,

    /// File name of the topics table inside `topics_dir`
    #[serde(rename = "topics-file")]
    pub topics_file: String,

    /// Directory holding one repository table per topic
    #[serde(rename = "repos-dir")]
    pub repos_dir: PathBuf,

    /// Only scrape repositories for the first N topics
    #[serde(rename = "max-topics")]
    pub max_topics: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            topics_dir: PathBuf::from("Topics_Information"),
            topics_file: "topics_information.csv".to_string(),
            repos_dir: PathBuf::from("topics"),
            max_topics: None,
        }
    }
}

impl OutputConfig {
    /// Full path of the topics CSV file
    pub fn topics_path(&self) -> PathBuf {
        self.topics_dir.join(&self.topics_file)
    }
}
