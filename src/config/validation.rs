use crate::config::types::{BrowserConfig, Config, OutputConfig, PaginationConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_pagination_config(&config.pagination)?;
    validate_browser_config(&config.browser)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the start and base URLs
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_https_url("topics-url", &config.topics_url)?;
    validate_https_url("base-url", &config.base_url)?;
    Ok(())
}

fn validate_https_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", key, value, e)))?;

    if url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must use HTTPS scheme",
            key, value
        )));
    }

    Ok(())
}

/// Validates pagination caps and timings
fn validate_pagination_config(config: &PaginationConfig) -> Result<(), ConfigError> {
    if config.topics_max_clicks < 1 {
        return Err(ConfigError::Validation(format!(
            "topics-max-clicks must be >= 1, got {}",
            config.topics_max_clicks
        )));
    }

    if config.repos_max_clicks < 1 {
        return Err(ConfigError::Validation(format!(
            "repos-max-clicks must be >= 1, got {}",
            config.repos_max_clicks
        )));
    }

    if config.wait_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "wait-timeout-secs must be >= 1, got {}",
            config.wait_timeout_secs
        )));
    }

    if config.load_more_selector.trim().is_empty() {
        return Err(ConfigError::Validation(
            "load-more-selector cannot be empty".to_string(),
        ));
    }

    if scraper::Selector::parse(&config.load_more_selector).is_err() {
        return Err(ConfigError::Validation(format!(
            "load-more-selector '{}' is not a valid CSS selector",
            config.load_more_selector
        )));
    }

    Ok(())
}

fn validate_browser_config(config: &BrowserConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if let Some(path) = &config.chrome_executable {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "chrome-executable cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates output paths
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.topics_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "topics-dir cannot be empty".to_string(),
        ));
    }

    if config.repos_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "repos-dir cannot be empty".to_string(),
        ));
    }

    if config.topics_file.is_empty() {
        return Err(ConfigError::Validation(
            "topics-file cannot be empty".to_string(),
        ));
    }

    if config.topics_file.contains('/') || config.topics_file.contains('\\') {
        return Err(ConfigError::Validation(format!(
            "topics-file must be a bare file name, got '{}'",
            config.topics_file
        )));
    }

    if config.max_topics == Some(0) {
        return Err(ConfigError::Validation(
            "max-topics must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}
