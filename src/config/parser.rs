use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses configuration from a TOML string and validates it
///
/// Keys missing from `content` keep their default values.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let config_content = r#"
[site]
topics-url = "https://github.com/topics"
base-url = "https://github.com/"

[pagination]
topics-max-clicks = 2
repos-max-clicks = 1
wait-timeout-secs = 5
settle-delay-ms = 100
load-more-selector = ".ajax-pagination-btn"

[browser]
headless = false
chrome-executable = "/usr/bin/chromium"
request-timeout-secs = 10

[output]
topics-dir = "out"
topics-file = "all_topics.csv"
repos-dir = "out/repos"
max-topics = 3
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.pagination.topics_max_clicks, 2);
        assert_eq!(config.pagination.repos_max_clicks, 1);
        assert!(!config.browser.headless);
        assert_eq!(
            config.browser.chrome_executable,
            Some(PathBuf::from("/usr/bin/chromium"))
        );
        assert_eq!(config.output.topics_path(), PathBuf::from("out/all_topics.csv"));
        assert_eq!(config.output.max_topics, Some(3));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config.site.topics_url, "https://github.com/topics");
        assert_eq!(config.pagination.topics_max_clicks, 5);
        assert_eq!(config.pagination.repos_max_clicks, 4);
        assert_eq!(config.pagination.wait_timeout_secs, 20);
        assert_eq!(config.pagination.settle_delay_ms, 2000);
        assert_eq!(config.pagination.load_more_selector, ".ajax-pagination-btn");
        assert!(config.browser.headless);
        assert_eq!(
            config.output.topics_path(),
            PathBuf::from("Topics_Information/topics_information.csv")
        );
        assert_eq!(config.output.repos_dir, PathBuf::from("topics"));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = parse_config("[pagination]\nrepos-max-clicks = 1\n").unwrap();

        assert_eq!(config.pagination.repos_max_clicks, 1);
        assert_eq!(config.pagination.topics_max_clicks, 5);
        assert_eq!(config.pagination.wait_timeout_secs, 20);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/scraper.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[pagination]\ntopics-max-clicks = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }
}
