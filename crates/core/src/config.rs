//! Static configuration, read once at startup and shared read-only.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::{
    ConfigError, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
    Listing, env_parse_with_default,
};

pub const API_KEY_ENV: &str = "NEWSDESK_API_KEY";
pub const PAGE_SIZE_ENV: &str = "NEWSDESK_PAGE_SIZE";
pub const CACHE_TTL_ENV: &str = "NEWSDESK_CACHE_TTL_SECS";

const fn default_page_size() -> u64 {
    10
}

const fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_site_title() -> String {
    "Newsdesk".to_owned()
}

/// Upstream endpoint URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoints {
    pub top_headlines: String,
    pub everything: String,
}

/// Settings for the upstream response cache.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl_secs: u64,
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true, ttl_secs: DEFAULT_CACHE_TTL_SECS, max_capacity: DEFAULT_CACHE_CAPACITY }
    }
}

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: String,
    pub endpoints: Endpoints,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    pub categories: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_site_title")]
    pub site_title: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"***")
            .field("endpoints", &self.endpoints)
            .field("page_size", &self.page_size)
            .field("categories", &self.categories)
            .field("countries", &self.countries)
            .field("cache", &self.cache)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("site_title", &self.site_title)
            .finish()
    }
}

impl Config {
    /// Read, apply environment overrides and validate.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or fails
    /// [`Config::validate`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let mut config: Self = serde_json::from_str(&raw)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        config.apply_env_overrides();
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            self.api_key = key;
        }
        self.page_size = env_parse_with_default(PAGE_SIZE_ENV, self.page_size);
        self.cache.ttl_secs = env_parse_with_default(CACHE_TTL_ENV, self.cache.ttl_secs);
    }

    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "api_key is empty (set it in the file or via {API_KEY_ENV})"
            )));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".to_owned()));
        }
        if self.categories.is_empty() {
            return Err(ConfigError::Invalid("categories must not be empty".to_owned()));
        }
        Ok(())
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Landing page for `/` and unknown paths: first configured category, page 1.
    pub fn default_listing(&self) -> Listing {
        match self.categories.first() {
            Some(first) => Listing::category(first.clone()),
            None => Listing::fallback(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "api_key": "k",
            "endpoints": {
                "top_headlines": "https://newsapi.org/v2/top-headlines",
                "everything": "https://newsapi.org/v2/everything"
            },
            "categories": ["general", "business", "science"],
            "countries": ["us", "fr"]
        })
    }

    #[test]
    fn test_defaults_fill_optional_fields() {
        let config: Config = serde_json::from_value(sample()).unwrap();
        assert_eq!(config.page_size, 10);
        assert!(config.cache.enabled);
        assert_eq!(config.cache.ttl_secs, DEFAULT_CACHE_TTL_SECS);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.site_title, "Newsdesk");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_listing_is_first_category() {
        let config: Config = serde_json::from_value(sample()).unwrap();
        assert_eq!(config.default_listing(), Listing::category("general"));
        assert!(config.has_category("science"));
        assert!(!config.has_category("doesnotexist"));
    }

    #[test]
    fn test_validate_rejects_empty_categories() {
        let mut value = sample();
        value["categories"] = json!([]);
        let config: Config = serde_json::from_value(value).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("categories"), "unexpected error: {err}");
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut value = sample();
        value["page_size"] = json!(0);
        let config: Config = serde_json::from_value(value).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_missing_key() {
        let mut value = sample();
        value["api_key"] = json!("  ");
        let config: Config = serde_json::from_value(value).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut value = sample();
        value["api_key"] = json!("super-secret");
        let config: Config = serde_json::from_value(value).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = Config::load(Path::new("/nonexistent/newsdesk/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    // The only test in this crate that touches the NEWSDESK_* variables.
    #[test]
    fn test_env_overrides_replace_file_values() {
        let mut config: Config = serde_json::from_value(sample()).unwrap();
        unsafe {
            std::env::set_var(API_KEY_ENV, "from-env");
            std::env::set_var(PAGE_SIZE_ENV, "25");
            std::env::set_var(CACHE_TTL_ENV, "not-a-number");
        }
        config.apply_env_overrides();
        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.cache.ttl_secs, DEFAULT_CACHE_TTL_SECS);

        unsafe { std::env::set_var(CACHE_TTL_ENV, "42") };
        config.apply_env_overrides();
        assert_eq!(config.cache.ttl_secs, 42);
        unsafe {
            std::env::remove_var(API_KEY_ENV);
            std::env::remove_var(PAGE_SIZE_ENV);
            std::env::remove_var(CACHE_TTL_ENV);
        }
    }
}
