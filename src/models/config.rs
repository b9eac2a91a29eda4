//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::SiteSelectors;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Target site settings
    #[serde(default)]
    pub site: SiteConfig,

    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// API server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.site.listing_url.trim().is_empty() {
            return Err(AppError::validation("site.listing_url is empty"));
        }
        if url::Url::parse(&self.site.listing_url).is_err() {
            return Err(AppError::validation("site.listing_url is not a valid URL"));
        }
        if url::Url::parse(&self.site.origin).is_err() {
            return Err(AppError::validation("site.origin is not a valid URL"));
        }
        if self.site.brand_filter.trim().is_empty() {
            return Err(AppError::validation("site.brand_filter is empty"));
        }
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.page_deadline_secs == 0 {
            return Err(AppError::validation(
                "crawler.page_deadline_secs must be > 0",
            ));
        }
        if self.crawler.max_concurrent == 0 {
            return Err(AppError::validation("crawler.max_concurrent must be > 0"));
        }
        Ok(())
    }
}

/// Target site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Listing root URL; pages are addressed by appending `?page=<n>`
    #[serde(default = "defaults::listing_url")]
    pub listing_url: String,

    /// Scheme + host prefixed onto relative detail-page hrefs
    #[serde(default = "defaults::origin")]
    pub origin: String,

    /// Brand substring a card's description must contain unless the caller
    /// asks for all brands
    #[serde(default = "defaults::brand_filter")]
    pub brand_filter: String,

    /// Detail-page option label whose values are kept on the record
    #[serde(default = "defaults::option_label")]
    pub option_label: String,

    /// CSS selectors for the site's DOM
    #[serde(default)]
    pub selectors: SiteSelectors,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            listing_url: defaults::listing_url(),
            origin: defaults::origin(),
            brand_filter: defaults::brand_filter(),
            option_label: defaults::option_label(),
            selectors: SiteSelectors::default(),
        }
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Deadline in seconds for one listing page including its detail fetches
    #[serde(default = "defaults::page_deadline")]
    pub page_deadline_secs: u64,

    /// Maximum concurrent detail-page requests within one listing page
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Retries after the first failed attempt for transient fetch errors
    #[serde(default = "defaults::max_retries")]
    pub max_retries: u32,

    /// Base delay in milliseconds for exponential retry backoff
    #[serde(default = "defaults::backoff_base")]
    pub backoff_base_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            page_deadline_secs: defaults::page_deadline(),
            max_concurrent: defaults::max_concurrent(),
            max_retries: defaults::max_retries(),
            backoff_base_ms: defaults::backoff_base(),
        }
    }
}

/// API server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "defaults::host")]
    pub host: String,

    /// Bind port
    #[serde(default = "defaults::port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
        }
    }
}

mod defaults {
    // Site defaults
    pub fn listing_url() -> String {
        "https://webscraper.io/test-sites/e-commerce/static/computers/laptops".into()
    }
    pub fn origin() -> String {
        "https://webscraper.io".into()
    }
    pub fn brand_filter() -> String {
        "Lenovo".into()
    }
    pub fn option_label() -> String {
        "HDD".into()
    }

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; lapscan/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn page_deadline() -> u64 {
        120
    }
    pub fn max_concurrent() -> usize {
        5
    }
    pub fn max_retries() -> u32 {
        2
    }
    pub fn backoff_base() -> u64 {
        500
    }

    // Server defaults
    pub fn host() -> String {
        "127.0.0.1".into()
    }
    pub fn port() -> u16 {
        8080
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_concurrency() {
        let mut config = Config::default();
        config.crawler.max_concurrent = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_listing_url() {
        let mut config = Config::default();
        config.site.listing_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_overrides_and_fills_defaults() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[site]\nbrand_filter = \"Asus\"\n\n[crawler]\nmax_concurrent = 2"
        )
        .expect("write config");

        let config = Config::load(file.path()).expect("load config");
        assert_eq!(config.site.brand_filter, "Asus");
        assert_eq!(config.crawler.max_concurrent, 2);
        // Untouched sections keep their defaults.
        assert_eq!(config.site.option_label, "HDD");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/lapscan.toml");
        assert_eq!(config.site.brand_filter, "Lenovo");
    }
}
