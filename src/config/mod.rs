#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::utils::error::{Result, VesselError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_proxy_url, validate_range,
    validate_url, Validate,
};
use std::time::Duration;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_SEARCH_URL: &str =
    "https://www.marinevesseltraffic.com/2013/06/imo-number-search.html";

pub const DEFAULT_USER_AGENTS: [&str; 3] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
];

/// 爬取流程使用的設定，啟動時建立一次之後唯讀。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperSettings {
    pub search_url: String,
    pub user_agents: Vec<String>,
    pub proxies: Vec<String>,
    pub max_attempts: u32,
    pub retry_delay_min_secs: u64,
    pub retry_delay_max_secs: u64,
    pub request_timeout: Duration,
    pub max_redirects: usize,
    pub strict_identifier: bool,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            user_agents: DEFAULT_USER_AGENTS.iter().map(|s| s.to_string()).collect(),
            proxies: Vec::new(),
            max_attempts: 3,
            retry_delay_min_secs: 2,
            retry_delay_max_secs: 5,
            request_timeout: Duration::from_secs(30),
            max_redirects: 10,
            strict_identifier: true,
        }
    }
}

impl Validate for ScraperSettings {
    fn validate(&self) -> Result<()> {
        validate_url("scraper.search_url", &self.search_url)?;

        for user_agent in &self.user_agents {
            validate_non_empty_string("scraper.user_agents", user_agent)?;
        }
        for proxy in &self.proxies {
            validate_proxy_url("scraper.proxies", proxy)?;
        }

        validate_positive_number("scraper.max_attempts", self.max_attempts as usize, 1)?;
        validate_range("scraper.retry_delay_max_secs", self.retry_delay_max_secs, 0, 300)?;
        validate_range(
            "scraper.retry_delay_min_secs",
            self.retry_delay_min_secs,
            0,
            self.retry_delay_max_secs,
        )?;
        validate_positive_number(
            "scraper.timeout_seconds",
            self.request_timeout.as_secs() as usize,
            1,
        )?;

        Ok(())
    }
}

/// 伺服器與爬取設定的合併結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_address: String,
    pub scraper: ScraperSettings,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            scraper: ScraperSettings::default(),
        }
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        self.bind_address
            .parse::<std::net::SocketAddr>()
            .map_err(|e| VesselError::InvalidConfigValueError {
                field: "server.bind".to_string(),
                value: self.bind_address.clone(),
                reason: format!("Invalid socket address: {}", e),
            })?;
        self.scraper.validate()
    }
}
