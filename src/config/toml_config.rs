use crate::config::ServiceConfig;
use crate::utils::error::{Result, VesselError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub scraper: Option<ScraperSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScraperSection {
    pub search_url: Option<String>,
    pub user_agents: Option<Vec<String>>,
    pub proxies: Option<Vec<String>>,
    pub max_attempts: Option<u32>,
    pub retry_delay_min_secs: Option<u64>,
    pub retry_delay_max_secs: Option<u64>,
    pub timeout_seconds: Option<u64>,
    pub max_redirects: Option<usize>,
    pub strict_identifier: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(VesselError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VesselError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROXY_PASSWORD})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VesselError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 將檔案中有設定的欄位覆蓋到 `config`
    pub fn apply_to(&self, config: &mut ServiceConfig) {
        if let Some(bind) = self.server.as_ref().and_then(|s| s.bind.clone()) {
            config.bind_address = bind;
        }

        let Some(scraper) = &self.scraper else {
            return;
        };
        let settings = &mut config.scraper;

        if let Some(search_url) = &scraper.search_url {
            settings.search_url = search_url.clone();
        }
        if let Some(user_agents) = &scraper.user_agents {
            settings.user_agents = user_agents.clone();
        }
        if let Some(proxies) = &scraper.proxies {
            settings.proxies = proxies.clone();
        }
        if let Some(max_attempts) = scraper.max_attempts {
            settings.max_attempts = max_attempts;
        }
        if let Some(min) = scraper.retry_delay_min_secs {
            settings.retry_delay_min_secs = min;
        }
        if let Some(max) = scraper.retry_delay_max_secs {
            settings.retry_delay_max_secs = max;
        }
        if let Some(timeout) = scraper.timeout_seconds {
            settings.request_timeout = Duration::from_secs(timeout);
        }
        if let Some(max_redirects) = scraper.max_redirects {
            settings.max_redirects = max_redirects;
        }
        if let Some(strict) = scraper.strict_identifier {
            settings.strict_identifier = strict;
        }
    }

    /// 以預設值為基底建立完整配置
    pub fn into_service_config(self) -> ServiceConfig {
        let mut config = ServiceConfig::default();
        self.apply_to(&mut config);
        config
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_service_config().validate()
    }
}
