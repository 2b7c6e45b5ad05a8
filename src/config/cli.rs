use crate::config::toml_config::TomlConfig;
use crate::config::ServiceConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "vessel-info")]
#[command(about = "HTTP service that looks up vessel details by MMSI")]
pub struct CliConfig {
    #[arg(long, help = "Address to listen on (default 127.0.0.1:5000)")]
    pub bind: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Base URL of the IMO/MMSI search page")]
    pub search_url: Option<String>,

    // User-Agent 字串本身含逗號，只能重複指定
    #[arg(long = "user-agent", help = "User-Agent to rotate through (repeatable)")]
    pub user_agents: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub proxies: Vec<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Accept any non-empty identifier instead of 9 digits")]
    pub lenient: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 預設值 < TOML 檔 < 命令列參數
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = ServiceConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(bind) = &self.bind {
            config.bind_address = bind.clone();
        }
        if let Some(search_url) = &self.search_url {
            config.scraper.search_url = search_url.clone();
        }
        if !self.user_agents.is_empty() {
            config.scraper.user_agents = self.user_agents.clone();
        }
        if !self.proxies.is_empty() {
            config.scraper.proxies = self.proxies.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.scraper.request_timeout = Duration::from_secs(timeout);
        }
        if self.lenient {
            config.scraper.strict_identifier = false;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["vessel-info"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nbind = \"0.0.0.0:7000\"\n[scraper]\nmax_attempts = 4\ntimeout_seconds = 5"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "vessel-info",
            "--config",
            path.as_str(),
            "--bind",
            "127.0.0.1:9000",
            "--proxies",
            "http://p1.example.com:8080,http://p2.example.com:8080",
            "--user-agent",
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko)",
            "--user-agent",
            "curl/8.0",
            "--lenient",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.scraper.max_attempts, 4);
        assert_eq!(config.scraper.request_timeout, Duration::from_secs(5));
        assert_eq!(config.scraper.proxies.len(), 2);
        assert_eq!(
            config.scraper.user_agents,
            vec![
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko)",
                "curl/8.0"
            ]
        );
        assert!(!config.scraper.strict_identifier);
    }
}
