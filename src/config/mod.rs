use crate::api::coinpaprika::API_BASE_URL;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const TOKEN_ENV_VAR: &str = "TELEGRAM_BOT_TOKEN";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub api: ApiConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub updates_timeout_secs: u32,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            updates_timeout_secs: 60,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Unset means the HTTP client's own default (no timeout).
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enable_prometheus: bool,
    pub prometheus_port: u16,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            enable_prometheus: true,
            prometheus_port: 9900,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }

    /// Layers overrides on top of the file values. A flag beats the
    /// environment, the environment beats the file.
    pub fn with_overrides(
        mut self,
        token_flag: Option<String>,
        token_env: Option<String>,
        metrics_port: Option<u16>,
    ) -> Self {
        if let Some(token) = token_flag.or(token_env).filter(|t| !t.trim().is_empty()) {
            self.telegram.bot_token = token;
        }
        if let Some(port) = metrics_port {
            self.monitoring.prometheus_port = port;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.telegram.bot_token.trim().is_empty() {
            return Err(Error::ConfigError(format!(
                "telegram API token is required (--token or {})",
                TOKEN_ENV_VAR
            )));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(Error::ConfigError("api.base_url cannot be empty".to_string()));
        }
        if self.monitoring.enable_prometheus && self.monitoring.prometheus_port == 0 {
            return Err(Error::ConfigError("metrics port cannot be 0".to_string()));
        }
        Ok(())
    }
}
