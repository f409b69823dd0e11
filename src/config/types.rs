use serde::Deserialize;
use std::time::Duration;

/// Default review API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Default pause between poll cycles, in seconds
pub const DEFAULT_RETRY_TIME: u64 = 600;

/// Default log file path
pub const DEFAULT_LOG_FILE: &str = "logs_bot.log";

/// Main configuration structure for Homework Bot
///
/// Every section is optional in the TOML file; a missing file is equivalent
/// to `Config::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Review API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Homework statuses endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

/// Telegram delivery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API base URL, without the `/bot<token>` suffix
    #[serde(rename = "api-url", default = "default_telegram_api_url")]
    pub api_url: String,
}

/// Poll loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Pause between cycles (seconds)
    #[serde(rename = "retry-time", default = "default_retry_time")]
    pub retry_time: u64,
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.retry_time)
    }
}

/// Log sink configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Append-only log file, written in addition to stdout
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_url: default_telegram_api_url(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            retry_time: DEFAULT_RETRY_TIME,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_telegram_api_url() -> String {
    DEFAULT_TELEGRAM_API_URL.to_string()
}

fn default_retry_time() -> u64 {
    DEFAULT_RETRY_TIME
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}
