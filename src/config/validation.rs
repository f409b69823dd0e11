use crate::config::types::{ApiConfig, Config, LoggingConfig, PollConfig, TelegramConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_api_config(&config.api)?;
    validate_telegram_config(&config.telegram)?;
    validate_poll_config(&config.poll)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    validate_http_url("endpoint", &config.endpoint)
}

fn validate_telegram_config(config: &TelegramConfig) -> Result<(), ConfigError> {
    validate_http_url("api-url", &config.api_url)
}

fn validate_poll_config(config: &PollConfig) -> Result<(), ConfigError> {
    if config.retry_time < 1 {
        return Err(ConfigError::Validation(format!(
            "retry-time must be >= 1s, got {}s",
            config.retry_time
        )));
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if config.file.trim().is_empty() {
        return Err(ConfigError::Validation(
            "logging file cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates that `value` is an absolute http(s) URL
fn validate_http_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", key, value, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https, got '{}'",
            key, value, other
        ))),
    }
}
