//! Homework Bot: a Practicum review-status notifier
//!
//! This crate polls the homework review API on a fixed interval, detects when
//! the latest submission's review status changes, and forwards a notification
//! to a single Telegram chat.

pub mod api;
pub mod bot;
pub mod config;
pub mod logging;
pub mod notifier;
pub mod status;

use thiserror::Error;

/// Failures of a single poll cycle
///
/// Every variant except [`BotError::EmptyResponse`] is turned into a failure
/// notification by the orchestrator.
#[derive(Debug, Error)]
pub enum BotError {
    /// `body` is kept for the logs and left out of the message text
    #[error("Эндпойнт {url} не отвечает: {status}, {reason}")]
    ResponseCode {
        url: String,
        status: u16,
        reason: String,
        body: String,
    },

    #[error("При запросе к эндпойнту произошла ошибка: {source}: {url}, from_date={from_date}")]
    Connection {
        url: String,
        from_date: i64,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Ответ API должен быть словарем, получено: {found}")]
    NotAMapping { found: &'static str },

    #[error("Пустой ответ от API")]
    EmptyResponse,

    #[error("Ключ homeworks должен содержать список, получено: {found}")]
    HomeworksNotAList { found: &'static str },

    #[error("Отсутствует \"{field}\"")]
    MissingField { field: &'static str },

    #[error("Получен неизвестный статус работы: {status}")]
    UnknownStatus { status: String },
}

impl BotError {
    /// True for the "no `homeworks` key" case, which is logged but never notified
    pub fn is_empty_response(&self) -> bool {
        matches!(self, Self::EmptyResponse)
    }

    /// True when the API answered with a 5xx status
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ResponseCode { status, .. } if *status >= 500)
    }
}

/// Configuration-specific errors
///
/// All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Failed to open log file: {0}")]
    LogFile(#[from] tracing_appender::rolling::InitError),
}

/// Result type alias for poll cycle operations
pub type Result<T> = std::result::Result<T, BotError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use bot::{Bot, BotState, ChangeDetector, CycleOutcome};
pub use config::{Config, Credentials};
pub use status::HomeworkStatus;
