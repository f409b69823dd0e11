//! Configuration module for Homework Bot
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file, and reading the secrets the bot needs from the
//! process environment.
//!
//! # Example
//!
//! ```no_run
//! use homework_bot::config::{load_config, Credentials};
//! use std::path::Path;
//!
//! let config = load_config(Path::new("bot.toml")).unwrap();
//! let credentials = Credentials::from_env().unwrap();
//! println!("Polling {} every {}s", config.api.endpoint, config.poll.retry_time);
//! ```

mod credentials;
mod parser;
mod types;
mod validation;

// Re-export types
pub use credentials::{
    Credentials, PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR, TELEGRAM_TOKEN_VAR,
};
pub use types::{
    ApiConfig, Config, LoggingConfig, PollConfig, TelegramConfig, DEFAULT_ENDPOINT,
    DEFAULT_LOG_FILE, DEFAULT_RETRY_TIME, DEFAULT_TELEGRAM_API_URL,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
