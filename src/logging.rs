//! Log file sink
//!
//! The bot logs to stdout and appends the same lines to one file that is
//! never rotated.

use crate::{ConfigError, ConfigResult};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Opens `path` for appending, creating parent directories as needed
///
/// # Errors
///
/// [`ConfigError::LogFile`] if the directory or file cannot be created.
pub fn open_log_file(path: &Path) -> ConfigResult<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ConfigError::Validation(format!("log file '{}' has no file name", path.display()))
        })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)?;

    Ok(appender)
}
