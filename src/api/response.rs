//! Response validation and report rendering
//!
//! The review API answers with
//! `{"homeworks": [{"homework_name": ..., "status": ...}, ...], "current_date": <int>}`.
//! Nothing here is trusted until checked: the payload shape, the record
//! fields, and the status code are all validated before a report is built.

use crate::status::HomeworkStatus;
use crate::{BotError, Result};
use serde_json::Value;

/// A validated API answer
#[derive(Debug, Clone, PartialEq)]
pub struct ApiAnswer {
    /// Homework records, most recent first
    pub homeworks: Vec<Value>,

    /// Server-side timestamp to use as the next cursor, if reported
    pub current_date: Option<i64>,
}

impl ApiAnswer {
    /// Returns the record the bot reports on, if any
    pub fn latest(&self) -> Option<&Value> {
        self.homeworks.first()
    }
}

/// Checks the payload shape and extracts records and the next cursor
///
/// # Errors
///
/// * [`BotError::NotAMapping`] - payload is not a JSON object
/// * [`BotError::EmptyResponse`] - no `homeworks` key
/// * [`BotError::HomeworksNotAList`] - `homeworks` is not an array
pub fn check_response(payload: &Value) -> Result<ApiAnswer> {
    tracing::debug!("Validating API answer");

    let map = payload.as_object().ok_or(BotError::NotAMapping {
        found: json_kind(payload),
    })?;

    let homeworks = map.get("homeworks").ok_or(BotError::EmptyResponse)?;
    let homeworks = homeworks
        .as_array()
        .ok_or(BotError::HomeworksNotAList {
            found: json_kind(homeworks),
        })?
        .clone();

    let current_date = map.get("current_date").and_then(Value::as_i64);

    Ok(ApiAnswer {
        homeworks,
        current_date,
    })
}

/// Renders one homework record into a notification report
///
/// # Errors
///
/// * [`BotError::NotAMapping`] - record is not a JSON object
/// * [`BotError::MissingField`] - `homework_name` or `status` absent or not a string
/// * [`BotError::UnknownStatus`] - status is not in the catalog
pub fn parse_status(homework: &Value) -> Result<String> {
    let record = homework.as_object().ok_or(BotError::NotAMapping {
        found: json_kind(homework),
    })?;

    let homework_name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(BotError::MissingField {
            field: "homework_name",
        })?;
    let status = record
        .get("status")
        .and_then(Value::as_str)
        .ok_or(BotError::MissingField { field: "status" })?;

    let status: HomeworkStatus = status.parse()?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name,
        status.verdict()
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
