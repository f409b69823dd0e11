//! Bot orchestrator - the poll loop
//!
//! Each cycle:
//! 1. Fetches statuses changed since the cursor
//! 2. Validates the answer and advances the cursor
//! 3. Renders the most recent homework record
//! 4. Delivers the report if it differs from the last delivered one
//!
//! Any failure in steps 1-3 is caught here, once, and turned into a
//! failure message that goes through the same change detection.

use crate::api::{build_http_client, check_response, parse_status, PracticumClient, ReviewApi};
use crate::bot::{BotState, ChangeDetector};
use crate::config::{Config, Credentials};
use crate::notifier::{send_message, Notifier, TelegramNotifier};
use crate::{BotError, Result};
use std::time::Duration;

/// What a single poll cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new status report was delivered
    Sent,

    /// The status report matches the last delivered one
    Unchanged,

    /// The API returned an empty homework list
    NoHomeworks,

    /// The API answer had no `homeworks` key; logged only
    EmptyResponse,

    /// A failure message was delivered
    FailureReported,

    /// The failure matches the last delivered message
    FailureSuppressed,

    /// A report or failure message could not be delivered
    DeliveryFailed,
}

/// Longest text Telegram accepts in one `sendMessage` call, in characters
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Formats a cycle failure into the message sent to the chat
///
/// The result never exceeds [`MAX_MESSAGE_CHARS`] characters.
pub fn failure_message(error: &BotError) -> String {
    let message = format!("Сбой в работе программы: {}", error);
    match message.char_indices().nth(MAX_MESSAGE_CHARS) {
        Some((cut, _)) => message[..cut].to_string(),
        None => message,
    }
}

/// The poll loop
///
/// Owns the cursor and the last delivered report; nothing else reads or
/// writes them.
pub struct Bot<A, N> {
    api: A,
    notifier: N,
    chat_id: String,
    interval: Duration,
    cursor: i64,
    detector: ChangeDetector,
    state: BotState,
}

impl Bot<PracticumClient, TelegramNotifier> {
    /// Builds a bot talking to the real review API and Telegram
    pub fn from_config(
        config: &Config,
        credentials: &Credentials,
    ) -> std::result::Result<Self, reqwest::Error> {
        let client = build_http_client()?;
        let api = PracticumClient::new(
            client.clone(),
            config.api.endpoint.clone(),
            credentials.practicum_token.clone(),
        );
        let notifier = TelegramNotifier::new(
            client,
            config.telegram.api_url.clone(),
            credentials.telegram_token.clone(),
        );

        Ok(Self::new(
            api,
            notifier,
            credentials.chat_id.clone(),
            config.poll.interval(),
        ))
    }
}

impl<A, N> Bot<A, N>
where
    A: ReviewApi,
    N: Notifier,
{
    /// Creates a bot whose cursor starts at the current time
    pub fn new(api: A, notifier: N, chat_id: impl Into<String>, interval: Duration) -> Self {
        Self {
            api,
            notifier,
            chat_id: chat_id.into(),
            interval,
            cursor: chrono::Utc::now().timestamp(),
            detector: ChangeDetector::new(),
            state: BotState::Starting,
        }
    }

    /// Overrides the starting cursor
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn state(&self) -> BotState {
        self.state
    }

    /// The last report or failure message that reached the chat
    pub fn last_sent(&self) -> &str {
        self.detector.previous()
    }

    /// Runs forever, sleeping the configured interval after every cycle
    pub async fn run(&mut self) {
        tracing::info!(
            "Bot started: cursor={}, interval={}s",
            self.cursor,
            self.interval.as_secs()
        );

        loop {
            let outcome = self.run_cycle().await;
            tracing::debug!("Cycle finished: {:?}", outcome);
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Runs one poll cycle and leaves the bot in [`BotState::Sleeping`]
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        self.transition(BotState::Polling);

        let outcome = match self.poll().await {
            Ok(Some(report)) => self.deliver(&report, false).await,
            Ok(None) => {
                tracing::info!("No new homeworks");
                CycleOutcome::NoHomeworks
            }
            Err(e) if e.is_empty_response() => {
                tracing::error!("{}. Empty response from API", e);
                CycleOutcome::EmptyResponse
            }
            Err(e) => {
                tracing::error!("Cycle failed: {}", e);
                if let BotError::ResponseCode { body, .. } = &e {
                    tracing::error!("Response body: {}", body);
                }
                if e.is_server_error() {
                    tracing::warn!(
                        "Review API server error, retrying in {}s",
                        self.interval.as_secs()
                    );
                }
                self.deliver(&failure_message(&e), true).await
            }
        };

        self.transition(BotState::Sleeping);
        outcome
    }

    /// Fetches, validates, advances the cursor, and renders the latest record
    async fn poll(&mut self) -> Result<Option<String>> {
        let payload = self.api.fetch(self.cursor).await?;
        let answer = check_response(&payload)?;

        if let Some(current_date) = answer.current_date {
            tracing::debug!("Cursor {} -> {}", self.cursor, current_date);
            self.cursor = current_date;
        }

        answer.latest().map(parse_status).transpose()
    }

    async fn deliver(&mut self, message: &str, is_failure: bool) -> CycleOutcome {
        if !self.detector.is_changed(message) {
            tracing::info!("No status update");
            return if is_failure {
                CycleOutcome::FailureSuppressed
            } else {
                CycleOutcome::Unchanged
            };
        }

        self.transition(BotState::Notifying);
        if !send_message(&self.notifier, &self.chat_id, message).await {
            return CycleOutcome::DeliveryFailed;
        }

        self.detector.record_sent(message);
        if is_failure {
            CycleOutcome::FailureReported
        } else {
            CycleOutcome::Sent
        }
    }

    fn transition(&mut self, next: BotState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        tracing::trace!("{} -> {}", self.state, next);
        self.state = next;
    }
}
