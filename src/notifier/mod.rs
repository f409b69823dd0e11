//! Chat delivery
//!
//! Delivery failures never stop the poll loop: [`send_message`] logs them
//! and reports the outcome as a plain `bool`.

mod telegram;

pub use telegram::TelegramNotifier;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for chat delivery
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Chat API error (status {status}): {description}")]
    Api { status: u16, description: String },
}

/// Capability to deliver a text message to a chat
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError>;
}

/// Sends `text` to `chat_id`, logging the outcome
///
/// Returns `true` if the message was delivered.
pub async fn send_message<N>(notifier: &N, chat_id: &str, text: &str) -> bool
where
    N: Notifier + ?Sized,
{
    tracing::info!("Sending message to chat {}", chat_id);

    match notifier.send(chat_id, text).await {
        Ok(()) => {
            tracing::info!("Message sent: {}", text);
            true
        }
        Err(e) => {
            tracing::error!("Message not sent: {}", e);
            false
        }
    }
}
