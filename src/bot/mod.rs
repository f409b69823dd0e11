//! Poll loop
//!
//! This module ties the review API, the status catalog, and the notifier
//! together:
//! - The bot lifecycle state machine
//! - Change detection against the last delivered report
//! - The orchestrator that runs one poll cycle after another

mod detector;
mod orchestrator;
mod state;

pub use detector::ChangeDetector;
pub use orchestrator::{failure_message, Bot, CycleOutcome, MAX_MESSAGE_CHARS};
pub use state::BotState;
