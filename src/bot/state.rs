/// Bot lifecycle states
///
/// The poll loop moves `Starting -> Polling -> (Notifying) -> Sleeping -> Polling ...`.
/// `Fatal` can only be reached from `Starting`.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotState {
    /// Validating credentials and configuration
    Starting,

    /// Fetching and validating the API answer
    Polling,

    /// Delivering a changed report or failure message
    Notifying,

    /// Waiting out the retry interval
    Sleeping,

    /// Startup failed; the process exits
    Fatal,
}

impl BotState {
    /// Returns true if `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: BotState) -> bool {
        matches!(
            (self, next),
            (Self::Starting, Self::Polling)
                | (Self::Starting, Self::Fatal)
                | (Self::Polling, Self::Notifying)
                | (Self::Polling, Self::Sleeping)
                | (Self::Notifying, Self::Sleeping)
                | (Self::Sleeping, Self::Polling)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Polling => "polling",
            Self::Notifying => "notifying",
            Self::Sleeping => "sleeping",
            Self::Fatal => "fatal",
        }
    }

    /// Returns all states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Starting,
            Self::Polling,
            Self::Notifying,
            Self::Sleeping,
            Self::Fatal,
        ]
    }
}

impl fmt::Display for BotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_only_from_starting() {
        for state in BotState::all_states() {
            assert_eq!(
                state.can_transition_to(BotState::Fatal),
                state == BotState::Starting,
                "{state}"
            );
        }
    }

    #[test]
    fn test_cycle_transitions() {
        assert!(BotState::Starting.can_transition_to(BotState::Polling));
        assert!(BotState::Polling.can_transition_to(BotState::Notifying));
        assert!(BotState::Polling.can_transition_to(BotState::Sleeping));
        assert!(BotState::Notifying.can_transition_to(BotState::Sleeping));
        assert!(BotState::Sleeping.can_transition_to(BotState::Polling));

        assert!(!BotState::Notifying.can_transition_to(BotState::Polling));
        assert!(!BotState::Sleeping.can_transition_to(BotState::Notifying));
        assert!(!BotState::Fatal.can_transition_to(BotState::Polling));
    }

    #[test]
    fn test_display() {
        assert_eq!(BotState::Notifying.to_string(), "notifying");
    }
}
