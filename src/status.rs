/// Review status catalog
///
/// Maps the closed set of status codes reported by the review API to the
/// verdict text shown to the user.
use crate::BotError;
use std::fmt;
use std::str::FromStr;

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// Reviewed, no remarks
    Approved,

    /// Taken for review
    Reviewing,

    /// Reviewed, the reviewer left remarks
    Rejected,
}

impl HomeworkStatus {
    /// Returns the human-readable verdict for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    /// Returns the status code as the API spells it
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Returns all known statuses
    pub fn all_statuses() -> Vec<Self> {
        vec![Self::Approved, Self::Reviewing, Self::Rejected]
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(BotError::UnknownStatus {
                status: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}
