use std::fmt::{Display, Formatter, Result};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Active,
    Candidate,
}

impl Display for Membership {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Membership::Active => write!(f, "in the squad"),
            Membership::Candidate => write!(f, "in the suggested players"),
        }
    }
}

/// Rejected roster operation. The roster is never modified when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Player {0} not found")]
    NotFound(String),

    #[error("{name} is already {membership}")]
    InvalidState { name: String, membership: Membership },

    #[error("{name} cannot be transfer listed while {membership}")]
    InvalidOperation { name: String, membership: Membership },

    #[error("Duplicate player name {0}")]
    DuplicateName(String),
}
