use thiserror::Error;

/// Errors raised while building participant tables or assigning pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SantaError {
    #[error(
        "wrong value for criteria: expected a number between 0 and {max} inclusive, got {value} instead"
    )]
    InvalidCriteria { value: i64, max: usize },

    #[error("no feasible receiver for {giver} ({remaining} unassigned receivers all share criterion-1)")]
    NoFeasibleReceiver { giver: String, remaining: usize },

    #[error("at least two participants are required, got {count}")]
    TooFewParticipants { count: usize },

    #[error("participant name appears more than once: {name}")]
    DuplicateParticipant { name: String },

    #[error("participant at row {row} has an empty name")]
    EmptyName { row: usize },

    #[error("assignment left {name} as their own receiver")]
    SelfAssignment { name: String },
}

pub type Result<T> = std::result::Result<T, SantaError>;
