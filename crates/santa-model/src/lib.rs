pub mod error;
pub mod options;
pub mod pair;
pub mod participant;

pub use error::{Result, SantaError};
pub use options::{ExhaustionPolicy, MAX_CRITERIA, ShuffleMode, ShuffleOptions, validate_criteria};
pub use pair::SantaPair;
pub use participant::{Participant, ParticipantTable};
