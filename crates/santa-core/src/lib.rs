//! Pairing engine for Secret Santa draws.
//!
//! Givers are processed in table order. Each one draws a receiver at random
//! from the participants not yet drawn, filtered by as many leading criteria
//! as still leave a candidate. When the last giver is left with only
//! themselves, an earlier draw is swapped (see [`AssignmentState::repair`]).

pub mod candidates;
pub mod engine;
pub mod state;

pub use engine::{Assignment, AssignmentStats, PairingEngine, assign, assign_with_seed};
pub use state::{AssignmentState, Repair};
