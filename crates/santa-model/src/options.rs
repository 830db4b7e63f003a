//! Options controlling how participants are shuffled into pairs.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SantaError};

/// Highest number of exclusion criteria a shuffle may request.
pub const MAX_CRITERIA: usize = 5;

/// How receivers are chosen for each giver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShuffleMode {
    /// Only the participant name matters; anyone but yourself.
    #[default]
    NameOnly,
    /// Givers and receivers must differ on the leading criterion columns,
    /// relaxing one criterion at a time when no candidate is left.
    MultiCriterion,
}

/// What to do when criterion relaxation bottoms out with receivers still
/// available that share criterion-1 with the giver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExhaustionPolicy {
    /// Stop with [`SantaError::NoFeasibleReceiver`].
    #[default]
    Fail,
    /// Pick among the remaining receivers without any criterion filter.
    IgnoreCriteria,
}

/// Options for a single shuffle run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleOptions {
    pub mode: ShuffleMode,
    /// Requested criteria count; `None` means "every criterion column".
    pub criteria: Option<i64>,
    pub exhaustion: ExhaustionPolicy,
}

impl ShuffleOptions {
    pub fn new(mode: ShuffleMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Name-only shuffle.
    pub fn name_only() -> Self {
        Self::new(ShuffleMode::NameOnly)
    }

    /// Multi-criterion shuffle over every available criterion column.
    pub fn multi_criterion() -> Self {
        Self::new(ShuffleMode::MultiCriterion)
    }

    pub fn with_criteria(mut self, criteria: Option<i64>) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_exhaustion(mut self, exhaustion: ExhaustionPolicy) -> Self {
        self.exhaustion = exhaustion;
        self
    }

    /// Lenient options: draw receivers sharing criterion-1 instead of failing
    /// when relaxation is exhausted.
    pub fn ignoring_criteria(mode: ShuffleMode) -> Self {
        Self::new(mode).with_exhaustion(ExhaustionPolicy::IgnoreCriteria)
    }

    /// Resolve the starting relaxation level against the number of criterion
    /// columns the table actually carries.
    ///
    /// # Errors
    ///
    /// Returns [`SantaError::InvalidCriteria`] when the requested count lies
    /// outside `0..=MAX_CRITERIA`.
    pub fn starting_level(&self, available: usize) -> Result<usize> {
        let level = match self.criteria {
            Some(value) => validate_criteria(value)?,
            None => available.min(MAX_CRITERIA),
        };
        Ok(level.min(available))
    }
}

/// Check a requested criteria count.
///
/// # Errors
///
/// Returns [`SantaError::InvalidCriteria`] naming the rejected value.
pub fn validate_criteria(value: i64) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|count| *count <= MAX_CRITERIA)
        .ok_or(SantaError::InvalidCriteria {
            value,
            max: MAX_CRITERIA,
        })
}
