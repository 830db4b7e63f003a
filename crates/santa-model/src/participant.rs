//! Participants and the ordered table the pairing engine walks.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SantaError};

/// A named participant with its exclusion criteria, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    /// `criteria[0]` is criterion-1. Blank cells are `None`.
    pub criteria: Vec<Option<String>>,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            criteria: Vec::new(),
        }
    }

    /// Builds a participant from raw criterion cells, treating blank cells as
    /// missing.
    pub fn with_criteria<I, S>(name: impl Into<String>, criteria: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let criteria = criteria
            .into_iter()
            .map(|value| {
                let trimmed = value.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
        Self {
            name: name.into(),
            criteria,
        }
    }

    /// Returns the value of criterion `position` (1-based).
    pub fn criterion(&self, position: usize) -> Option<&str> {
        let index = position.checked_sub(1)?;
        self.criteria.get(index)?.as_deref()
    }

    /// True when both participants carry the same value on any of the first
    /// `depth` criteria. Missing values never conflict.
    pub fn shares_any_criterion(&self, other: &Participant, depth: usize) -> bool {
        (1..=depth).any(|position| match (self.criterion(position), other.criterion(position)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        })
    }
}

/// Participants in giver processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantTable {
    participants: Vec<Participant>,
    criterion_count: usize,
}

impl ParticipantTable {
    /// Validates names and aligns every participant to the widest criteria
    /// row.
    ///
    /// # Errors
    ///
    /// Returns [`SantaError::EmptyName`] for a blank name and
    /// [`SantaError::DuplicateParticipant`] when a name repeats.
    pub fn new(mut participants: Vec<Participant>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for (row, participant) in participants.iter_mut().enumerate() {
            let trimmed = participant.name.trim();
            if trimmed.is_empty() {
                return Err(SantaError::EmptyName { row });
            }
            if trimmed.len() != participant.name.len() {
                participant.name = trimmed.to_string();
            }
            if !seen.insert(participant.name.clone()) {
                return Err(SantaError::DuplicateParticipant {
                    name: participant.name.clone(),
                });
            }
        }
        let criterion_count = participants
            .iter()
            .map(|participant| participant.criteria.len())
            .max()
            .unwrap_or(0);
        for participant in &mut participants {
            participant.criteria.resize(criterion_count, None);
        }
        Ok(Self {
            participants,
            criterion_count,
        })
    }

    /// Name-only table.
    ///
    /// # Errors
    ///
    /// Same as [`ParticipantTable::new`].
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Participant::new).collect())
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Number of criterion columns carried by every participant.
    pub fn criterion_count(&self) -> usize {
        self.criterion_count
    }

    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(|p| p.name.as_str())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.participants.iter().position(|p| p.name == name)
    }

    pub fn as_slice(&self) -> &[Participant] {
        &self.participants
    }
}

impl<'a> IntoIterator for &'a ParticipantTable {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.participants.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_criteria_become_missing() {
        let participant = Participant::with_criteria("Comet", ["B", "  ", " North "]);
        assert_eq!(participant.criterion(1), Some("B"));
        assert_eq!(participant.criterion(2), None);
        assert_eq!(participant.criterion(3), Some("North"));
        assert_eq!(participant.criterion(0), None);
        assert_eq!(participant.criterion(4), None);
    }

    #[test]
    fn missing_values_never_conflict() {
        let left = Participant::with_criteria("Cupid", ["", "Sales"]);
        let right = Participant::with_criteria("Donder", ["", "Ops"]);
        assert!(!left.shares_any_criterion(&right, 2));
    }

    #[test]
    fn conflict_checks_only_the_requested_prefix() {
        let left = Participant::with_criteria("Cupid", ["A", "Sales"]);
        let right = Participant::with_criteria("Donder", ["B", "Sales"]);
        assert!(!left.shares_any_criterion(&right, 1));
        assert!(left.shares_any_criterion(&right, 2));
        assert!(!left.shares_any_criterion(&right, 0));
    }

    #[test]
    fn rows_are_padded_to_widest() {
        let table = ParticipantTable::new(vec![
            Participant::with_criteria("Dasher", ["A", "North"]),
            Participant::with_criteria("Dancer", ["B"]),
        ])
        .unwrap();
        assert_eq!(table.criterion_count(), 2);
        assert_eq!(table.get(1).unwrap().criteria, vec![Some("B".to_string()), None]);
    }
}
