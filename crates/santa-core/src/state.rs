//! Mutable bookkeeping for a draw in progress.

use rand::Rng;
use santa_model::{ParticipantTable, Result, SantaError, SantaPair};

/// An earlier draw rewritten by [`AssignmentState::repair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repair {
    /// Pair index whose receiver became the repaired giver.
    pub position: usize,
    /// Receiver moved from that pair to the repaired giver.
    pub displaced: usize,
}

/// Givers and receivers drawn so far, as participant indices.
///
/// `givers[i]` gives to `receivers[i]`.
#[derive(Debug, Clone, Default)]
pub struct AssignmentState {
    givers: Vec<usize>,
    receivers: Vec<usize>,
    drawn: Vec<bool>,
}

impl AssignmentState {
    pub fn new(participants: usize) -> Self {
        Self {
            givers: Vec::with_capacity(participants),
            receivers: Vec::with_capacity(participants),
            drawn: vec![false; participants],
        }
    }

    #[cfg(test)]
    fn givers(&self) -> &[usize] {
        &self.givers
    }

    #[cfg(test)]
    fn receivers(&self) -> &[usize] {
        &self.receivers
    }

    pub fn push_giver(&mut self, giver: usize) {
        if !self.givers.contains(&giver) {
            self.givers.push(giver);
        }
    }

    pub fn push_receiver(&mut self, receiver: usize) {
        self.drawn[receiver] = true;
        self.receivers.push(receiver);
    }

    /// Participants other than `giver` that nobody has drawn yet, in table
    /// order.
    pub fn undrawn_except(&self, giver: usize) -> Vec<usize> {
        (0..self.drawn.len())
            .filter(|&index| index != giver && !self.drawn[index])
            .collect()
    }

    /// Swaps `giver` into a random earlier draw and hands them the receiver
    /// it displaced.
    ///
    /// Used when `giver` is the last one and only they remain undrawn. The
    /// earlier giver at the chosen position now gives to `giver`, so a
    /// previously settled pair changes.
    ///
    /// Returns `None` when nothing has been drawn.
    pub fn repair<R: Rng + ?Sized>(&mut self, giver: usize, rng: &mut R) -> Option<Repair> {
        if self.receivers.is_empty() {
            return None;
        }
        let position = rng.random_range(0..self.receivers.len());
        let displaced = std::mem::replace(&mut self.receivers[position], giver);
        self.drawn[giver] = true;
        self.receivers.push(displaced);
        Some(Repair { position, displaced })
    }

    /// Resolves indices to names, checking the draw is complete and has no
    /// self-assignment.
    ///
    /// # Errors
    ///
    /// Returns [`SantaError::SelfAssignment`] if a giver drew themselves.
    pub fn into_pairs(self, participants: &ParticipantTable) -> Result<Vec<SantaPair>> {
        debug_assert_eq!(self.givers.len(), self.receivers.len());
        debug_assert_eq!(self.givers.len(), participants.len());
        let names = participants.as_slice();
        self.givers
            .iter()
            .zip(&self.receivers)
            .map(|(&giver, &receiver)| {
                let giver_name = &names[giver].name;
                if giver == receiver {
                    return Err(SantaError::SelfAssignment {
                        name: giver_name.clone(),
                    });
                }
                Ok(SantaPair::new(giver_name.as_str(), names[receiver].name.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn undrawn_excludes_giver_and_drawn() {
        let mut state = AssignmentState::new(4);
        state.push_giver(0);
        state.push_receiver(2);
        assert_eq!(state.undrawn_except(1), vec![0, 3]);
        assert_eq!(state.undrawn_except(3), vec![0, 1]);
    }

    #[test]
    fn givers_are_not_added_twice() {
        let mut state = AssignmentState::new(2);
        state.push_giver(1);
        state.push_giver(1);
        assert_eq!(state.givers(), &[1]);
    }

    #[test]
    fn repair_swaps_last_giver_into_earlier_draw() {
        // 0 -> 1, 1 -> 0, and 2 is left with only itself.
        let mut state = AssignmentState::new(3);
        state.push_giver(0);
        state.push_receiver(1);
        state.push_giver(1);
        state.push_receiver(0);
        state.push_giver(2);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let Repair { position, displaced } = state.repair(2, &mut rng).unwrap();

        assert!(position < 2);
        assert_eq!(displaced, 1 - position);
        assert_eq!(state.receivers().len(), 3);
        assert_eq!(state.receivers()[position], 2);
        assert_eq!(state.receivers()[2], displaced);
        for (giver, receiver) in state.givers().iter().zip(state.receivers()) {
            assert_ne!(giver, receiver);
        }
    }

    #[test]
    fn repair_without_draws_does_nothing() {
        let mut state = AssignmentState::new(1);
        state.push_giver(0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(state.repair(0, &mut rng), None);
        assert!(state.receivers().is_empty());
    }
}
