//! Pairing engine implementation.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use santa_model::{
    ExhaustionPolicy, ParticipantTable, Result, SantaError, SantaPair, ShuffleMode, ShuffleOptions,
};

use crate::candidates::{criterion_depth, eligible};
use crate::state::AssignmentState;

/// Outcome of drawing a receiver for one giver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Draw {
    /// Receiver chosen while honoring `level` criteria.
    Receiver { receiver: usize, level: usize },
    /// Receiver chosen after every criterion was dropped.
    Unconstrained { receiver: usize },
    /// Only the giver is left undrawn.
    RepairNeeded,
}

/// Counters describing how a draw was reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentStats {
    /// Relaxation level each giver started from (`None` for name-only draws).
    pub starting_level: Option<usize>,
    /// Givers whose receiver satisfied fewer criteria than the starting level.
    pub relaxed: usize,
    /// Givers whose receiver was drawn ignoring every criterion.
    pub unconstrained: usize,
    /// Earlier pairs rewritten by the repair step.
    pub repairs: usize,
    /// Index of the pair the repair step rewrote. The final pair is the
    /// other half of that swap.
    pub repaired_pair: Option<usize>,
}

/// A completed draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub pairs: Vec<SantaPair>,
    pub stats: AssignmentStats,
}

/// Draws giver/receiver pairs for one participant table.
#[derive(Debug, Clone, Copy)]
pub struct PairingEngine<'a> {
    participants: &'a ParticipantTable,
    options: ShuffleOptions,
    starting_level: Option<usize>,
}

impl<'a> PairingEngine<'a> {
    /// Validates the options against `participants`.
    ///
    /// The criteria count is only checked in [`ShuffleMode::MultiCriterion`].
    ///
    /// # Errors
    ///
    /// Returns [`SantaError::InvalidCriteria`] for a criteria count outside
    /// `0..=5` and [`SantaError::TooFewParticipants`] for fewer than two
    /// participants.
    pub fn new(participants: &'a ParticipantTable, options: ShuffleOptions) -> Result<Self> {
        let starting_level = match options.mode {
            ShuffleMode::NameOnly => None,
            ShuffleMode::MultiCriterion => {
                Some(options.starting_level(participants.criterion_count())?)
            }
        };
        if participants.len() < 2 {
            return Err(SantaError::TooFewParticipants {
                count: participants.len(),
            });
        }
        Ok(Self {
            participants,
            options,
            starting_level,
        })
    }

    pub fn starting_level(&self) -> Option<usize> {
        self.starting_level
    }

    /// Runs the draw to completion.
    ///
    /// # Errors
    ///
    /// Returns [`SantaError::NoFeasibleReceiver`] when a giver finds every
    /// remaining receiver sharing criterion-1, unless the options ask for
    /// [`ExhaustionPolicy::IgnoreCriteria`].
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Assignment> {
        let mut state = AssignmentState::new(self.participants.len());
        let mut stats = AssignmentStats {
            starting_level: self.starting_level,
            ..AssignmentStats::default()
        };

        for giver in 0..self.participants.len() {
            state.push_giver(giver);
            match self.draw(&state, giver, rng)? {
                Draw::Receiver { receiver, level } => {
                    if self.starting_level.is_some_and(|start| level < start) {
                        stats.relaxed += 1;
                    }
                    state.push_receiver(receiver);
                }
                Draw::Unconstrained { receiver } => {
                    stats.relaxed += 1;
                    stats.unconstrained += 1;
                    state.push_receiver(receiver);
                }
                Draw::RepairNeeded => {
                    if let Some(repair) = state.repair(giver, rng) {
                        debug!(
                            giver,
                            position = repair.position,
                            displaced = repair.displaced,
                            "repaired last draw"
                        );
                        stats.repairs += 1;
                        stats.repaired_pair = Some(repair.position);
                    }
                }
            }
        }

        let pairs = state.into_pairs(self.participants)?;
        info!(
            mode = ?self.options.mode,
            pairs = pairs.len(),
            starting_level = ?stats.starting_level,
            relaxed = stats.relaxed,
            unconstrained = stats.unconstrained,
            repairs = stats.repairs,
            "draw complete"
        );
        Ok(Assignment { pairs, stats })
    }

    fn draw<R: Rng + ?Sized>(&self, state: &AssignmentState, giver: usize, rng: &mut R) -> Result<Draw> {
        let pool = state.undrawn_except(giver);
        if pool.is_empty() {
            return Ok(Draw::RepairNeeded);
        }
        let Some(start) = self.starting_level else {
            return Ok(pick(&pool, rng).map_or(Draw::RepairNeeded, |receiver| Draw::Receiver {
                receiver,
                level: 0,
            }));
        };

        let available = self.participants.criterion_count();
        let mut level = start;
        loop {
            let depth = criterion_depth(level, available);
            let candidates = eligible(self.participants, giver, &pool, depth);
            if let Some(receiver) = pick(&candidates, rng) {
                return Ok(Draw::Receiver { receiver, level });
            }
            debug!(giver, level, pool = pool.len(), "no receiver at level, relaxing");
            if level <= 1 {
                break;
            }
            level -= 1;
        }

        match self.options.exhaustion {
            ExhaustionPolicy::IgnoreCriteria => {
                warn!(giver, pool = pool.len(), "criteria exhausted, drawing without them");
                Ok(pick(&pool, rng).map_or(Draw::RepairNeeded, |receiver| Draw::Unconstrained {
                    receiver,
                }))
            }
            ExhaustionPolicy::Fail => Err(SantaError::NoFeasibleReceiver {
                giver: self.participant_name(giver),
                remaining: pool.len(),
            }),
        }
    }

    fn participant_name(&self, index: usize) -> String {
        self.participants
            .get(index)
            .map(|participant| participant.name.clone())
            .unwrap_or_default()
    }
}

fn pick<R: Rng + ?Sized>(candidates: &[usize], rng: &mut R) -> Option<usize> {
    candidates.choose(rng).copied()
}

/// Draws a receiver for every participant.
///
/// # Errors
///
/// See [`PairingEngine::new`] and [`PairingEngine::run`].
pub fn assign<R: Rng + ?Sized>(
    participants: &ParticipantTable,
    options: &ShuffleOptions,
    rng: &mut R,
) -> Result<Vec<SantaPair>> {
    Ok(PairingEngine::new(participants, *options)?.run(rng)?.pairs)
}

/// Runs a reproducible draw: the same seed always yields the same pairs.
///
/// # Errors
///
/// See [`PairingEngine::new`] and [`PairingEngine::run`].
pub fn assign_with_seed(
    participants: &ParticipantTable,
    options: &ShuffleOptions,
    seed: u64,
) -> Result<Assignment> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    PairingEngine::new(participants, *options)?.run(&mut rng)
}
