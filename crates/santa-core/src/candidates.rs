//! Receiver candidate filtering.

use santa_model::ParticipantTable;

/// Number of leading criteria compared at relaxation `level`.
///
/// Levels 0 and 1 both compare criterion-1 only; a table without criterion
/// columns compares nothing.
pub fn criterion_depth(level: usize, available: usize) -> usize {
    level.max(1).min(available)
}

/// Members of `pool` that differ from `giver` on every one of the first
/// `depth` criteria.
pub fn eligible(participants: &ParticipantTable, giver: usize, pool: &[usize], depth: usize) -> Vec<usize> {
    let members = participants.as_slice();
    let Some(giver) = members.get(giver) else {
        return Vec::new();
    };
    pool.iter()
        .copied()
        .filter(|&index| {
            members
                .get(index)
                .is_some_and(|candidate| !giver.shares_any_criterion(candidate, depth))
        })
        .collect()
}
