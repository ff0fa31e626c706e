//! Tournament execution - pairwise elimination over a power-of-two field
//!
//! Level 3 - Step-level implementation

use rand::Rng;

use luckbracket_core::{Contestant, SimError};

use crate::battle::battle;
use crate::config::BattleMode;

/// Reduce a power-of-two field to a single winner.
///
/// Pairs form in original order (positions 0-1, 2-3, ...); each round's
/// winners become the next round's field, still in order. A single-element
/// field is already its own winner and consumes no randomness.
pub fn run_tournament<R: Rng>(
    field: &[Contestant],
    mode: BattleMode,
    rng: &mut R,
) -> Result<Contestant, SimError> {
    if !field.len().is_power_of_two() {
        return Err(SimError::InvalidBracketSize(field.len()));
    }

    let mut current = field.to_vec();
    while current.len() > 1 {
        let mut winners = Vec::with_capacity(current.len() / 2);
        for i in (0..current.len()).step_by(2) {
            winners.push(battle(current[i], current[i + 1], mode, rng)?);
        }
        current = winners;
    }

    Ok(current[0])
}
