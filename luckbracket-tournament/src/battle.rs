//! Battle resolution - a single pairwise contest
//!
//! Level 3 - Step-level implementation

use rand::Rng;

use luckbracket_core::{Contestant, SimError};

use crate::config::BattleMode;

/// Resolve one battle between `a` and `b`, returning the winner.
///
/// The generator is only consumed in probabilistic mode (one uniform draw
/// per battle).
pub fn battle<R: Rng>(
    a: Contestant,
    b: Contestant,
    mode: BattleMode,
    rng: &mut R,
) -> Result<Contestant, SimError> {
    match mode {
        BattleMode::Deterministic => Ok(deterministic_battle(a, b)),
        BattleMode::Probabilistic => probabilistic_battle(a, b, rng),
    }
}

/// Strictly higher final score wins; an exact tie goes to `b`.
fn deterministic_battle(a: Contestant, b: Contestant) -> Contestant {
    if a.final_score() > b.final_score() {
        a
    } else {
        b
    }
}

/// `a` wins iff `final(a) / (final(a) + final(b))` is at least a fresh
/// uniform draw from [0, 1).
fn probabilistic_battle<R: Rng>(
    a: Contestant,
    b: Contestant,
    rng: &mut R,
) -> Result<Contestant, SimError> {
    let a_score = a.final_score();
    let b_score = b.final_score();
    let total = a_score + b_score;

    if total == 0.0 {
        return Err(SimError::DegenerateBattle);
    }

    let a_win_ratio = a_score / total;
    if a_win_ratio >= rng.gen::<f64>() {
        Ok(a)
    } else {
        Ok(b)
    }
}
