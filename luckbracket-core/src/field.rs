//! Bracket field generation

use rand::Rng;

use crate::contestant::Contestant;
use crate::error::SimError;

/// Largest supported round count (a 2^24 ≈ 16.7M contestant bracket).
pub const MAX_ROUNDS: u32 = 24;

/// Generate the ordered field for a bracket of `2^rounds` contestants.
///
/// Every contestant is sampled independently from the given generator, so a
/// seeded generator reproduces the same field.
pub fn generate_field<R: Rng>(rounds: u32, rng: &mut R) -> Result<Vec<Contestant>, SimError> {
    if rounds > MAX_ROUNDS {
        return Err(SimError::InvalidParameter(format!(
            "rounds must be at most {} (got {})",
            MAX_ROUNDS, rounds
        )));
    }

    let size = 1usize << rounds;
    Ok((0..size).map(|_| Contestant::random(rng)).collect())
}
