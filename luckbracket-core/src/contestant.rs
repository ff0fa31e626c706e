//! Contestant - the unit that enters a tournament bracket

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Highest value any single attribute can take.
pub const ATTRIBUTE_MAX: u8 = 100;

/// Weight of talent in the final score (percent).
pub const TALENT_WEIGHT: u32 = 49;
/// Weight of effort in the final score (percent).
pub const EFFORT_WEIGHT: u32 = 49;
/// Weight of luck in the final score (percent).
pub const LUCK_WEIGHT: u32 = 2;

/// A tournament participant.
///
/// Attributes are sampled uniformly from 0..=100 and never change after
/// generation. Duplicates are possible; brackets track contestants by
/// position, not by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contestant {
    pub talent: u8,
    pub effort: u8,
    pub luck: u8,
}

impl Contestant {
    /// Create a contestant with fixed attributes.
    pub fn new(talent: u8, effort: u8, luck: u8) -> Self {
        Self {
            talent,
            effort,
            luck,
        }
    }

    /// Sample a contestant with uniform random attributes in 0..=100.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            talent: rng.gen_range(0..=ATTRIBUTE_MAX),
            effort: rng.gen_range(0..=ATTRIBUTE_MAX),
            luck: rng.gen_range(0..=ATTRIBUTE_MAX),
        }
    }

    /// Merit score: talent + effort, in 0..=200.
    ///
    /// Used only for post-hoc analysis of who deserved to win; battles
    /// never look at it.
    pub fn merit_score(&self) -> u16 {
        self.talent as u16 + self.effort as u16
    }

    /// Final score: 49% talent, 49% effort, 2% luck.
    ///
    /// The only quantity battles compare.
    pub fn final_score(&self) -> f64 {
        let weighted = TALENT_WEIGHT * self.talent as u32
            + EFFORT_WEIGHT * self.effort as u32
            + LUCK_WEIGHT * self.luck as u32;
        weighted as f64 / 100.0
    }
}
