//! Aggregation - summary statistics over an experiment series
//!
//! Level 2 - Phase-level implementation

use serde::{Deserialize, Serialize};

use luckbracket_core::SimError;

use crate::experiment::ExperimentOutcome;

/// Aggregate statistics for a full experiment series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of experiments aggregated
    pub experiments: usize,
    /// Percentage of experiments won by a top-merit contestant, floored
    pub merit_win_rate_pct: u64,
    /// Average winner luck, floored to 2 decimal places
    pub avg_winner_luck: f64,
    /// Average winner merit score, floored to 2 decimal places
    pub avg_winner_merit: f64,
}

/// Aggregate a series of experiment outcomes.
///
/// The win rate is a floored integer percentage; the averages are floored
/// to two decimal places. Both come out of integer arithmetic
/// (`sum * 100 / n`), which is exact for these bounded sums.
pub fn summarize(outcomes: &[ExperimentOutcome]) -> Result<Summary, SimError> {
    if outcomes.is_empty() {
        return Err(SimError::InvalidParameter(
            "cannot summarize an empty experiment series".to_string(),
        ));
    }

    let n = outcomes.len() as u64;
    let merit_wins = outcomes.iter().filter(|o| o.highest_merit_won).count() as u64;
    let luck_sum: u64 = outcomes.iter().map(|o| o.winner.luck as u64).sum();
    let merit_sum: u64 = outcomes
        .iter()
        .map(|o| o.winner.merit_score() as u64)
        .sum();

    Ok(Summary {
        experiments: outcomes.len(),
        merit_win_rate_pct: merit_wins * 100 / n,
        avg_winner_luck: (luck_sum * 100 / n) as f64 / 100.0,
        avg_winner_merit: (merit_sum * 100 / n) as f64 / 100.0,
    })
}
