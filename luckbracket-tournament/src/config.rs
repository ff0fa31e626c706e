//! Configuration types for experiment runs
//!
//! Level 4 - Utilities and configuration

use serde::{Deserialize, Serialize};

use luckbracket_core::{SimError, MAX_ROUNDS};

/// Battle resolution mode, fixed for a whole tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleMode {
    /// Higher final score wins; an exact tie goes to the second contestant
    Deterministic,
    /// Win probability proportional to final score
    Probabilistic,
}

impl Default for BattleMode {
    fn default() -> Self {
        BattleMode::Deterministic
    }
}

/// Experiment series configuration.
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Number of independent experiments to run
    pub experiments: usize,
    /// Elimination rounds per tournament (bracket size = 2^rounds)
    pub rounds: u32,
    /// Battle resolution mode
    pub battle_mode: BattleMode,
    /// Whether to run experiments in parallel
    pub parallel: bool,
    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            experiments: 100,
            rounds: 17,
            battle_mode: BattleMode::Deterministic,
            parallel: false,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Create a deterministic-mode config.
    pub fn deterministic(experiments: usize, rounds: u32) -> Self {
        Self {
            experiments,
            rounds,
            battle_mode: BattleMode::Deterministic,
            ..Default::default()
        }
    }

    /// Create a probabilistic-mode config.
    pub fn probabilistic(experiments: usize, rounds: u32) -> Self {
        Self {
            experiments,
            rounds,
            battle_mode: BattleMode::Probabilistic,
            ..Default::default()
        }
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check parameters before running.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.experiments == 0 {
            return Err(SimError::InvalidParameter(
                "experiments must be at least 1".to_string(),
            ));
        }
        if self.rounds > MAX_ROUNDS {
            return Err(SimError::InvalidParameter(format!(
                "rounds must be at most {} (got {})",
                MAX_ROUNDS, self.rounds
            )));
        }
        Ok(())
    }
}
