//! Run command - execute an experiment series and report results
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), report_results()
//! - Level 3: narration and summary printers
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;

use luckbracket_core::Contestant;
use luckbracket_tournament::{
    run_series, summarize, BattleMode, ExperimentConfig, ExperimentOutcome, Summary,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RunArgs {
    /// Number of independent experiments to run
    #[arg(long, default_value = "100")]
    pub experiments: usize,

    /// Elimination rounds per tournament (bracket size = 2^rounds)
    #[arg(long, default_value = "17")]
    pub rounds: u32,

    /// Resolve battles probabilistically (win chance weighted by final
    /// score) instead of highest-final-score-wins
    #[arg(long)]
    pub probabilistic: bool,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run experiments in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress per-experiment lines, print only the summary
    #[arg(long)]
    pub quiet: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run the experiment series
///
/// This function reads like a table of contents:
/// 1. Build the simulation configuration
/// 2. Run all experiments
/// 3. Aggregate and report results
pub fn run(args: RunArgs) -> Result<()> {
    let config = build_config(&args);
    config.validate().context("invalid run parameters")?;

    tracing::info!(
        "Starting run: {} experiments, {} rounds ({} contestants), {:?} battles",
        config.experiments,
        config.rounds,
        1u64 << config.rounds,
        config.battle_mode
    );

    let outcomes = run_series(&config).context("experiment series failed")?;
    let summary = summarize(&outcomes).context("aggregation failed")?;

    report_results(&outcomes, &summary, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build the simulation configuration from command arguments
fn build_config(args: &RunArgs) -> ExperimentConfig {
    let battle_mode = if args.probabilistic {
        BattleMode::Probabilistic
    } else {
        BattleMode::Deterministic
    };

    ExperimentConfig {
        experiments: args.experiments,
        rounds: args.rounds,
        battle_mode,
        parallel: args.parallel,
        seed: args.seed,
    }
}

/// Report series results
fn report_results(outcomes: &[ExperimentOutcome], summary: &Summary, args: &RunArgs) {
    if args.json {
        print_json_results(outcomes, summary);
        return;
    }

    if !args.quiet {
        print_experiment_details(outcomes);
    }
    print_summary(summary);
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Print the per-experiment narration
fn print_experiment_details(outcomes: &[ExperimentOutcome]) {
    for (i, outcome) in outcomes.iter().enumerate() {
        println!(
            "Experiment {}: {} contestant(s) tied for the top merit score",
            i + 1,
            outcome.leader_count()
        );
        if outcome.is_upset() {
            println!("  *** upset: winner did not hold the top merit score ***");
        }
        println!("  winner: {}", format_contestant(&outcome.winner));
        println!();
    }
}

/// Print the final summary block
fn print_summary(summary: &Summary) {
    println!("=== Final Results ===");
    println!("Experiments:        {}", summary.experiments);
    println!("Top-merit win rate: {}%", summary.merit_win_rate_pct);
    println!("Avg winner luck:    {:.2}", summary.avg_winner_luck);
    println!("Avg winner merit:   {:.2}", summary.avg_winner_merit);
}

/// Print results as JSON
fn print_json_results(outcomes: &[ExperimentOutcome], summary: &Summary) {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        experiments: &'a [ExperimentOutcome],
        summary: &'a Summary,
    }

    let output = JsonOutput {
        experiments: outcomes,
        summary,
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Format a contestant's full attribute record
fn format_contestant(c: &Contestant) -> String {
    format!(
        "talent={} effort={} luck={} (merit={}, final={:.2})",
        c.talent,
        c.effort,
        c.luck,
        c.merit_score(),
        c.final_score()
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> RunArgs {
        RunArgs {
            experiments: 10,
            rounds: 3,
            probabilistic: false,
            seed: None,
            parallel: false,
            json: false,
            quiet: false,
        }
    }

    #[test]
    fn test_build_config_deterministic() {
        let config = build_config(&base_args());
        assert_eq!(config.experiments, 10);
        assert_eq!(config.rounds, 3);
        assert_eq!(config.battle_mode, BattleMode::Deterministic);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_build_config_probabilistic_with_seed() {
        let mut args = base_args();
        args.probabilistic = true;
        args.seed = Some(42);
        args.parallel = true;

        let config = build_config(&args);
        assert_eq!(config.battle_mode, BattleMode::Probabilistic);
        assert_eq!(config.seed, Some(42));
        assert!(config.parallel);
    }

    #[test]
    fn test_format_contestant() {
        let c = Contestant::new(80, 70, 99);
        assert_eq!(
            format_contestant(&c),
            "talent=80 effort=70 luck=99 (merit=150, final=75.48)"
        );
    }

    #[test]
    fn test_run_rejects_zero_experiments() {
        let mut args = base_args();
        args.experiments = 0;
        args.quiet = true;

        assert!(run(args).is_err());
    }
}
