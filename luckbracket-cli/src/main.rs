//! LUCKBRACKET CLI - Command-line interface
//!
//! Runs batches of single-elimination tournament experiments among randomly
//! generated contestants and reports how often the highest-merit contestant
//! actually wins.

use clap::Parser;

mod run_cmd;

#[derive(Parser)]
#[command(name = "luckbracket")]
#[command(about = "Tournament luck-vs-merit experiment runner")]
struct Cli {
    #[command(flatten)]
    run: run_cmd::RunArgs,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    run_cmd::run(cli.run)
}
