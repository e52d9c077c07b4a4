use std::io;

use anyhow::Result;
use clap::Parser;

use column_addition_drill::{logging, terminal, DrillConfig, DrillSession};

/// Practise two-digit column addition in the terminal.
#[derive(Parser, Debug)]
#[command(name = "column-drill", version, about)]
struct Cli {
    /// Seed for a reproducible problem sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Print the widget state as JSON after every command instead of the grid
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(logging::env_filter())
        .init();

    let cli = Cli::parse();
    let mut session = DrillSession::new(DrillConfig { rng_seed: cli.seed });
    tracing::info!(seed = ?cli.seed, "drill started");

    let stdout = io::stdout();
    terminal::run(&mut session, io::stdin().lock(), &mut stdout.lock(), cli.json)?;
    Ok(())
}
