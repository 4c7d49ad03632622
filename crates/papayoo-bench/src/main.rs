use std::path::PathBuf;

use clap::Parser;

use papayoo_bench::config::{PlayoutConfig, ResolvedOutputs};
use papayoo_bench::logging::init_logging;
use papayoo_bench::runner::PlayoutRunner;
use papayoo_core::AppInfo;
use papayoo_core::model::player::Seat;

/// Seeded random-playout harness for the Papayoo rules engine.
#[derive(Debug, Parser)]
#[command(
    name = "papayoo-bench",
    author,
    version,
    about = "Deterministic Papayoo playout harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/bench.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of rounds to play.
    #[arg(long, value_name = "ROUNDS")]
    rounds: Option<usize>,

    /// Override the RNG seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Exit after validating the configuration.
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = PlayoutConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(rounds) = cli.rounds {
        config.rounds.count = rounds;
    }

    if let Some(seed) = cli.seed {
        config.rounds.seed = Some(seed);
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let rounds = config.rounds.count;

    println!(
        "{} {}: loaded configuration '{run_id}' ({rounds} round{})",
        AppInfo::name(),
        AppInfo::version(),
        if rounds == 1 { "" } else { "s" }
    );

    if cli.validate_only {
        println!("Validation-only mode: playout skipped.");
        return Ok(());
    }

    let logging_guard = init_logging(&config.logging, &outputs, &run_id)?;
    let runner = PlayoutRunner::new(config, outputs);
    let summary = runner.run()?;

    println!(
        "Playout complete for '{run_id}': {} rounds → {} rows at {}",
        summary.rounds_played,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    println!("Summary table: {}", summary.summary_path.display());
    for seat in Seat::LOOP {
        println!(
            "  {seat:<5} mean score {:>6.2}  mean reward {:+.3}",
            summary.stats.mean_score(seat),
            summary.stats.mean_reward(seat)
        );
    }
    if let Some(guard) = logging_guard.as_ref() {
        println!("Telemetry log: {}", guard.telemetry_path.display());
    }

    Ok(())
}
