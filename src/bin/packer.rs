use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use u_packer::{SolverConfig, Strategy};

/// Pick the most valuable set of items that fits each package.
#[derive(Debug, Parser)]
#[command(name = "packer", version, about)]
struct Cli {
    /// Input file, one `capacity : (index,weight,€cost) ...` line per package.
    input: PathBuf,

    /// Solve packages in parallel.
    #[arg(long)]
    parallel: bool,

    /// DP table storage: `materialized` or `backpointer`.
    #[arg(long, default_value_t = Strategy::Backpointer)]
    strategy: Strategy,

    /// Log per-package solver details.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.parallel && cfg!(not(feature = "parallel")) {
        warn!("built without the `parallel` feature, solving packages sequentially");
    }

    let config = SolverConfig::default()
        .with_strategy(cli.strategy)
        .with_parallel(cli.parallel);

    let output = u_packer::pack_with(&cli.input, &config)
        .with_context(|| format!("failed to pack {}", cli.input.display()))?;
    println!("{output}");

    Ok(())
}
