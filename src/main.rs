use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HeadlessMode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Headless snake simulation")]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement and the autopilot
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks (runs until Ctrl+C otherwise)
    #[arg(long)]
    ticks: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "grid_snake=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(ticks) = cli.ticks {
        config = config.with_max_ticks(ticks);
    }

    HeadlessMode::new(config).run().await?;

    Ok(())
}
