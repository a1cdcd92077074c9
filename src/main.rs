use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tile_snake::game::GameConfig;
use tile_snake::logging;
use tile_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "tile_snake")]
#[command(version, about = "Snake on a tile grid, in your terminal")]
struct Cli {
    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Maximum log level
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,

    /// Seed for food placement, for reproducible rounds
    #[arg(long)]
    seed: Option<u64>,

    /// Draw grid dots on empty cells
    #[arg(long)]
    grid: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let mut human_mode = HumanMode::new(GameConfig::default(), cli.seed).with_grid_lines(cli.grid);
    human_mode.run().await?;

    Ok(())
}
