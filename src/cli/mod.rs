use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub mod commands;

/// Simple Ledger Protocol (SLP) Decoder
#[derive(Parser)]
#[command(name = "slp-decoder")]
#[command(about = "Decode and validate SLP token messages from OP_RETURN outputs")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./slp.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode an OP_RETURN script as an SLP message
    Decode(commands::decode::DecodeCommand),
    /// Show the push-data chunks of an OP_RETURN script
    Chunks(commands::chunks::ChunksCommand),
    /// Decode every row of a CSV file of txid,script_hex pairs
    Batch(commands::batch::BatchCommand),
}

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_from(cli.config.as_deref())?;

    // RUST_LOG wins over the configured level
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .try_init();

    match cli.command {
        Commands::Decode(command) => command.run(&config),
        Commands::Chunks(command) => command.run(),
        Commands::Batch(command) => command.run(&config),
    }
}
