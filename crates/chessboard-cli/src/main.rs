//! Chessboard CLI - exercises the rules engine from the command line.
//!
//! Counts perft nodes, lists legal moves, plays move sequences and checks
//! position notation.

mod commands;
mod config;

use anyhow::{anyhow, Context};
use chessboard_core::Square;
use chessboard_engine::Position;
use clap::{Parser, Subcommand};
use config::CliConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chess rules engine command-line tool.
#[derive(Parser)]
#[command(name = "chessboard")]
#[command(about = "Chess rules engine: perft, move listing and playback")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count leaf nodes of the legal move tree
    Perft {
        /// Search depth in plies
        depth: u32,
        /// Position to search instead of the configured start position
        #[arg(short, long)]
        notation: Option<String>,
        /// Print the node count under each root move
        #[arg(long)]
        divide: bool,
        /// Override the configured depth limit
        #[arg(long)]
        max_depth: Option<u32>,
    },
    /// List the legal moves of the side to move
    Moves {
        /// Position to inspect instead of the configured start position
        #[arg(short, long)]
        notation: Option<String>,
        /// Only moves starting on this square (e.g. e2)
        #[arg(short, long)]
        square: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play coordinate moves (e2e4) and print the result
    Play {
        /// Position to start from instead of the configured start position
        #[arg(short, long)]
        notation: Option<String>,
        /// Moves in order
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Check notation and print it re-encoded
    Validate {
        /// The notation to check
        notation: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("loading configuration")?;
    tracing::debug!("Configuration: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Perft {
            depth,
            notation,
            divide,
            max_depth,
        } => {
            let position = resolve_position(notation.as_deref(), &config)?;
            let limit = max_depth.unwrap_or(config.max_perft_depth);
            commands::perft(&position, depth, divide, limit, &mut out)?;
        }
        Commands::Moves {
            notation,
            square,
            json,
        } => {
            let position = resolve_position(notation.as_deref(), &config)?;
            let square = square.as_deref().map(parse_square).transpose()?;
            commands::moves(&position, square, json, &mut out)?;
        }
        Commands::Play { notation, moves } => {
            let position = resolve_position(notation.as_deref(), &config)?;
            commands::play(position, &moves, &mut out)?;
        }
        Commands::Validate { notation } => {
            tracing::info!("Validating {:?}", notation);
            commands::validate(&notation, &mut out)?;
        }
    }

    Ok(())
}

/// Decodes the `--notation` flag, falling back to the configured position.
fn resolve_position(notation: Option<&str>, config: &CliConfig) -> anyhow::Result<Position> {
    match notation {
        Some(text) => Position::from_notation(text).context("invalid --notation"),
        None => Ok(config.start_position()?),
    }
}

fn parse_square(text: &str) -> anyhow::Result<Square> {
    Square::from_algebraic(text).ok_or_else(|| anyhow!("invalid square: {}", text))
}
