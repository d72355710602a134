//! grove CLI - play and replay line-completion board games in the terminal

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grove")]
#[command(version, about = "Tic-tac-toe and tree planting with time travel", long_about = None)]
struct Cli {
    /// Log debug events (overrides RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(grove::cli::commands::play::PlayArgs),

    /// Replay a scripted sequence of commands
    Replay(grove::cli::commands::replay::ReplayArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => grove::cli::commands::play::execute(args),
        Commands::Replay(args) => grove::cli::commands::replay::execute(args),
    }
}
