//! CLI frontend for the Caverns text adventure.

mod commands;

use std::process;

use caverns_engine::EngineConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "caverns",
    about = "Caverns: explore 54 rooms of caves, bridges and castle ruins",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game, reading one command per line from stdin
    Play {
        /// RNG seed for combat rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Maximum number of objects the player can carry
        #[arg(long, default_value = "10")]
        carry_limit: usize,

        /// Number of moves before the candle goes out
        #[arg(long, default_value = "250")]
        light_turns: u32,
    },

    /// Print the static exit table
    Map,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            carry_limit,
            light_turns,
        } => commands::play::run(
            EngineConfig::default()
                .with_seed(seed)
                .with_carry_limit(carry_limit)
                .with_light_turns(light_turns),
        ),
        Commands::Map => commands::map::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
