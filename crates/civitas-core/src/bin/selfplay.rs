//! Runs one autopiloted session and prints the result as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use civitas_core::{load_config, run_selfplay, ConfigSource, SelfPlayConfig};

#[derive(Parser)]
#[command(name = "civitas-selfplay")]
#[command(about = "Play a headless civitas session with the built-in autopilot", version)]
struct Cli {
    /// Session config (YAML). Defaults to the embedded session.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many turns
    #[arg(short, long, default_value_t = 200)]
    turns: u32,

    /// Override the session seed
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match cli.config {
        Some(path) => ConfigSource::Path(path),
        None => ConfigSource::Embedded,
    };
    let mut config = match load_config(source) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("failed to load session config: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let selfplay = SelfPlayConfig {
        max_turns: cli.turns,
    };
    let result = match run_selfplay(config, &selfplay) {
        Ok(result) => result,
        Err(err) => {
            tracing::error!("self-play failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("failed to encode result: {err}");
            ExitCode::FAILURE
        }
    }
}
