mod cli;
mod commands;
mod file_io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "binfab=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            input,
            json,
            max_depth,
        } => {
            commands::decode::handle(input.as_deref(), json, max_depth)?;
        }

        Commands::Fields { input, json } => {
            commands::fields::handle(input.as_deref(), json)?;
        }

        Commands::Inspect { input } => {
            commands::inspect::handle(input.as_deref())?;
        }
    }

    Ok(())
}
