//! Album CLI - browse and add to the event album from the terminal
//!
//! Lists the album, uploads files, and prints delivery URLs against the
//! hosted media service configured through `ALBUM_*` variables or flags.

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::{resolve_config, ConfigOverrides};
use crate::commands::completions::run_completions;
use crate::commands::list::run_list;
use crate::commands::upload::run_upload;
use crate::commands::urls::run_urls;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("album=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let overrides = ConfigOverrides {
        cloud_name: cli.cloud_name,
        upload_preset: cli.upload_preset,
        tag: cli.tag,
    };

    match cli.command {
        Commands::List { json } => {
            let config = resolve_config(&overrides)?;
            run_list(config, json).await?;
        }
        Commands::Upload {
            paths,
            single,
            no_refresh,
        } => {
            let config = resolve_config(&overrides)?;
            run_upload(config, paths, single, no_refresh).await?;
        }
        Commands::Urls {
            public_id,
            format,
            json,
        } => {
            let config = resolve_config(&overrides)?;
            run_urls(&config, &public_id, &format, json)?;
        }
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
