use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "tweetsent")]
#[command(about = "Collect historical posts, store them, and report their sentiment")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch, store and classify posts, then print the sentiment report (default)
    Run {
        /// Query parameters file; overrides `TWEETSENT_QUERY_PATH`
        #[arg(long)]
        query: Option<PathBuf>,
    },
    /// Write the search credentials file and exit
    Credentials {
        /// Query parameters file; its scope picks the endpoint
        #[arg(long)]
        query: Option<PathBuf>,
    },
    /// Classify a single text and print the intermediate values
    Classify {
        /// Text to classify
        text: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run { query: None }) {
        Commands::Run { query } => {
            let config = tweetsent_core::load_app_config_from_env()?;
            init_tracing(&config.log_level)?;
            commands::run_collect(&config, query).await?;
        }
        Commands::Credentials { query } => {
            let config = tweetsent_core::load_app_config_from_env()?;
            init_tracing(&config.log_level)?;
            commands::write_credentials(&config, query)?;
        }
        Commands::Classify { text } => {
            init_tracing("warn")?;
            commands::classify_text(&text, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
