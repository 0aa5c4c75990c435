use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod input;
mod report;
mod run;

#[derive(Debug, Parser)]
#[command(name = "crosscheck")]
#[command(about = "Cross-checks a business registry against captured map-search pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve every business in the input list and write the CSV report.
    Run {
        /// Business list, one entry per line.
        #[arg(long, default_value = "bisnis.txt")]
        input: PathBuf,
        /// Directory of captured page snapshots.
        #[arg(long, default_value = "pages")]
        pages: PathBuf,
        /// Report destination.
        #[arg(long, default_value = "hasil_crosscheck.csv")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = crosscheck_core::load_app_config()
        .map_err(|e| anyhow::anyhow!("configuration error: {e}"))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    match cli.command {
        Commands::Run {
            input,
            pages,
            output,
        } => run::run_crosscheck(&config, &input, &pages, &output).await,
    }
}
