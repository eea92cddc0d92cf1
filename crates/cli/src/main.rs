use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use newsdesk_core::DEFAULT_CONFIG_PATH;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "Server-rendered news browsing proxy", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Path to the JSON configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Load and validate the configuration, then exit
    CheckConfig {
        /// Path to the JSON configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { config, port, host } => commands::serve::run(&config, port, host).await,
        Commands::CheckConfig { config } => commands::check_config::run(&config),
    }
}
