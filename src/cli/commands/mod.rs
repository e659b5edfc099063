//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod query;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use wasteboard::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "wasteboard")]
#[command(about = "Municipal waste dataset query service and web frontend")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Run the JSON query service over the dataset
    Backend {
        /// Address to bind to (port, host, or host:port)
        #[arg(short, long)]
        bind: Option<String>,
        /// Path to the semicolon-delimited dataset
        #[arg(short, long, env = "WASTE_DATASET")]
        data: Option<PathBuf>,
    },

    /// Run the HTML frontend
    Frontend {
        /// Address to bind to (port, host, or host:port)
        #[arg(short, long)]
        bind: Option<String>,
        /// Base URL of the query service
        #[arg(long, env = "WASTE_BACKEND_URL")]
        backend_url: Option<String>,
    },

    /// Ask a running query service
    Query {
        /// Query service URL (defaults to the configured backend URL)
        #[arg(long, short, env = "WASTE_BACKEND_URL")]
        url: Option<String>,

        /// Output as JSON
        #[arg(long, global = true)]
        json: bool,

        #[command(subcommand)]
        command: QueryCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum QueryCommands {
    /// Total waste for a comune in a year
    TotalWaste { comune: String, year: i32 },
    /// Total waste for every year of a comune
    AllYears { comune: String },
    /// Highest and lowest per-capita waste in a year
    Extremes { year: i32 },
    /// Raccolta differenziata change for a comune
    Collection { comune: String },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
    };
    let (mut settings, _config) = load_settings_with_options(options).await;

    match cli.command {
        Commands::Backend { bind, data } => {
            if let Some(data) = data {
                settings.dataset_path = data;
            }
            let bind = bind.unwrap_or_else(|| settings.backend_bind.clone());
            serve::cmd_backend(&settings, &bind).await
        }
        Commands::Frontend { bind, backend_url } => {
            if let Some(url) = backend_url {
                settings.backend_url = url;
            }
            let bind = bind.unwrap_or_else(|| settings.frontend_bind.clone());
            serve::cmd_frontend(&settings, &bind).await
        }
        Commands::Query { url, json, command } => {
            if let Some(url) = url {
                settings.backend_url = url;
            }
            query::cmd_query(&settings, command, json).await
        }
    }
}
