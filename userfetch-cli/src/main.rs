//! Userfetch CLI - fetch a remote user record from your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{config, fetch};

/// Userfetch - fetch and decode a remote user record
#[derive(Parser)]
#[command(name = "uf", version, about, long_about = None)]
struct Cli {
    /// Log fetch progress to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a user record
    Fetch {
        /// Locator (URL) of the user record; defaults to the configured one
        locator: Option<String>,
        /// Use the completion-callback API instead of awaiting the result
        #[arg(long)]
        callback: bool,
        /// Request timeout in seconds (overrides configuration)
        #[arg(long)]
        timeout: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fetch { locator, callback, timeout, json } => {
            fetch::run(locator, callback, timeout, json)
        }
        Commands::Config { json } => config::run(json),
    }
}
