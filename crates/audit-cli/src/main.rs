//! Package Audit CLI
//!
//! The command-line interface for validating and publishing a Python
//! project's pip requirements manifests.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        // Diagnostics go to stdout so callers scripting the tool see
        // them in the same stream as the echoed command output.
        println!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} Package Audit CLI", "pkg-audit".green().bold());
            println!();
            println!("Run {} for available commands.", "pkg-audit --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Upload => commands::run_upload(&cwd),
        Commands::Check { json } => commands::run_check(&cwd, json),
        Commands::Resolve { file } => commands::run_resolve(&cwd, &file),
        Commands::Clean => commands::run_clean(&cwd),
    }
}
