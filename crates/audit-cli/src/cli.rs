//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Package Audit - Validate and publish pip requirements manifests
#[derive(Parser, Debug)]
#[command(name = "pkg-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Upload the requirements manifests to requires.io
    ///
    /// Reads the API token from the REQUIRES_TOKEN environment variable
    /// and must run from the project root (the parent of the
    /// requirements directory).
    Upload,

    /// Evaluate the ordering and version rules from .audit/config.toml
    Check {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved pinned entries of a manifest in order
    Resolve {
        /// Manifest file to resolve, relative to the project root
        file: PathBuf,
    },

    /// Uninstall retired requirements and refresh the bootstrap pins
    Clean,
}
