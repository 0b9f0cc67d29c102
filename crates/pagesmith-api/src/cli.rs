//! CLI command definitions for the `pagesmith` binary.
//!
//! Uses clap derive macros for argument parsing.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Build web pages from plain-English descriptions.
#[derive(Parser)]
#[command(name = "pagesmith", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Host to bind (overrides config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config.toml).
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
