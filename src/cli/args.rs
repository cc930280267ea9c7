//! CLI argument definitions using clap
//!
//! Commands:
//! - cnf-checker session [--config <path>]
//! - cnf-checker evaluate [--config <path>]
//! - cnf-checker timeline

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Check whether an R&D claim needs a Claim Notification Form
#[derive(Parser, Debug)]
#[command(name = "cnf-checker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive session: one JSON request per stdin line
    Session {
        /// Path to configuration file (built-in defaults if omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Evaluate a complete answer list read from stdin and exit
    Evaluate {
        /// Path to configuration file (built-in defaults if omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the key dates for a period read from stdin
    Timeline,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
